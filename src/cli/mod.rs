//! Command-line interface for kafstore

pub mod args;

pub use args::{AnalyzeArgs, Cli, Commands, GenerateArgs};
