//! Configuration module for kafstore
//!
//! Handles loading and managing configuration from TOML files.

pub mod settings;

pub use settings::{Settings, StoreEncryption};
