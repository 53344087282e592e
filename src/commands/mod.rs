//! Command implementations for kafstore

pub mod analyze;
pub mod generate;

pub use analyze::run_analyze;
pub use generate::run_generate;
