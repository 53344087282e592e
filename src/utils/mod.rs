//! Utility modules for kafstore
//!
//! This module contains the error types shared across the crate.

pub mod error;

pub use error::{
    ChainError, ConfigError, KafstoreError, KeyError, KeystoreError, PemError, Result,
};
