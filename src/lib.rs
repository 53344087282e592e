//! Kafstore Library
//!
//! Converts certificate-authority material supplied as PEM text into the
//! containers needed for Kafka mutual-TLS client authentication:
//! - PEM decoding and certificate metadata extraction
//! - Root/self-signed chain classification
//! - Private key ingestion (unencrypted RSA and EC keys)
//! - PKCS#12 keystore synthesis with a friendly alias
//! - Trust-store script and client properties templating
//!
//! # Usage
//!
//! ```rust,ignore
//! use kafstore::config::StoreEncryption;
//! use kafstore::store_ops::{assemble, GenerateRequest};
//!
//! let request = GenerateRequest {
//!     ca_chain_pem: ca_chain,
//!     bundle_pem: bundle,
//!     cert_pem: None,
//!     key_pem: key,
//!     alias: "kafka-client".into(),
//!     password: "changeit".into(),
//!     bootstrap: Some("broker.example.com:9093".into()),
//! };
//! let bundle = assemble(&request, StoreEncryption::default())?;
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod store_ops;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Settings, StoreEncryption};
pub use models::{CertificateRecord, KeystoreBundle};
pub use store_ops::GenerateRequest;
pub use utils::{KafstoreError, Result};
