//! Custom error types for kafstore
//!
//! This module defines domain-specific error types using `thiserror` for
//! all the different failure modes that can occur while analyzing certificate
//! chains and synthesizing keystores.

use thiserror::Error;

/// Top-level error type for the kafstore application
#[derive(Error, Debug)]
pub enum KafstoreError {
    #[error("PEM decoding error: {0}")]
    Pem(#[from] PemError),

    #[error("Certificate chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Private key error: {0}")]
    Key(#[from] KeyError),

    #[error("Keystore error: {0}")]
    Keystore(#[from] KeystoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// PEM decoding errors
///
/// Malformed blocks are not fatal on their own: the decoder records them as
/// warnings and keeps scanning, so these variants surface only when a caller
/// chooses to treat a skipped block as an error.
#[derive(Error, Debug)]
pub enum PemError {
    #[error("Malformed PEM block at position {index}: {message}")]
    MalformedBlock { index: usize, message: String },

    #[error("Block at position {index} is not a valid X.509 certificate: {message}")]
    InvalidCertificate { index: usize, message: String },
}

/// Chain classification errors
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("No certificates found in {source_name}")]
    NoCertificatesFound { source_name: String },

    #[error("No root certificate found: the CA chain did not decode to any certificates")]
    NoRootCertificateFound,
}

/// Private key parsing errors
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Encrypted private keys are not supported; supply an unencrypted key")]
    EncryptedKeyUnsupported,

    #[error("Invalid private key format: {message}")]
    InvalidKeyFormat { message: String },
}

/// Keystore synthesis errors
#[derive(Error, Debug)]
pub enum KeystoreError {
    #[error("No certificate found in the supplied leaf PEM text")]
    NoCertificateFound,

    #[error("PKCS#12 encoding failed: {message}")]
    Pkcs12 { message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias using KafstoreError
pub type Result<T> = std::result::Result<T, KafstoreError>;
