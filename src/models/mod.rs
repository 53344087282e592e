//! Data models for kafstore

pub mod bundle;
pub mod certificate;

pub use bundle::KeystoreBundle;
pub use certificate::CertificateRecord;
