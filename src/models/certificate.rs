//! Certificate record types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Structured view of one decoded X.509 certificate within a chain.
///
/// Subject and issuer are canonical RFC 4514-style renderings of the
/// distinguished names, in the attribute order embedded in the certificate.
/// `is_root` is string equality of those two renderings: a syntactic
/// self-signed check, not a signature verification.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateRecord {
    /// Position within the source chain text, preserving file order
    pub index: usize,
    pub subject: String,
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub is_root: bool,
}

impl fmt::Display for CertificateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (issued by {}, valid {} to {}{})",
            self.index,
            self.subject,
            self.issuer,
            self.not_before.format("%Y-%m-%d"),
            self.not_after.format("%Y-%m-%d"),
            if self.is_root { ", root" } else { "" }
        )
    }
}
