//! Root certificate classification
//!
//! Picks the root certificate out of a decoded chain. Detection is the
//! syntactic self-signed check (subject rendering equals issuer rendering),
//! not a signature verification, and the fallback for chains without any
//! self-signed certificate is positional: CA chains are conventionally
//! authored root-first, so the first certificate is the best-effort choice.

use crate::store_ops::decoder::{DecodedCertificate, DecodedChain};
use crate::utils::ChainError;

/// Return the root certificate of a chain.
///
/// The first certificate whose subject equals its issuer wins; if several
/// qualify, source order decides. A chain with no self-signed certificate
/// falls back to its first certificate. Only an empty chain is an error.
pub fn classify_root<'a>(
    chain: &'a DecodedChain,
    source_name: &str,
) -> Result<&'a DecodedCertificate, ChainError> {
    if chain.is_empty() {
        return Err(ChainError::NoCertificatesFound {
            source_name: source_name.to_string(),
        });
    }

    match chain.certificates.iter().find(|c| c.record.is_root) {
        Some(root) => Ok(root),
        None => {
            tracing::debug!(
                "no self-signed certificate in {}; falling back to the first in source order",
                source_name
            );
            Ok(&chain.certificates[0])
        }
    }
}
