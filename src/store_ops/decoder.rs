//! PEM certificate extraction
//!
//! Scans free-form text for CERTIFICATE blocks and decodes each one into a
//! structured record. A malformed block is skipped with a recorded warning
//! rather than aborting the scan, so one corrupt certificate cannot hide its
//! well-formed siblings.

use crate::models::CertificateRecord;
use crate::store_ops::record;
use crate::utils::PemError;

const BEGIN_MARKER: &str = "-----BEGIN CERTIFICATE-----";
const END_MARKER: &str = "-----END CERTIFICATE-----";

/// One decoded certificate: the structured record plus the DER bytes it was
/// built from (needed later for PKCS#12 packing and PEM re-encoding)
#[derive(Debug, Clone)]
pub struct DecodedCertificate {
    pub record: CertificateRecord,
    pub der: Vec<u8>,
}

/// The ordered result of decoding one PEM text blob
#[derive(Debug, Clone, Default)]
pub struct DecodedChain {
    /// Certificates in source order
    pub certificates: Vec<DecodedCertificate>,
    /// Human-readable descriptions of blocks that were skipped
    pub warnings: Vec<String>,
}

impl DecodedChain {
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// The structured records, for display or JSON output
    pub fn records(&self) -> Vec<CertificateRecord> {
        self.certificates.iter().map(|c| c.record.clone()).collect()
    }
}

/// Extract every certificate block from free-form PEM text.
///
/// The scan is greedy and non-overlapping: each `BEGIN CERTIFICATE` marker is
/// paired with the next `END CERTIFICATE` marker after it. Zero valid
/// certificates yields an empty chain, not an error; callers decide whether
/// that is fatal.
pub fn decode_certificates(text: &str) -> DecodedChain {
    let mut chain = DecodedChain::default();

    for (index, block) in scan_blocks(text).into_iter().enumerate() {
        match decode_block(&block, index) {
            Ok(decoded) => chain.certificates.push(decoded),
            Err(e) => {
                tracing::warn!("skipping certificate block {}: {}", index, e);
                chain.warnings.push(e.to_string());
            }
        }
    }

    chain
}

/// Find every `BEGIN`..`END` delimited substring, markers included
fn scan_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(BEGIN_MARKER) {
        let after_begin = &rest[start..];
        match after_begin.find(END_MARKER) {
            Some(end) => {
                let block_end = end + END_MARKER.len();
                blocks.push(after_begin[..block_end].to_string());
                rest = &after_begin[block_end..];
            }
            None => break, // unterminated block, nothing more to extract
        }
    }

    blocks
}

/// Decode one extracted block into a certificate
fn decode_block(block: &str, index: usize) -> Result<DecodedCertificate, PemError> {
    let parsed = ::pem::parse(block.as_bytes()).map_err(|e| PemError::MalformedBlock {
        index,
        message: e.to_string(),
    })?;

    let der = parsed.into_contents();
    let record = record::build_record(&der, index)?;

    Ok(DecodedCertificate { record, der })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_extracts_multiple_blocks() {
        let text = "junk\n-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n\
                    more junk\n-----BEGIN CERTIFICATE-----\nBBBB\n-----END CERTIFICATE-----\n";
        let blocks = scan_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("AAAA"));
        assert!(blocks[1].contains("BBBB"));
    }

    #[test]
    fn test_scan_ignores_unterminated_block() {
        let text = "-----BEGIN CERTIFICATE-----\nAAAA\n";
        assert!(scan_blocks(text).is_empty());
    }

    #[test]
    fn test_decode_empty_input_is_empty_chain() {
        let chain = decode_certificates("no pem here");
        assert!(chain.is_empty());
        assert!(chain.warnings.is_empty());
    }

    #[test]
    fn test_malformed_block_is_skipped_with_warning() {
        let text = "-----BEGIN CERTIFICATE-----\n!!not base64!!\n-----END CERTIFICATE-----\n";
        let chain = decode_certificates(text);
        assert!(chain.is_empty());
        assert_eq!(chain.warnings.len(), 1);
    }
}
