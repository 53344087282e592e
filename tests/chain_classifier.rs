//! Integration tests for root certificate classification

use kafstore::store_ops::{classify_root, decode_certificates};
use kafstore::utils::ChainError;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).expect("fixture should exist")
}

#[test]
fn test_root_first_chain() {
    let chain = decode_certificates(&read_fixture("ca-chain.pem"));
    let root = classify_root(&chain, "CA chain").unwrap();

    assert!(root.record.is_root);
    assert!(root.record.subject.contains("Root CA"));
    assert_eq!(root.record.index, 0);
}

#[test]
fn test_self_signed_found_in_middle_position() {
    // [intermediate, root, intermediate]: the self-signed certificate must
    // win regardless of where it sits in the file
    let chain = decode_certificates(&read_fixture("chain-root-in-middle.pem"));
    assert_eq!(chain.len(), 3);

    let root = classify_root(&chain, "CA chain").unwrap();
    assert!(root.record.is_root);
    assert_eq!(root.record.index, 1);
    assert!(root.record.subject.contains("Root CA"));
}

#[test]
fn test_no_self_signed_falls_back_to_first() {
    let chain = decode_certificates(&read_fixture("chain-no-root.pem"));
    assert!(chain.certificates.iter().all(|c| !c.record.is_root));

    let root = classify_root(&chain, "CA chain").unwrap();
    assert_eq!(root.record.index, 0);
    assert!(root.record.subject.contains("Intermediate CA"));
}

#[test]
fn test_empty_chain_is_no_certificates_found() {
    let chain = decode_certificates("");
    let err = classify_root(&chain, "CA chain").unwrap_err();

    assert!(matches!(err, ChainError::NoCertificatesFound { .. }));
    assert!(err.to_string().contains("CA chain"));
}
