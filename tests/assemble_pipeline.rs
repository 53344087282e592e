//! Integration tests for the full assembly pipeline

use kafstore::config::StoreEncryption;
use kafstore::store_ops::{assemble, decode_certificates, GenerateRequest};
use kafstore::utils::{ChainError, KafstoreError, KeyError};
use p12_keystore::{KeyStore, Pkcs12ImportPolicy};
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).expect("fixture should exist")
}

fn three_file_request() -> GenerateRequest {
    GenerateRequest {
        ca_chain_pem: read_fixture("ca-chain.pem"),
        bundle_pem: read_fixture("bundle.pem"),
        cert_pem: None,
        key_pem: read_fixture("leaf-key-pkcs8.pem"),
        alias: "kafka-client".to_string(),
        password: "changeit".to_string(),
        bootstrap: Some("broker.example.com:9093".to_string()),
    }
}

#[test]
fn test_three_file_flow_produces_complete_bundle() {
    let bundle = assemble(&three_file_request(), StoreEncryption::LegacyTripleDes).unwrap();

    assert!(!bundle.keystore_p12.is_empty());
    assert!(bundle.warnings.is_empty());

    // The extracted root must be the self-signed certificate of the chain
    let root = decode_certificates(&bundle.root_cert_pem);
    assert_eq!(root.len(), 1);
    assert!(root.certificates[0].record.is_root);
    assert!(root.certificates[0].record.subject.contains("Root CA"));

    // The chain text passes through untouched
    assert_eq!(bundle.ca_chain_pem, read_fixture("ca-chain.pem"));

    // Rendered templates carry the supplied values
    assert!(bundle.truststore_script.contains("-alias kafka-client-ca"));
    assert!(bundle.truststore_script.contains("-storepass changeit"));
    assert!(bundle
        .client_properties
        .contains("bootstrap.servers=broker.example.com:9093"));
    assert!(bundle
        .client_properties
        .contains("ssl.keystore.password=changeit"));
}

#[test]
fn test_keystore_contains_leaf_and_intermediate() {
    let bundle = assemble(&three_file_request(), StoreEncryption::LegacyTripleDes).unwrap();

    let keystore = KeyStore::from_pkcs12(&bundle.keystore_p12, "changeit", Pkcs12ImportPolicy::Strict)
        .unwrap();
    let (alias, entry) = keystore.entries().next().unwrap();
    assert_eq!(alias.as_str(), "kafka-client");

    if let p12_keystore::KeyStoreEntry::PrivateKeyChain(chain) = entry {
        // bundle.pem = leaf + intermediate
        assert_eq!(chain.certs().len(), 2);
    } else {
        panic!("expected a private key chain entry");
    }
}

#[test]
fn test_four_file_flow_uses_separate_leaf() {
    let mut request = three_file_request();
    request.cert_pem = Some(read_fixture("leaf-cert.pem"));
    request.bundle_pem = read_fixture("intermediate-ca.pem");

    let bundle = assemble(&request, StoreEncryption::LegacyTripleDes).unwrap();

    let keystore = KeyStore::from_pkcs12(&bundle.keystore_p12, "changeit", Pkcs12ImportPolicy::Strict)
        .unwrap();
    let (_, entry) = keystore.entries().next().unwrap();
    if let p12_keystore::KeyStoreEntry::PrivateKeyChain(chain) = entry {
        assert_eq!(chain.certs().len(), 2);
    } else {
        panic!("expected a private key chain entry");
    }
}

#[test]
fn test_empty_ca_chain_is_no_root_certificate_found() {
    let mut request = three_file_request();
    request.ca_chain_pem = "nothing resembling PEM".to_string();

    let err = assemble(&request, StoreEncryption::LegacyTripleDes).unwrap_err();
    assert!(matches!(
        err,
        KafstoreError::Chain(ChainError::NoRootCertificateFound)
    ));
}

#[test]
fn test_encrypted_key_error_propagates_unchanged() {
    let mut request = three_file_request();
    request.key_pem = read_fixture("encrypted-key.pem");

    let err = assemble(&request, StoreEncryption::LegacyTripleDes).unwrap_err();
    assert!(matches!(
        err,
        KafstoreError::Key(KeyError::EncryptedKeyUnsupported)
    ));
}

#[test]
fn test_corrupt_chain_block_surfaces_as_warning() {
    let mut request = three_file_request();
    request.ca_chain_pem = read_fixture("chain-with-corrupt-block.pem");

    let bundle = assemble(&request, StoreEncryption::LegacyTripleDes).unwrap();
    assert_eq!(bundle.warnings.len(), 1);
}

#[test]
fn test_corrupt_block_in_separate_leaf_surfaces_as_warning() {
    let mut request = three_file_request();
    let mut cert_pem = read_fixture("leaf-cert.pem");
    cert_pem.push_str("-----BEGIN CERTIFICATE-----\n!!corrupt!!\n-----END CERTIFICATE-----\n");
    request.cert_pem = Some(cert_pem);
    request.bundle_pem = read_fixture("intermediate-ca.pem");

    let bundle = assemble(&request, StoreEncryption::LegacyTripleDes).unwrap();
    assert_eq!(bundle.warnings.len(), 1);
}

#[test]
fn test_pipeline_is_deterministic_per_request() {
    // Two runs over identical inputs classify the same root and render the
    // same texts (the PKCS#12 bytes differ by random salts)
    let a = assemble(&three_file_request(), StoreEncryption::LegacyTripleDes).unwrap();
    let b = assemble(&three_file_request(), StoreEncryption::LegacyTripleDes).unwrap();

    assert_eq!(a.root_cert_pem, b.root_cert_pem);
    assert_eq!(a.truststore_script, b.truststore_script);
    assert_eq!(a.client_properties, b.client_properties);
}
