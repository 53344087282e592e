//! PKCS#12 keystore synthesis
//!
//! Packages a leaf certificate, its private key, and the accompanying
//! intermediate certificates into a password-protected PKCS#12 container
//! using p12-keystore, tagged with a friendly alias so Java tooling can
//! reference the entry later.

use crate::config::StoreEncryption;
use crate::store_ops::decoder::{self, DecodedCertificate};
use crate::store_ops::key::KeyMaterial;
use crate::utils::{KeystoreError, Result};
use p12_keystore::{
    Certificate, EncryptionAlgorithm, KeyStore, KeyStoreEntry, MacAlgorithm, PrivateKey,
    PrivateKeyChain,
};
use sha2::{Digest, Sha256};

/// Build a password-protected PKCS#12 keystore.
///
/// `leaf_pem` is expected to contain exactly one certificate; if more are
/// present the first is used and the rest are ignored. The container's
/// certificate list is `[leaf, ...chain]` with the chain order preserved as
/// supplied. Fails with [`KeystoreError::NoCertificateFound`] when the leaf
/// text decodes to zero certificates.
pub fn synthesize_keystore(
    leaf_pem: &str,
    key: &KeyMaterial,
    chain: &[DecodedCertificate],
    alias: &str,
    password: &str,
    encryption: StoreEncryption,
) -> Result<Vec<u8>> {
    let leaf_chain = decoder::decode_certificates(leaf_pem);

    let leaf = leaf_chain
        .certificates
        .first()
        .ok_or(KeystoreError::NoCertificateFound)?;

    if leaf_chain.len() > 1 {
        tracing::debug!(
            "leaf PEM contained {} certificates; using the first ({})",
            leaf_chain.len(),
            leaf.record.subject
        );
    }

    let mut certs = Vec::with_capacity(1 + chain.len());
    certs.push(parse_p12_certificate(&leaf.der)?);
    for cert in chain {
        certs.push(parse_p12_certificate(&cert.der)?);
    }

    // The local key id ties the key to its certificate inside the container;
    // SHA-256 of the leaf DER is unique enough and stable across runs
    let local_key_id = Sha256::digest(&leaf.der).to_vec();

    let private_key = PrivateKey::from_der(key.pkcs8_der()).map_err(|e| KeystoreError::Pkcs12 {
        message: format!("failed to load private key into PKCS#12 builder: {}", e),
    })?;

    let private_key_chain = PrivateKeyChain::new(local_key_id, private_key, certs);

    let mut keystore = KeyStore::new();
    keystore.add_entry(alias, KeyStoreEntry::PrivateKeyChain(private_key_chain));

    let (encryption_algorithm, mac_algorithm) = algorithms_for(encryption);

    let data = keystore
        .writer(password)
        .encryption_algorithm(encryption_algorithm)
        .mac_algorithm(mac_algorithm)
        .write()
        .map_err(|e| KeystoreError::Pkcs12 {
            message: e.to_string(),
        })?;

    Ok(data)
}

fn parse_p12_certificate(der: &[u8]) -> Result<Certificate> {
    Certificate::from_der(der).map_err(|e| {
        KeystoreError::Pkcs12 {
            message: format!("failed to load certificate into PKCS#12 builder: {}", e),
        }
        .into()
    })
}

fn algorithms_for(encryption: StoreEncryption) -> (EncryptionAlgorithm, MacAlgorithm) {
    match encryption {
        StoreEncryption::LegacyTripleDes => (
            EncryptionAlgorithm::PbeWithShaAnd3KeyTripleDesCbc,
            MacAlgorithm::HmacSha1,
        ),
        StoreEncryption::ModernAes256 => (
            EncryptionAlgorithm::PbeWithHmacSha256AndAes256,
            MacAlgorithm::HmacSha256,
        ),
    }
}
