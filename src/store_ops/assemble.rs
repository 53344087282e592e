//! Output assembly
//!
//! Orchestrates the full pipeline for one generation request: decode the CA
//! chain, classify its root, parse the private key, synthesize the PKCS#12
//! keystore, and render the trust-store script and client properties texts.

use crate::config::StoreEncryption;
use crate::models::KeystoreBundle;
use crate::store_ops::{classify, decoder, key, synthesize, templates};
use crate::utils::{ChainError, Result};

/// Inputs for one generation request.
///
/// `cert_pem` is optional: when present, it carries the leaf certificate and
/// the whole bundle becomes the intermediate chain; when absent, the bundle's
/// first certificate is the leaf and the rest are the chain.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// CA chain PEM text (root plus intermediates), used for the trust store
    pub ca_chain_pem: String,
    /// Certificate bundle PEM text (leaf plus intermediates, or intermediates
    /// only when `cert_pem` is supplied)
    pub bundle_pem: String,
    /// Optional separate leaf certificate PEM text
    pub cert_pem: Option<String>,
    /// Unencrypted private key PEM text
    pub key_pem: String,
    /// Friendly name for the keystore entry
    pub alias: String,
    /// Password protecting the keystore
    pub password: String,
    /// Optional broker address for the rendered client properties
    pub bootstrap: Option<String>,
}

/// Run the pipeline and produce the final bundle.
///
/// Fails with [`ChainError::NoRootCertificateFound`] when the CA chain text
/// decodes to zero certificates; key and keystore errors propagate unchanged.
pub fn assemble(request: &GenerateRequest, encryption: StoreEncryption) -> Result<KeystoreBundle> {
    let ca_chain = decoder::decode_certificates(&request.ca_chain_pem);

    let root = classify::classify_root(&ca_chain, "CA chain")
        .map_err(|_| ChainError::NoRootCertificateFound)?;
    tracing::info!("classified root certificate: {}", root.record.subject);

    let key_material = key::parse_private_key(&request.key_pem)?;
    tracing::debug!("parsed {} private key", key_material.key_type());

    let bundle_chain = decoder::decode_certificates(&request.bundle_pem);

    let mut warnings = ca_chain.warnings.clone();
    warnings.extend(bundle_chain.warnings.clone());

    // Leaf-first ordering for the container: either the separate leaf with
    // the whole bundle behind it, or the bundle's own head and tail
    let (leaf_pem, chain_certs) = match &request.cert_pem {
        Some(cert_pem) => {
            let leaf_chain = decoder::decode_certificates(cert_pem);
            warnings.extend(leaf_chain.warnings);
            (cert_pem.as_str(), &bundle_chain.certificates[..])
        }
        None => (
            request.bundle_pem.as_str(),
            bundle_chain.certificates.get(1..).unwrap_or(&[]),
        ),
    };

    let keystore_p12 = synthesize::synthesize_keystore(
        leaf_pem,
        &key_material,
        chain_certs,
        &request.alias,
        &request.password,
        encryption,
    )?;

    let root_cert_pem = encode_certificate_pem(&root.der);

    let truststore_script = templates::truststore_script(&request.alias, &request.password);
    let client_properties = templates::client_properties(
        &request.password,
        request.bootstrap.as_deref().unwrap_or(""),
    );

    Ok(KeystoreBundle {
        keystore_p12,
        root_cert_pem,
        ca_chain_pem: request.ca_chain_pem.clone(),
        truststore_script,
        client_properties,
        warnings,
    })
}

/// Re-encode DER certificate bytes as a PEM block
pub fn encode_certificate_pem(der: &[u8]) -> String {
    let block = ::pem::Pem::new("CERTIFICATE", der.to_vec());
    ::pem::encode(&block)
}
