//! Generated output bundle

/// Everything produced by one generation request.
///
/// All fields are immutable value data: the bundle is handed once to the
/// packaging layer (zip, download, file writes) and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct KeystoreBundle {
    /// Password-protected PKCS#12 container holding the leaf certificate,
    /// private key, and intermediate chain
    pub keystore_p12: Vec<u8>,
    /// The classified root certificate, re-encoded as PEM, for building a
    /// trust store
    pub root_cert_pem: String,
    /// The full CA chain text as supplied, passed through unmodified
    pub ca_chain_pem: String,
    /// Shell script that imports the root PEM into a JKS trust store
    pub truststore_script: String,
    /// Kafka client SSL properties referencing the generated stores
    pub client_properties: String,
    /// Malformed PEM blocks skipped while decoding the CA chain
    pub warnings: Vec<String>,
}
