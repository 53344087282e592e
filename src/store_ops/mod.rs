//! Certificate chain analysis and keystore synthesis
//!
//! The core pipeline: PEM decoding, certificate record construction, root
//! classification, private key parsing, PKCS#12 synthesis, and output
//! assembly. Every operation is a pure function over its inputs; nothing in
//! this module touches the network or retains state across calls.

pub mod assemble;
pub mod classify;
pub mod decoder;
pub mod key;
pub mod record;
pub mod synthesize;
pub mod templates;

pub use assemble::{assemble, encode_certificate_pem, GenerateRequest};
pub use classify::classify_root;
pub use decoder::{decode_certificates, DecodedCertificate, DecodedChain};
pub use key::{parse_private_key, KeyMaterial, KeyType};
pub use synthesize::synthesize_keystore;
