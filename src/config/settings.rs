//! Application settings configuration
//!
//! Defaults for alias, passwords, and the PKCS#12 encryption scheme, loadable
//! from a TOML file. Settings are an immutable value passed down into the
//! pipeline at call time, never process-wide mutable state, so concurrent
//! requests with different overrides cannot interfere.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// PKCS#12 encryption scheme choice.
///
/// The default is the legacy SHA-1/3DES scheme because the produced keystore
/// has to be loadable by standard Java keytool consumers, including older
/// JREs that cannot open AES-encrypted containers. Override with the modern
/// scheme only when every consumer is known to support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreEncryption {
    /// PBE-SHA1-3DES with an HMAC-SHA1 MAC (keytool-compatible everywhere)
    #[default]
    LegacyTripleDes,
    /// PBES2 AES-256 with an HMAC-SHA256 MAC
    ModernAes256,
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Friendly name given to the keystore entry
    pub default_alias: String,
    /// Password applied to generated stores when none is supplied
    pub default_password: String,
    /// Placeholder bootstrap address for the rendered client properties
    pub default_bootstrap: String,
    /// PKCS#12 encryption scheme
    pub encryption: StoreEncryption,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_alias: "kafka-client".to_string(),
            default_password: "changeit".to_string(),
            default_bootstrap: "your-kafka-broker:443".to_string(),
            encryption: StoreEncryption::default(),
        }
    }
}

impl Settings {
    /// Load settings from `config/default.toml` if present, falling back to
    /// built-in defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}
