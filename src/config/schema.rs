//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration shared by every transform performed through one
/// interceptor instance.
///
/// The value is treated as immutable after construction: many concurrent
/// exchanges read it through a shared reference with no synchronization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EncryptionConfig {
    /// JSON paths whose values are encrypted on the request path, mapped to
    /// the path the ciphertext container is written to.
    pub encryption_paths: HashMap<String, String>,

    /// JSON paths holding ciphertext containers on the response path,
    /// mapped to the path the restored value is written to.
    pub decryption_paths: HashMap<String, String>,

    /// Path to the PEM certificate the engine wraps per-payload keys with.
    pub encryption_certificate_path: Option<String>,

    /// Path to the PEM private key the engine unwraps per-payload keys with.
    pub decryption_key_path: Option<String>,

    /// Field names of the ciphertext container written into the document.
    pub field_names: CiphertextFieldNames,

    /// Maximum body size buffered for transformation, in bytes.
    pub max_body_size: usize,
}

impl Default for EncryptionConfig {
    fn default() -> Self {
        Self {
            encryption_paths: HashMap::new(),
            decryption_paths: HashMap::new(),
            encryption_certificate_path: None,
            decryption_key_path: None,
            field_names: CiphertextFieldNames::default(),
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Names of the fields making up an encrypted-value container.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CiphertextFieldNames {
    /// Field holding the encrypted value itself.
    pub encrypted_value: String,

    /// Field holding the initialization vector.
    pub iv: String,

    /// Field holding the wrapped per-payload key.
    pub encrypted_key: String,
}

impl Default for CiphertextFieldNames {
    fn default() -> Self {
        Self {
            encrypted_value: "encryptedValue".to_string(),
            iv: "iv".to_string(),
            encrypted_key: "encryptedKey".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wire_container() {
        let config = EncryptionConfig::default();
        assert_eq!(config.field_names.encrypted_value, "encryptedValue");
        assert_eq!(config.field_names.iv, "iv");
        assert_eq!(config.field_names.encrypted_key, "encryptedKey");
        assert_eq!(config.max_body_size, 2 * 1024 * 1024);
        assert!(config.encryption_paths.is_empty());
    }

    #[test]
    fn minimal_toml_deserializes() {
        let config: EncryptionConfig = toml::from_str(
            r#"
            [encryption_paths]
            "data" = "data"
            "#,
        )
        .unwrap();
        assert_eq!(config.encryption_paths["data"], "data");
        assert!(config.decryption_paths.is_empty());
        assert_eq!(config.field_names.iv, "iv");
    }
}
