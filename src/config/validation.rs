//! Semantic configuration checks.

use crate::config::schema::EncryptionConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("path mapping for {0:?} has an empty source or destination")]
    EmptyPath(String),

    #[error("ciphertext field name `{0}` is empty")]
    EmptyFieldName(&'static str),

    #[error("max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate constraints the schema cannot express.
pub fn validate_config(config: &EncryptionConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mappings = config
        .encryption_paths
        .iter()
        .chain(config.decryption_paths.iter());
    for (source, destination) in mappings {
        if source.trim().is_empty() || destination.trim().is_empty() {
            errors.push(ValidationError::EmptyPath(source.clone()));
        }
    }

    let names = &config.field_names;
    if names.encrypted_value.is_empty() {
        errors.push(ValidationError::EmptyFieldName("encrypted_value"));
    }
    if names.iv.is_empty() {
        errors.push(ValidationError::EmptyFieldName("iv"));
    }
    if names.encrypted_key.is_empty() {
        errors.push(ValidationError::EmptyFieldName("encrypted_key"));
    }

    if config.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
