//! Payload codec boundary.
//!
//! The JSON field-selection and cryptographic engine (key handling,
//! ciphertext formatting, path resolution) lives outside this crate. The
//! pipeline only ever hands it a full UTF-8 JSON document and receives a
//! full transformed document back.

use crate::config::EncryptionConfig;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Field-level encrypt/decrypt over a complete JSON document.
///
/// Implementations are stateless from the pipeline's point of view: the
/// shared [`EncryptionConfig`] carries everything a call needs, so one codec
/// instance may serve many concurrent exchanges.
pub trait PayloadCodec: Send + Sync {
    /// Encrypt the configured fields of `plaintext`, returning the whole
    /// transformed document.
    fn encrypt_payload(
        &self,
        plaintext: &str,
        config: &EncryptionConfig,
    ) -> Result<String, CodecError>;

    /// Decrypt the configured fields of `payload`, returning the whole
    /// restored document.
    fn decrypt_payload(
        &self,
        payload: &str,
        config: &EncryptionConfig,
    ) -> Result<String, CodecError>;
}

/// Failures the codec can signal across the boundary.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Key, certificate, or cryptographic failure.
    #[error("security failure: {0}")]
    Security(#[source] Cause),

    /// Malformed encrypted container, e.g. an encrypted field whose
    /// encoding cannot be parsed. Only expected on the decrypt path.
    #[error("malformed encrypted payload: {0}")]
    Format(#[source] Cause),
}
