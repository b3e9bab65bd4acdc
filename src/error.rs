//! Crate-edge error channel.
//!
//! Codec failures fold into one reported kind per direction. The original
//! [`CodecError`] is kept as the error source so hosts can still tell a
//! cryptographic failure from a malformed container when diagnosing.

use crate::codec::CodecError;

/// Failure of one interception phase.
#[derive(Debug, thiserror::Error)]
pub enum InterceptError {
    /// The outbound payload could not be protected. Nothing was sent.
    #[error("failed to encrypt request")]
    RequestEncryption(#[source] CodecError),

    /// The inbound payload could not be restored. The undecrypted response
    /// is withheld from the caller.
    #[error("failed to decrypt response")]
    ResponseDecryption(#[source] CodecError),

    /// Draining a message body failed before the codec was reached.
    #[error("failed to read message body")]
    Body(#[source] axum::Error),
}
