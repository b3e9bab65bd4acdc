//! Inbound response transformation.
//!
//! # Responsibilities
//! - Decide whether the response carries a payload at all
//! - Drain the single-use body to text
//! - Hand the payload to the codec's decrypt operation
//! - Rebuild the response with corrected framing metadata

use axum::body::Body;
use axum::http::Response;
use tracing::{debug, warn};

use crate::codec::PayloadCodec;
use crate::config::EncryptionConfig;
use crate::error::InterceptError;
use crate::intercept::body;
use crate::observability::metrics;

/// Decrypt the configured fields of an incoming response payload.
///
/// Responses without a payload pass through untouched. Decryption is
/// all-or-nothing for the message: on codec failure, security or
/// data-format alike, the undecrypted response is withheld and the single
/// response-decryption failure kind is raised with the cause attached.
pub async fn decrypt_response<C>(
    response: Response<Body>,
    codec: &C,
    config: &EncryptionConfig,
) -> Result<Response<Body>, InterceptError>
where
    C: PayloadCodec + ?Sized,
{
    if !body::has_payload(response.headers(), response.body()) {
        debug!(status = %response.status(), "No response payload to decrypt");
        metrics::record_passthrough("response");
        return Ok(response);
    }

    let (mut parts, raw) = response.into_parts();
    let ciphertext_bytes = body::drain(raw, config.max_body_size).await?;
    let ciphertext = String::from_utf8_lossy(&ciphertext_bytes);

    let plaintext = codec.decrypt_payload(&ciphertext, config).map_err(|e| {
        warn!(status = %parts.status, error = %e, "Response payload decryption failed");
        metrics::record_failure("response");
        InterceptError::ResponseDecryption(e)
    })?;

    debug!(
        ciphertext_bytes = ciphertext_bytes.len(),
        plaintext_bytes = plaintext.len(),
        "Decrypted response payload"
    );
    metrics::record_transform("response");

    body::set_content_length(&mut parts.headers, plaintext.len());
    Ok(Response::from_parts(parts, Body::from(plaintext)))
}
