//! Outbound request transformation.
//!
//! # Responsibilities
//! - Decide whether the request carries a payload at all
//! - Drain the single-use body to text
//! - Hand the payload to the codec's encrypt operation
//! - Rebuild the request with corrected framing metadata

use axum::body::Body;
use axum::http::Request;
use tracing::{debug, warn};

use crate::codec::PayloadCodec;
use crate::config::EncryptionConfig;
use crate::error::InterceptError;
use crate::intercept::body;
use crate::observability::metrics;

/// Encrypt the configured fields of an outgoing request payload.
///
/// Requests without a payload pass through untouched. On success the
/// returned request is identical to the original except for its body and a
/// `Content-Length` recomputed from the ciphertext's byte length. On codec
/// failure the whole operation fails; there is no plaintext fallback.
pub async fn encrypt_request<C>(
    request: Request<Body>,
    codec: &C,
    config: &EncryptionConfig,
) -> Result<Request<Body>, InterceptError>
where
    C: PayloadCodec + ?Sized,
{
    if !body::has_payload(request.headers(), request.body()) {
        debug!(method = %request.method(), uri = %request.uri(), "No request payload to encrypt");
        metrics::record_passthrough("request");
        return Ok(request);
    }

    let (mut parts, raw) = request.into_parts();
    let plaintext_bytes = body::drain(raw, config.max_body_size).await?;
    let plaintext = String::from_utf8_lossy(&plaintext_bytes);

    let ciphertext = codec.encrypt_payload(&plaintext, config).map_err(|e| {
        warn!(method = %parts.method, uri = %parts.uri, error = %e, "Request payload encryption failed");
        metrics::record_failure("request");
        InterceptError::RequestEncryption(e)
    })?;

    debug!(
        plaintext_bytes = plaintext_bytes.len(),
        ciphertext_bytes = ciphertext.len(),
        "Encrypted request payload"
    );
    metrics::record_transform("request");

    body::set_content_length(&mut parts.headers, ciphertext.len());
    Ok(Request::from_parts(parts, Body::from(ciphertext)))
}
