//! Message body access and framing reconstruction.
//!
//! A body is a single-use resource: it is drained to an owned buffer exactly
//! once, and the replacement message is rebuilt with a fresh body and a
//! `Content-Length` recomputed from the replacement's byte length.

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, HeaderValue};
use hyper::body::Body as HttpBody;

use crate::error::InterceptError;

/// Declared length of a message body, if the message declares one.
///
/// Prefers the `Content-Length` header; falls back to the body's exact size
/// hint for bodies built from owned buffers.
pub(crate) fn declared_length(headers: &HeaderMap, body: &Body) -> Option<u64> {
    if let Some(value) = headers.get(header::CONTENT_LENGTH) {
        if let Some(length) = value.to_str().ok().and_then(|v| v.parse::<u64>().ok()) {
            return Some(length);
        }
    }
    body.size_hint().exact()
}

/// Whether a message carries a payload worth transforming.
///
/// Absent and declared-zero-length bodies pass through untouched. A body of
/// unknown length counts as a payload and is drained to find out.
pub(crate) fn has_payload(headers: &HeaderMap, body: &Body) -> bool {
    declared_length(headers, body) != Some(0)
}

/// Drain a body to an owned buffer, bounded by `limit` bytes.
pub(crate) async fn drain(body: Body, limit: usize) -> Result<Bytes, InterceptError> {
    to_bytes(body, limit).await.map_err(InterceptError::Body)
}

/// Overwrite the framing header to match the replacement body's byte length.
pub(crate) fn set_content_length(headers: &mut HeaderMap, length: usize) {
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
}
