//! Interception pipeline.
//!
//! # Data Flow
//! ```text
//! caller request
//!     → request.rs (eligibility check, drain body, encrypt, fix framing)
//!     → transport (`proceed` closure or wrapped tower service)
//!     → response.rs (eligibility check, drain body, decrypt, fix framing)
//!     → caller response
//! ```
//!
//! # Design Decisions
//! - A body is drained exactly once; replacement messages are rebuilt from
//!   parts, never patched in place
//! - Codec failures fold into one reported kind per direction, keeping the
//!   original cause as the error source
//! - No retry and no plaintext fallback on cryptographic failure
//! - No state is held across exchanges; one shared read-only config serves
//!   concurrent calls

mod body;
pub mod layer;
pub mod request;
pub mod response;

pub use layer::{FieldSealLayer, FieldSealService};
pub use request::encrypt_request;
pub use response::decrypt_response;

use std::future::Future;

use axum::body::{Body, Bytes};
use axum::http::{Request, Response};
use hyper::body::Body as HttpBody;
use tower::BoxError;

use crate::codec::PayloadCodec;
use crate::config::EncryptionConfig;

/// Run one fully protected exchange.
///
/// The request payload is encrypted, the transformed request is handed to
/// `proceed` for the actual network exchange, and the returned response
/// payload is decrypted. If encryption fails, `proceed` is never invoked,
/// so nothing leaves the process for a request whose payload could not be
/// protected. Transport failures propagate unchanged.
pub async fn intercept<C, F, Fut, RB, E>(
    request: Request<Body>,
    proceed: F,
    codec: &C,
    config: &EncryptionConfig,
) -> Result<Response<Body>, BoxError>
where
    C: PayloadCodec + ?Sized,
    F: FnOnce(Request<Body>) -> Fut,
    Fut: Future<Output = Result<Response<RB>, E>>,
    RB: HttpBody<Data = Bytes> + Send + 'static,
    RB::Error: Into<BoxError>,
    E: Into<BoxError>,
{
    let request = encrypt_request(request, codec, config).await?;
    let response = proceed(request).await.map_err(Into::into)?;
    let response = response.map(Body::new);
    Ok(decrypt_response(response, codec, config).await?)
}
