//! Outbound HTTP client wiring.
//!
//! Pairs the interception pipeline with a pooled hyper client so a host can
//! obtain a ready-to-use encrypting client in one call. Hosts with their own
//! client stack apply [`FieldSealLayer`](crate::intercept::FieldSealLayer)
//! to it instead.

use std::sync::Arc;

use axum::body::Body;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::codec::PayloadCodec;
use crate::config::EncryptionConfig;
use crate::intercept::FieldSealService;

/// An encrypting HTTP client over plain TCP.
///
/// The wrapped client yields [`hyper::body::Incoming`] bodies; the seal
/// service adapts them before decryption, so callers only ever see
/// [`Body`].
pub type SealedClient = FieldSealService<Client<HttpConnector, Body>>;

/// Build an HTTP client whose exchanges are transparently protected.
pub fn sealed_client(codec: Arc<dyn PayloadCodec>, config: Arc<EncryptionConfig>) -> SealedClient {
    let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
    FieldSealService::new(client, codec, config)
}
