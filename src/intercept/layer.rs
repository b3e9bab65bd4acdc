//! Tower packaging of the interception pipeline.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::{Body, Bytes};
use axum::http::{Request, Response};
use hyper::body::Body as HttpBody;
use tower::{BoxError, Layer, Service};

use crate::codec::PayloadCodec;
use crate::config::EncryptionConfig;
use crate::intercept::{decrypt_response, encrypt_request};

/// Layer wrapping an HTTP client service with field-level payload
/// encryption.
///
/// One codec and one immutable config are shared across every service the
/// layer produces.
#[derive(Clone)]
pub struct FieldSealLayer {
    codec: Arc<dyn PayloadCodec>,
    config: Arc<EncryptionConfig>,
}

impl FieldSealLayer {
    pub fn new(codec: Arc<dyn PayloadCodec>, config: Arc<EncryptionConfig>) -> Self {
        Self { codec, config }
    }
}

impl<S> Layer<S> for FieldSealLayer {
    type Service = FieldSealService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FieldSealService {
            inner,
            codec: self.codec.clone(),
            config: self.config.clone(),
        }
    }
}

/// Service produced by [`FieldSealLayer`].
///
/// Encrypts the request payload, delegates the exchange to the inner
/// service, and decrypts the response payload. Inner-service errors pass
/// through unchanged behind the boxed error type.
#[derive(Clone)]
pub struct FieldSealService<S> {
    inner: S,
    codec: Arc<dyn PayloadCodec>,
    config: Arc<EncryptionConfig>,
}

impl<S> FieldSealService<S> {
    pub fn new(inner: S, codec: Arc<dyn PayloadCodec>, config: Arc<EncryptionConfig>) -> Self {
        Self {
            inner,
            codec,
            config,
        }
    }
}

impl<S, RB> Service<Request<Body>> for FieldSealService<S>
where
    S: Service<Request<Body>, Response = Response<RB>> + Clone + Send + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send,
    RB: HttpBody<Data = Bytes> + Send + 'static,
    RB::Error: Into<BoxError>,
{
    type Response = Response<Body>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Response<Body>, BoxError>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        // Swap keeps the instance that was polled ready.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let codec = self.codec.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let request = encrypt_request(request, codec.as_ref(), &config).await?;
            let response = inner.call(request).await.map_err(Into::into)?;
            let response = response.map(Body::new);
            Ok(decrypt_response(response, codec.as_ref(), &config).await?)
        })
    }
}
