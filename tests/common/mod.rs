//! Shared test doubles: a deterministic field codec and canned messages.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use fieldseal::{CodecError, EncryptionConfig, PayloadCodec};
use serde_json::Value;

const FIXED_IV: &[u8] = b"0123456789abcdef";
const FIXED_KEY: &[u8] = b"wrapped-key-material";

/// Deterministic stand-in for the external field-level engine.
///
/// "Encrypts" by base64-wrapping the selected field into the ciphertext
/// container shape the real engine produces, so round-trip and framing
/// behavior can be asserted without real key material.
pub struct StubCodec;

impl PayloadCodec for StubCodec {
    fn encrypt_payload(
        &self,
        plaintext: &str,
        config: &EncryptionConfig,
    ) -> Result<String, CodecError> {
        let mut doc: Value =
            serde_json::from_str(plaintext).map_err(|e| CodecError::Format(Box::new(e)))?;

        for source in config.encryption_paths.keys() {
            let Some(object) = doc.as_object_mut() else {
                continue;
            };
            let Some(value) = object.remove(source) else {
                continue;
            };

            let names = &config.field_names;
            let mut container = serde_json::Map::new();
            container.insert(
                names.encrypted_value.clone(),
                Value::String(STANDARD.encode(value.to_string())),
            );
            container.insert(names.iv.clone(), Value::String(STANDARD.encode(FIXED_IV)));
            container.insert(
                names.encrypted_key.clone(),
                Value::String(STANDARD.encode(FIXED_KEY)),
            );
            object.insert(source.clone(), Value::Object(container));
        }

        Ok(doc.to_string())
    }

    fn decrypt_payload(
        &self,
        payload: &str,
        config: &EncryptionConfig,
    ) -> Result<String, CodecError> {
        let mut doc: Value =
            serde_json::from_str(payload).map_err(|e| CodecError::Format(Box::new(e)))?;

        for source in config.decryption_paths.keys() {
            let Some(object) = doc.as_object_mut() else {
                continue;
            };
            let Some(container) = object.remove(source) else {
                continue;
            };

            let encoded = container
                .get(&config.field_names.encrypted_value)
                .and_then(Value::as_str)
                .ok_or_else(|| CodecError::Format("missing encrypted value field".into()))?;
            let raw = STANDARD
                .decode(encoded)
                .map_err(|e| CodecError::Format(Box::new(e)))?;
            let text = String::from_utf8(raw).map_err(|e| CodecError::Format(Box::new(e)))?;
            let value: Value =
                serde_json::from_str(&text).map_err(|e| CodecError::Format(Box::new(e)))?;

            object.insert(source.clone(), value);
        }

        Ok(doc.to_string())
    }
}

/// Codec that refuses every operation with the chosen failure kind.
pub enum FailingCodec {
    Security,
    Format,
}

impl FailingCodec {
    fn error(&self) -> CodecError {
        match self {
            FailingCodec::Security => CodecError::Security("certificate rejected".into()),
            FailingCodec::Format => CodecError::Format("truncated ciphertext container".into()),
        }
    }
}

impl PayloadCodec for FailingCodec {
    fn encrypt_payload(&self, _: &str, _: &EncryptionConfig) -> Result<String, CodecError> {
        Err(self.error())
    }

    fn decrypt_payload(&self, _: &str, _: &EncryptionConfig) -> Result<String, CodecError> {
        Err(self.error())
    }
}

/// Config encrypting and decrypting the `data` field, as the concrete
/// tokenization scenario prescribes.
pub fn test_config() -> EncryptionConfig {
    let mut config = EncryptionConfig::default();
    config
        .encryption_paths
        .insert("data".to_string(), "data".to_string());
    config
        .decryption_paths
        .insert("data".to_string(), "data".to_string());
    config
}

/// A POST request carrying the given JSON body with accurate framing.
pub fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("http://localhost/tokenize")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A 200 response carrying the given JSON body with accurate framing.
pub fn json_response(body: &str) -> Response<Body> {
    Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body.to_string()))
        .unwrap()
}
