//! Field-level payload encryption for HTTP clients.
//!
//! Wraps an ordinary HTTP exchange so that sensitive JSON fields in request
//! payloads are encrypted before transmission and encrypted fields in
//! response payloads are decrypted before the caller sees them. The actual
//! field-selection and cryptographic engine is an external capability
//! consumed through the [`codec::PayloadCodec`] trait; this crate owns the
//! interception pipeline around it.
//!
//! # Data Flow
//! ```text
//! caller request
//!     → intercept/request.rs (eligibility, drain body, encrypt, fix framing)
//!     → transport (`proceed` closure or wrapped tower service)
//!     → intercept/response.rs (eligibility, drain body, decrypt, fix framing)
//!     → caller response
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod intercept;
pub mod observability;

pub use client::{sealed_client, SealedClient};
pub use codec::{CodecError, PayloadCodec};
pub use config::EncryptionConfig;
pub use error::InterceptError;
pub use intercept::{decrypt_response, encrypt_request, intercept, FieldSealLayer, FieldSealService};
