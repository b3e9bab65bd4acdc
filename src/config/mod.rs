//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → EncryptionConfig (validated, immutable)
//!     → shared via Arc to every transform
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the pipeline never mutates it
//! - All fields have defaults so a minimal config only names its paths
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{CiphertextFieldNames, EncryptionConfig};
pub use validation::{validate_config, ValidationError};
