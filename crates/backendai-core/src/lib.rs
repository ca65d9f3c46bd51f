//! Credentials, configuration, and shared types for the Backend.AI client.
//!
//! This crate provides the foundational building blocks shared by the
//! signing and transport layers: the credential store ([`ClientConfig`]),
//! the closed body/content/response type unions, and the error taxonomy
//! ([`ConfigError`], [`CallError`]).

mod config;
mod error;
mod types;

pub use config::{ApiVersion, ClientConfig, DEFAULT_API_VERSION, DEFAULT_ENDPOINT};
pub use error::{CallError, ConfigError, Phase};
pub use types::{BodyKind, ConnectionMode, ContentKind, DecodedResponse, MultipartField};
