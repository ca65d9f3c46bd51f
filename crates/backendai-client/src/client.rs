//! The client facade consumed by domain resource wrappers.

use std::sync::Arc;

use backendai_core::{BodyKind, CallError, ClientConfig, ConfigError, ConnectionMode, DecodedResponse};
use http::Method;
use tracing::debug;

use crate::assemble::{assemble_public, assemble_signed};
use crate::error::ClientError;
use crate::execute::execute;

/// A Backend.AI manager client.
///
/// One underlying HTTP connection pool per client. Calls are independent
/// non-blocking operations and may be issued concurrently; the only shared
/// mutable state is the negotiated protocol version, whose update is
/// race-safe (last write wins). The client performs no retries or backoff;
/// callers decide what to do with a classified error.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
}

impl Client {
    /// Create a client from an explicit configuration.
    ///
    /// In SESSION mode the transport keeps a cookie store, since the web
    /// front-end authenticates requests by session cookie rather than
    /// signature.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP transport cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if config.connection_mode() == ConnectionMode::Session {
            builder = builder.cookie_store(true);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Create a client from `BACKENDAI_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the key variables are unset or empty.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform an authenticated call and decode the response.
    ///
    /// # Errors
    ///
    /// Returns the phase-classified [`CallError`] (wrapped in
    /// [`ClientError::Call`]) on failure; signing and encoding failures
    /// surface as their own fatal variants.
    pub async fn perform_signed(
        &self,
        method: Method,
        path: &str,
        body: BodyKind,
    ) -> Result<DecodedResponse, ClientError> {
        let request = assemble_signed(&self.config, method, path, body)?;
        execute(&self.http, request).await.map_err(ClientError::from)
    }

    /// Perform an unsigned call against a public endpoint.
    ///
    /// # Errors
    ///
    /// Same classification as [`Client::perform_signed`].
    pub async fn perform_public(
        &self,
        method: Method,
        path: &str,
        body: BodyKind,
    ) -> Result<DecodedResponse, ClientError> {
        let request = assemble_public(&self.config, method, path, body)?;
        execute(&self.http, request).await.map_err(ClientError::from)
    }

    /// Record the protocol version reported by the server for use in
    /// subsequent canonical requests. Idempotent; safe to race.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] for an unparseable string.
    pub fn adopt_server_version(&self, version: &str) -> Result<(), ConfigError> {
        self.config.adopt_server_version(version)
    }

    /// Probe the server for its API version and adopt it.
    ///
    /// Issues an unsigned `GET /` and copies the reported `version` field
    /// into the configuration. Returns the adopted version string.
    ///
    /// # Errors
    ///
    /// Returns the classified call error from the probe, or a
    /// response-phase error when the probe body carries no version field.
    pub async fn negotiate_server_version(&self) -> Result<String, ClientError> {
        let decoded = self.perform_public(Method::GET, "/", BodyKind::Empty).await?;
        let version = decoded
            .as_json()
            .and_then(|value| value.get("version"))
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                CallError::response("version probe returned no version field")
            })?
            .to_owned();
        debug!(version = %version, "negotiated server API version");
        self.config.adopt_server_version(&version)?;
        Ok(version)
    }
}
