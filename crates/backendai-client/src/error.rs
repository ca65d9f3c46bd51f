//! Client-level error union.

use backendai_auth::AuthError;
use backendai_core::{CallError, ConfigError};

/// Any failure the client facade can surface.
///
/// [`ClientError::Call`] is the only variant expected during normal
/// operation; the others are fatal construction or signing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Invalid or incomplete configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Signing or request encoding failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A phase-classified call failure.
    #[error(transparent)]
    Call(#[from] CallError),

    /// The HTTP transport could not be constructed.
    #[error("HTTP transport initialization failed: {0}")]
    Transport(String),
}

impl ClientError {
    /// The classified call failure, if this error came from a call.
    #[must_use]
    pub fn as_call(&self) -> Option<&CallError> {
        match self {
            Self::Call(err) => Some(err),
            _ => None,
        }
    }
}
