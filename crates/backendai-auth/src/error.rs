//! Signing error types.

/// Failures while producing a request signature.
///
/// These are fatal and should not occur in normal operation; they are
/// never classified as call errors or retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A cryptographic primitive rejected its input.
    #[error("cryptographic operation failed: {0}")]
    Crypto(String),

    /// Serializing a request component for signing or transport failed.
    #[error("request encoding failed: {0}")]
    Encoding(String),
}
