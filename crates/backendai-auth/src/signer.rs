//! Daily key derivation and canonical request signing.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Derive the signing key for one UTC calendar day and one endpoint host:
///
/// ```text
/// daily_key = HMAC-SHA256(key = HMAC-SHA256(key = secret, msg = date), msg = host)
/// ```
///
/// `date` is the UTC date portion of the request timestamp as `YYYYMMDD`.
/// The derivation is deterministic, so recomputing it per request is
/// idempotent and no caching is required.
///
/// # Errors
///
/// Returns [`AuthError::Crypto`] if the HMAC cannot be keyed. HMAC-SHA256
/// accepts keys of any length, so this is unreachable in practice.
pub fn derive_daily_key(secret_key: &str, date: &str, host: &str) -> Result<Vec<u8>, AuthError> {
    let first = hmac_sha256(secret_key.as_bytes(), date.as_bytes())?;
    let key = hmac_sha256(&first, host.as_bytes())?;
    debug!(date, host, "derived daily signing key");
    Ok(key)
}

/// Sign a canonical request string, returning the lowercase hex signature.
///
/// Deterministic: the same (key, canonical string) pair always yields the
/// same signature, independent of call order.
///
/// # Errors
///
/// Returns [`AuthError::Crypto`] if the HMAC cannot be keyed.
pub fn sign_canonical(key: &[u8], canonical: &str) -> Result<String, AuthError> {
    let mac = hmac_sha256(key, canonical.as_bytes())?;
    Ok(hex::encode(mac))
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Vec<u8>, AuthError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| AuthError::Crypto(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
