//! Canonical request construction and HMAC-SHA256 signing for the
//! Backend.AI manager API.
//!
//! Every signed request binds method, path, timestamp, host, content type,
//! protocol version, and a body digest into a canonical string, which is
//! then signed with a key derived from the secret key for one UTC calendar
//! day and one endpoint host:
//!
//! ```text
//! daily_key = HMAC(HMAC(secret, "YYYYMMDD"), host)
//! signature = hex(HMAC(daily_key, canonical_request))
//! ```
//!
//! The two-stage derivation limits the blast radius of a leaked derived key
//! to one endpoint for one day.

mod canonical;
mod error;
mod signer;

pub use canonical::{build_canonical_request, hash_body_bytes};
pub use error::AuthError;
pub use signer::{derive_daily_key, sign_canonical};
