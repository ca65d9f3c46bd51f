//! Canonical request construction for the Backend.AI signing scheme.
//!
//! The canonical request is the exact byte sequence that gets signed:
//!
//! ```text
//! HTTPMethod\n
//! Path\n
//! ISO8601Timestamp\n
//! host:EndpointHost\n
//! content-type:ContentType\n
//! x-backendai-version:ApiVersion\n
//! HexBodyDigest
//! ```
//!
//! Field order and separators are fixed; changing any single input changes
//! the resulting string and therefore the signature.

use sha2::{Digest, Sha256};

/// Build the canonical request string from its seven components.
///
/// Pure function: identical inputs always yield a byte-identical string.
///
/// The body hash is computed by the caller over either the serialized body
/// bytes, or the empty string when the body is empty or multipart.
/// Multipart serialization is boundary-dependent and therefore
/// non-deterministic, so the content-type label, not the payload, anchors
/// multipart requests into the signature.
///
/// # Examples
///
/// ```
/// use backendai_auth::{build_canonical_request, hash_body_bytes};
///
/// let canonical = build_canonical_request(
///     "GET",
///     "/kernel/abc123",
///     "2019-01-01T00:00:00.000Z",
///     "api.example.com",
///     "application/json",
///     "v6.20220615",
///     &hash_body_bytes(b""),
/// );
/// assert!(canonical.starts_with("GET\n/kernel/abc123\n"));
/// ```
#[must_use]
pub fn build_canonical_request(
    method: &str,
    path: &str,
    timestamp: &str,
    host: &str,
    content_type: &str,
    api_version: &str,
    body_hash: &str,
) -> String {
    format!(
        "{method}\n{path}\n{timestamp}\nhost:{host}\ncontent-type:{content_type}\nx-backendai-version:{api_version}\n{body_hash}"
    )
}

/// Hex digest of the request body under SHA-256.
#[must_use]
pub fn hash_body_bytes(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_HASH: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn reference() -> String {
        build_canonical_request(
            "GET",
            "/kernel/abc123",
            "2019-01-01T00:00:00.000Z",
            "api.example.com",
            "application/json",
            "v3.20170615",
            EMPTY_HASH,
        )
    }

    #[test]
    fn test_should_hash_empty_body_to_known_digest() {
        assert_eq!(hash_body_bytes(b""), EMPTY_HASH);
    }

    #[test]
    fn test_should_build_canonical_request_with_fixed_field_order() {
        let expected = "GET\n\
                        /kernel/abc123\n\
                        2019-01-01T00:00:00.000Z\n\
                        host:api.example.com\n\
                        content-type:application/json\n\
                        x-backendai-version:v3.20170615\n\
                        e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(reference(), expected);
    }

    #[test]
    fn test_should_be_deterministic_for_identical_inputs() {
        assert_eq!(reference(), reference());
    }

    #[test]
    fn test_should_change_output_when_any_field_changes() {
        let base = reference();
        let variants = [
            build_canonical_request(
                "POST",
                "/kernel/abc123",
                "2019-01-01T00:00:00.000Z",
                "api.example.com",
                "application/json",
                "v3.20170615",
                EMPTY_HASH,
            ),
            build_canonical_request(
                "GET",
                "/kernel/abc124",
                "2019-01-01T00:00:00.000Z",
                "api.example.com",
                "application/json",
                "v3.20170615",
                EMPTY_HASH,
            ),
            build_canonical_request(
                "GET",
                "/kernel/abc123",
                "2019-01-01T00:00:00.001Z",
                "api.example.com",
                "application/json",
                "v3.20170615",
                EMPTY_HASH,
            ),
            build_canonical_request(
                "GET",
                "/kernel/abc123",
                "2019-01-01T00:00:00.000Z",
                "api.example.org",
                "application/json",
                "v3.20170615",
                EMPTY_HASH,
            ),
            build_canonical_request(
                "GET",
                "/kernel/abc123",
                "2019-01-01T00:00:00.000Z",
                "api.example.com",
                "text/plain",
                "v3.20170615",
                EMPTY_HASH,
            ),
            build_canonical_request(
                "GET",
                "/kernel/abc123",
                "2019-01-01T00:00:00.000Z",
                "api.example.com",
                "application/json",
                "v6.20220615",
                EMPTY_HASH,
            ),
            build_canonical_request(
                "GET",
                "/kernel/abc123",
                "2019-01-01T00:00:00.000Z",
                "api.example.com",
                "application/json",
                "v3.20170615",
                &hash_body_bytes(b"{}"),
            ),
        ];
        for variant in variants {
            assert_ne!(base, variant);
        }
    }

    #[test]
    fn test_should_hash_distinct_bodies_to_distinct_digests() {
        assert_ne!(
            hash_body_bytes(b"{\"name\":\"a\"}"),
            hash_body_bytes(b"{\"name\":\"b\"}")
        );
    }
}
