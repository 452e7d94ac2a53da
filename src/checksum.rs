//! Request checksum binding an auth token to the resource it authorizes.

use sha2::{Digest, Sha256};

/// Compute the checksum for a request: lowercase hex SHA-256 of the UTF-8
/// string `"{token}{path}"`.
///
/// Sent as the `X-Request-Checksum` header; the server recomputes it from the
/// token it issued and rejects the request on mismatch.
pub fn request_checksum(token: &str, path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize())
}
