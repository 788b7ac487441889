//! Content checksum used to detect whether a refresh changed the document.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the raw document text.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
