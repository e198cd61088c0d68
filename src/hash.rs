//! BLAKE3 hashing utilities for shell definition integrity

use blake3::Hasher;

/// Hash prefix for BLAKE3 digests
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 digest of a byte slice
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex())
}

/// Verify a digest matches the expected value
pub fn verify_digest(expected: &str, actual: &str) -> bool {
    // Normalize both digests (ensure prefix)
    let normalize = |h: &str| {
        if h.starts_with(HASH_PREFIX) {
            h.to_string()
        } else {
            format!("{HASH_PREFIX}{h}")
        }
    };

    normalize(expected) == normalize(actual)
}
