//! Identity key derivation for doctors and patients.

use crate::config::IdentityNormalization;
use crate::domain::IdentityKey;
use sha2::{Digest, Sha256};

/// SHA-256 of `input`, lowercase hex.
pub fn sha256_hex(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

/// Fold a name according to `mode`.
pub fn normalize_name(name: &str, mode: IdentityNormalization) -> String {
    match mode {
        IdentityNormalization::Exact => name.to_string(),
        IdentityNormalization::TrimCaseFold => name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase(),
    }
}

/// Build the presence-set key for `name`.
///
/// With `hashed`, the key is the SHA-256 hex of the normalized name.
pub fn identity_key(name: &str, mode: IdentityNormalization, hashed: bool) -> IdentityKey {
    let normalized = normalize_name(name, mode);
    if hashed {
        IdentityKey::new(sha256_hex(normalized.as_bytes()))
    } else {
        IdentityKey::new(normalized)
    }
}
