//! Cache key and filename derivation.

use sha2::{Digest, Sha256};

/// Hex chars of the key digest appended to each filename.
const DIGEST_SUFFIX_LEN: usize = 16;

/// Compute the cache key for a component page at a documentation version.
pub fn compute_cache_key(component_slug: &str, version: &str) -> String {
    format!("component:{component_slug}:{version}")
}

/// Map an opaque cache key to a filesystem-safe filename.
///
/// Characters outside `[A-Za-z0-9]` become `_`; a truncated SHA-256 of the
/// original key keeps keys that differ only in punctuation apart.
pub fn file_name_for_key(key: &str) -> String {
    let sanitized: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("{sanitized}-{}.json", &digest[..DIGEST_SUFFIX_LEN])
}
