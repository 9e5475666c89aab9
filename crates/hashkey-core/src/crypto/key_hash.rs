use sha2::{Digest, Sha256};

/// The exact preimage fed to the hash: `identifier:timestamp`.
pub fn combine(identifier: &str, timestamp: &str) -> String {
    format!("{identifier}:{timestamp}")
}

/// Lowercase hex SHA-256 of `identifier:timestamp`.
pub fn hash_key(identifier: &str, timestamp: &str) -> String {
    hash_combined(&combine(identifier, timestamp))
}

pub fn hash_combined(combined: &str) -> String {
    let digest = Sha256::digest(combined.as_bytes());
    hex::encode(digest)
}
