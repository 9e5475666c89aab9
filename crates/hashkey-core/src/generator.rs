use tracing::debug;

use crate::clock::resolve_timestamp;
use crate::crypto::key_hash::{combine, hash_combined};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedKey {
    pub identifier: String,
    pub timestamp: String,
    pub combined: String,
    pub hash_key: String,
}

/// Derive the hash key for `identifier`, defaulting the timestamp to now.
///
/// The identifier is not validated; an empty string is hashed like any other.
pub fn generate(identifier: &str, timestamp: Option<&str>) -> GeneratedKey {
    let timestamp = resolve_timestamp(timestamp);
    let combined = combine(identifier, &timestamp);
    let hash_key = hash_combined(&combined);

    debug!(identifier, timestamp = %timestamp, hash_key = %hash_key, "generated hash key");

    GeneratedKey {
        identifier: identifier.to_string(),
        timestamp,
        combined,
        hash_key,
    }
}
