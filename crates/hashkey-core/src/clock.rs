use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since 1970-01-01T00:00:00Z. A clock set before the epoch reads as 0.
pub fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Supplied timestamp if non-empty, otherwise the current epoch-millisecond count.
pub fn resolve_timestamp(supplied: Option<&str>) -> String {
    match supplied {
        Some(ts) if !ts.is_empty() => ts.to_string(),
        _ => epoch_millis().to_string(),
    }
}
