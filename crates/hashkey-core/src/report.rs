use std::fmt::Write;

use crate::generator::GeneratedKey;
use crate::otp::curl_command;

/// Full human-readable report, one field per line, newline-terminated.
pub fn render(key: &GeneratedKey) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = writeln!(out, "Identifier: {}", key.identifier);
    let _ = writeln!(out, "Timestamp: {}", key.timestamp);
    let _ = writeln!(out, "Combined: {}", key.combined);
    let _ = writeln!(out, "Hash Key: {}", key.hash_key);
    out.push('\n');
    out.push_str("cURL Command:\n");
    out.push_str(&curl_command(key));
    out.push('\n');
    out
}
