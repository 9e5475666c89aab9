use serde::Serialize;

use crate::generator::GeneratedKey;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const OTP_SEND_PATH: &str = "/api/auth/otp/send";
pub const DELIVERY_METHOD: &str = "sms";

/// Body of `POST /api/auth/otp/send`. Field order is the wire order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpSendRequest<'a> {
    pub phone: &'a str,
    pub method: &'a str,
    pub hash_key: &'a str,
    pub timestamp: &'a str,
}

impl<'a> From<&'a GeneratedKey> for OtpSendRequest<'a> {
    fn from(key: &'a GeneratedKey) -> Self {
        Self {
            phone: &key.identifier,
            method: DELIVERY_METHOD,
            hash_key: &key.hash_key,
            timestamp: &key.timestamp,
        }
    }
}

impl OtpSendRequest<'_> {
    pub fn to_json(&self) -> String {
        // Only borrowed strings; serialisation cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub fn send_url() -> String {
    format!("{DEFAULT_BASE_URL}{OTP_SEND_PATH}")
}

/// Ready-to-paste command exercising the OTP-send endpoint.
pub fn curl_command(key: &GeneratedKey) -> String {
    let body = OtpSendRequest::from(key).to_json();
    format!(
        "curl -X POST {} \\\n  -H \"Content-Type: application/json\" \\\n  -d '{}'",
        send_url(),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn body_matches_literal_layout() {
        let key = generate("+15551234567", Some("1700000000000"));
        assert_eq!(
            OtpSendRequest::from(&key).to_json(),
            "{\"phone\":\"+15551234567\",\"method\":\"sms\",\
             \"hashKey\":\"95ae3252915b4ff88a075774cdc5d6e540844cde597cf5412b940a3ee307f0ea\",\
             \"timestamp\":\"1700000000000\"}"
        );
    }

    #[test]
    fn body_stays_valid_json_for_awkward_identifiers() {
        let key = generate("a\"b\\c", Some("1"));
        let body: serde_json::Value =
            serde_json::from_str(&OtpSendRequest::from(&key).to_json()).unwrap();

        assert_eq!(body["phone"], "a\"b\\c");
        assert_eq!(body["method"], "sms");
        assert_eq!(body["hashKey"], key.hash_key.as_str());
        assert_eq!(body["timestamp"], "1");
    }

    #[test]
    fn curl_command_layout() {
        let key = generate("bob", Some("5"));
        let cmd = curl_command(&key);
        let lines: Vec<&str> = cmd.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "curl -X POST http://localhost:5000/api/auth/otp/send \\"
        );
        assert_eq!(lines[1], "  -H \"Content-Type: application/json\" \\");
        assert!(lines[2].starts_with("  -d '{\"phone\":\"bob\""));
        assert!(lines[2].ends_with("\"timestamp\":\"5\"}'"));
    }
}
