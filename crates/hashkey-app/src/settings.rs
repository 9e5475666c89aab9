#[derive(Clone, Debug)]
pub struct Settings {
    pub log_filter: String,
}

impl Settings {
    /// Logging is the only thing configured here; a blank `HASHKEY_LOG` reads as unset.
    pub fn from_env() -> Self {
        let log_filter = std::env::var("HASHKEY_LOG")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "warn".to_string());

        Self { log_filter }
    }
}
