use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'GEMINI_API_KEY' is not set")?;

        Ok(Config {
            gemini_api_key,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout_secs: lookup("GEMINI_TIMEOUT_SECS")
                .unwrap_or_else(|| "120".to_string())
                .parse::<u64>()
                .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
            ..GeminiConfig::new(self.gemini_api_key.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "abc")])).unwrap();
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_fails() {
        assert!(Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_invalid_timeout_fails() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("GEMINI_TIMEOUT_SECS"));
    }

    #[test]
    fn test_gemini_config_defaults_match_client_defaults() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "abc")])).unwrap();
        let gemini = config.gemini();
        let defaults = GeminiConfig::new("abc");
        assert_eq!(gemini.api_key, defaults.api_key);
        assert_eq!(gemini.model, defaults.model);
        assert_eq!(gemini.base_url, defaults.base_url);
        assert_eq!(gemini.timeout, defaults.timeout);
    }

    #[test]
    fn test_gemini_config_carries_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        let gemini = config.gemini();
        assert_eq!(gemini.api_key, "abc");
        assert_eq!(gemini.model, "gemini-1.5-pro");
        assert_eq!(gemini.timeout, Duration::from_secs(30));
    }
}
