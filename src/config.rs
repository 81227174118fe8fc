//! Client Configuration
//!
//! Read once at startup from `<meta name="complaint-desk-config" content="{...}">`.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const CONFIG_META_NAME: &str = "complaint-desk-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every endpoint path; empty means same origin
    pub api_base: String,
    pub toast_delay_ms: u32,
    pub inline_error_ms: u32,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_delay_ms: 3500,
            inline_error_ms: 8000,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Look up the meta tag. A missing tag gives the defaults; a malformed one
    /// gives the defaults plus the parse error so the caller can log it once
    /// the logger is up.
    pub fn from_document() -> (Self, Option<String>) {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name='{}']", CONFIG_META_NAME)).ok().flatten())
            .and_then(|el| el.get_attribute("content"));

        match content {
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(format!("ignoring malformed {}: {}", CONFIG_META_NAME, e))),
            },
            None => (Self::default(), None),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"toast_delay_ms": 5000}"#).unwrap();
        assert_eq!(config.toast_delay_ms, 5000);
        assert_eq!(config.inline_error_ms, 8000);
        assert_eq!(config.api_base, "");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(ClientConfig::from_json("{toast").is_err());
    }

    #[test]
    fn test_url_for_joins_base() {
        let mut config = ClientConfig::default();
        assert_eq!(config.url_for("/login"), "/login");
        config.api_base = "https://desk.example.org/".into();
        assert_eq!(config.url_for("/login"), "https://desk.example.org/login");
    }

    #[test]
    fn test_level_filter_parsing() {
        let mut config = ClientConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::Info);
        config.log_level = "DEBUG".into();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "chatty".into();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
