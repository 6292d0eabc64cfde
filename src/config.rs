//! Runtime configuration
//!
//! The only setting is the chat backend base URL, taken from
//! `LEGALTALK_API_BASE_URL` (loaded from `.env` or the bundled config).

use anyhow::{Context, Result, bail};
use reqwest::Url;

pub const API_BASE_URL_VAR: &str = "LEGALTALK_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_BASE_URL_VAR).ok())
    }

    pub fn from_value(raw: Option<String>) -> Self {
        let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
            return Self::default();
        };

        match Self::parse_base_url(&raw) {
            Ok(url) => Self {
                api_base_url: url.as_str().trim_end_matches('/').to_string(),
            },
            Err(err) => {
                tracing::warn!(
                    "Ignoring {}={:?}: {:#}; using {}",
                    API_BASE_URL_VAR,
                    raw,
                    err,
                    DEFAULT_API_BASE_URL
                );
                Self::default()
            }
        }
    }

    pub fn parse_base_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw.trim()).with_context(|| format!("invalid base URL {raw:?}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("unsupported scheme {:?}", url.scheme());
        }
        Ok(url)
    }

    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.api_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_uses_local_default() {
        let config = AppConfig::from_value(None);
        assert_eq!(config.chat_endpoint(), "http://localhost:8000/chat");
        assert_eq!(AppConfig::from_value(Some("  ".into())), AppConfig::default());
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = AppConfig::from_value(Some("https://api.example.vn/".into()));
        assert_eq!(config.chat_endpoint(), "https://api.example.vn/chat");

        let nested = AppConfig::from_value(Some("http://10.0.0.2:9000/v1/".into()));
        assert_eq!(nested.chat_endpoint(), "http://10.0.0.2:9000/v1/chat");
    }

    #[test]
    fn invalid_url_falls_back() {
        assert_eq!(
            AppConfig::from_value(Some("not a url".into())),
            AppConfig::default()
        );
        assert!(AppConfig::parse_base_url("ftp://example.com").is_err());
    }
}
