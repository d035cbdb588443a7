//! Card configuration.
//!
//! Every field has a default so an empty JSON object (or no file at all)
//! yields a working card for the built-in user.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Runtime configuration for the presence poller and quote rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Discord user id whose presence is shown
    pub user_id: String,
    /// Base URL of the presence API; the user id is appended as a path segment
    pub presence_base: String,
    /// Newline-delimited quotes file
    pub quotes_url: String,
    /// Presence poll period
    pub poll_interval_ms: u64,
    /// Quote rotation period
    pub rotation_interval_ms: u64,
    /// Delay between fading the quote out and swapping its text
    pub fade_delay_ms: u64,
    /// Per-request timeout for both providers
    pub request_timeout_ms: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            user_id: "1372459254136705064".to_string(),
            presence_base: "https://api.lanyard.rest/v1/users".to_string(),
            quotes_url: "https://moonlightrblx.github.io/api/quotes.txt".to_string(),
            poll_interval_ms: 15_000,
            rotation_interval_ms: 8_000,
            fade_delay_ms: 300,
            request_timeout_ms: 10_000,
        }
    }
}

impl CardConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: CardConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Full presence endpoint for the configured user.
    pub fn presence_url(&self) -> String {
        format!(
            "{}/{}",
            self.presence_base.trim_end_matches('/'),
            self.user_id
        )
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Reject configurations the timers or providers cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_id.trim().is_empty() {
            return Err(ConfigError::Invalid("user_id must not be empty".into()));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid("poll_interval_ms must be > 0".into()));
        }
        if self.rotation_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "rotation_interval_ms must be > 0".into(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = CardConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(15));
        assert_eq!(config.rotation_interval(), Duration::from_secs(8));
        assert_eq!(config.fade_delay(), Duration::from_millis(300));
        assert_eq!(
            config.presence_url(),
            "https://api.lanyard.rest/v1/users/1372459254136705064"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presence_url_tolerates_trailing_slash() {
        let config = CardConfig {
            presence_base: "http://localhost:9000/v1/users/".into(),
            user_id: "42".into(),
            ..Default::default()
        };
        assert_eq!(config.presence_url(), "http://localhost:9000/v1/users/42");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("card.json");
        std::fs::write(&path, r#"{ "user_id": "99", "poll_interval_ms": 5000 }"#).unwrap();

        let config = CardConfig::from_file(&path).unwrap();
        assert_eq!(config.user_id, "99");
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.rotation_interval_ms, 8000);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = CardConfig {
            rotation_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CardConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
