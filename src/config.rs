//! Configuration handling for the feedback form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the webhook endpoint
pub const WEBHOOK_URL_ENV: &str = "FEEDBACK_WEBHOOK_URL";

/// Which colour palette to render with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the terminal background
    #[default]
    Auto,
    Light,
    Dark,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedbackConfig {
    /// Endpoint that receives the feedback payload
    pub webhook_url: Option<String>,
    /// Colour theme
    #[serde(default)]
    pub theme: ThemePreference,
}

impl FeedbackConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "feedback", "feedback-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: FeedbackConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply the environment-supplied endpoint, which wins over the file
    pub fn with_env_override(mut self, webhook_url: Option<String>) -> Self {
        if let Some(url) = webhook_url.filter(|u| !u.trim().is_empty()) {
            self.webhook_url = Some(url);
        }
        self
    }

    /// Resolve configuration from the config file and the process environment
    ///
    /// A broken config file is logged and replaced by defaults.
    pub fn from_environment() -> Self {
        let config = Self::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring config file: {err:#}");
            Self::default()
        });
        config.with_env_override(std::env::var(WEBHOOK_URL_ENV).ok())
    }

    /// The endpoint if present and non-blank
    pub fn endpoint(&self) -> Option<String> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string)
    }

    /// Describe why the endpoint is unusable, if it is
    pub fn endpoint_problem(&self) -> Option<String> {
        match self.endpoint() {
            None => Some(format!(
                "No webhook endpoint configured; set {WEBHOOK_URL_ENV} or webhook_url in the config file"
            )),
            Some(url) => match reqwest::Url::parse(&url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => None,
                Ok(parsed) => Some(format!(
                    "Webhook endpoint {url:?} is not a valid URL: unsupported scheme {:?}",
                    parsed.scheme()
                )),
                Err(err) => Some(format!("Webhook endpoint {url:?} is not a valid URL: {err}")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeedbackConfig::default();
        assert!(config.webhook_url.is_none());
        assert_eq!(config.theme, ThemePreference::Auto);
    }

    #[test]
    fn test_serialization() {
        let config = FeedbackConfig {
            webhook_url: Some("https://hooks.example.com/feedback".to_string()),
            theme: ThemePreference::Dark,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"dark\""));
        let parsed: FeedbackConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.webhook_url,
            Some("https://hooks.example.com/feedback".to_string())
        );
        assert_eq!(parsed.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FeedbackConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.webhook_url.is_none());
        assert_eq!(parsed.theme, ThemePreference::Auto);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"theme": "light", "unknown_field": "value"}"#;
        let parsed: FeedbackConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.theme, ThemePreference::Light);
    }

    #[test]
    fn test_env_override_wins() {
        let config = FeedbackConfig {
            webhook_url: Some("https://file.example.com".to_string()),
            ..Default::default()
        }
        .with_env_override(Some("https://env.example.com".to_string()));
        assert_eq!(config.endpoint().as_deref(), Some("https://env.example.com"));
    }

    #[test]
    fn test_blank_env_does_not_override() {
        let config = FeedbackConfig {
            webhook_url: Some("https://file.example.com".to_string()),
            ..Default::default()
        }
        .with_env_override(Some("  ".to_string()));
        assert_eq!(config.endpoint().as_deref(), Some("https://file.example.com"));
    }

    #[test]
    fn test_endpoint_problem() {
        let missing = FeedbackConfig::default();
        assert!(missing
            .endpoint_problem()
            .unwrap()
            .contains(WEBHOOK_URL_ENV));

        let invalid = FeedbackConfig::default().with_env_override(Some("not a url".into()));
        assert!(invalid.endpoint_problem().unwrap().contains("not a valid URL"));

        let wrong_scheme =
            FeedbackConfig::default().with_env_override(Some("ftp://example.com/hook".into()));
        assert!(wrong_scheme
            .endpoint_problem()
            .unwrap()
            .contains("unsupported scheme"));

        let valid =
            FeedbackConfig::default().with_env_override(Some("http://localhost:8080/hook".into()));
        assert!(valid.endpoint_problem().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "feedback-tui-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"webhook_url": "http://localhost/hook"}"#).unwrap();
        let config = FeedbackConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.endpoint().as_deref(), Some("http://localhost/hook"));
    }

    #[test]
    fn test_load_from_rejects_invalid_json() {
        let path = std::env::temp_dir().join(format!(
            "feedback-tui-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();
        let result = FeedbackConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
