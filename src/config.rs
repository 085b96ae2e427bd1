use crate::controller::ResponseOrdering;
use crate::form::CustomGoalMode;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Single variable that points the client at the planning service.
pub const API_URL_ENV: &str = "WORKOUT_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub form: FormSettings,
    #[serde(default)]
    pub requests: RequestSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// Unset means requests wait as long as the transport does.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSettings {
    #[serde(default)]
    pub custom_goal_mode: CustomGoalMode,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestSettings {
    #[serde(default)]
    pub ordering: ResponseOrdering,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_api_url() -> String { DEFAULT_API_URL.to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Defaults in the structs
    /// 2. config/default and config/local (both optional)
    /// 3. FITPLANNER__SECTION__KEY environment variables
    /// 4. WORKOUT_API_URL for the service endpoint
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(env::var(API_URL_ENV).ok())
    }

    /// Same as [`Settings::load`] with an explicit endpoint override.
    pub fn load_with(api_url: Option<String>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FITPLANNER__API__TIMEOUT_SECS -> api.timeout_secs
            .add_source(
                Environment::with_prefix("FITPLANNER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", api_url.filter(|url| !url.trim().is_empty()))?
            .build()?;

        settings.try_deserialize()
    }

    /// Defaults plus WORKOUT_API_URL, for when the layered load fails.
    pub fn fallback() -> Self {
        Self::fallback_with(env::var(API_URL_ENV).ok())
    }

    pub fn fallback_with(api_url: Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            settings.api.base_url = url;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:5001/api");
        assert_eq!(settings.api.timeout_secs, None);
        assert_eq!(settings.form.custom_goal_mode, CustomGoalMode::Accumulate);
        assert_eq!(settings.requests.ordering, ResponseOrdering::LastSettled);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_endpoint_override() {
        let settings = Settings::load_with(Some("https://plans.example.com/api".to_string())).unwrap();
        assert_eq!(settings.api.base_url, "https://plans.example.com/api");
    }

    #[test]
    fn test_fallback_still_honours_endpoint_variable() {
        let settings = Settings::fallback_with(Some("http://10.0.0.5:5001/api".to_string()));
        assert_eq!(settings.api.base_url, "http://10.0.0.5:5001/api");
        assert_eq!(settings.logging.level, "info");

        let settings = Settings::fallback_with(None);
        assert_eq!(settings.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_blank_endpoint_keeps_default() {
        let settings = Settings::load_with(Some("  ".to_string())).unwrap();
        assert_eq!(settings.api.base_url, DEFAULT_API_URL);
    }
}
