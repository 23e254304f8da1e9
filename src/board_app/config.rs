use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, DEFAULT_REQUEST_TIMEOUT};
use std::time::Duration;

/// Default backend URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "BOARD_BACKEND_URL";

/// Board client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                server_url: DEFAULT_SERVER_URL.to_string(),
                request_timeout: DEFAULT_REQUEST_TIMEOUT,
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the backend URL once at startup.
    ///
    /// Loads a `.env` file when present, then reads `BOARD_BACKEND_URL`.
    /// Falls back to the default URL when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) => Self::with_builder(AppConfig::builder().server_url(url)),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_api_url() {
        let config = Config::new();
        let url = config.api_url("/api/board/abc");
        assert_eq!(url, "http://127.0.0.1:3000/api/board/abc");
    }

    #[test]
    fn test_with_builder() {
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url("https://boards.example.com/")
                .request_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        assert_eq!(
            config.api_url("/api/editNoteColumn/1"),
            "https://boards.example.com/api/editNoteColumn/1"
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(BACKEND_URL_ENV, "http://10.0.0.5:8080");
        let config = Config::from_env().unwrap();
        std::env::remove_var(BACKEND_URL_ENV);
        assert_eq!(config.server_url(), "http://10.0.0.5:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_url() {
        std::env::set_var(BACKEND_URL_ENV, "not a url");
        let result = Config::from_env();
        std::env::remove_var(BACKEND_URL_ENV);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }
}
