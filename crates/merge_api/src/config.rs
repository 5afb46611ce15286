//! Client configuration.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. Environment variables prefixed with `MERGE_` (e.g. `MERGE_API_KEY`)
//! 2. Local config file (`./merge.toml`)
//! 3. XDG config file (`~/.config/merge/config.toml` on Linux)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! api_key = "..."             # or MERGE_API_KEY
//! account_token = "..."       # or MERGE_ACCOUNT_TOKEN
//! environment = "sandbox"     # production | sandbox | production_eu
//! # base_url = "https://api.merge.dev/api"
//! max_retries = 2
//! timeout_secs = 60
//! ```

use std::path::PathBuf;
use std::time::Duration;

use config::{Config as ConfigBuilder, Environment as EnvSource, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::environment::Environment;
use crate::retry::DEFAULT_MAX_RETRIES;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings needed to build a [`crate::Client`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Production or test API key.
    pub api_key: Option<String>,
    /// Token of the linked account requests act on.
    pub account_token: Option<String>,
    /// Deployment to talk to.
    pub environment: Environment,
    /// Overrides the environment's base URL when set.
    pub base_url: Option<String>,
    /// Retries after the first attempt.
    pub max_retries: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            account_token: None,
            environment: Environment::default(),
            base_url: None,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from config files and `MERGE_*` environment variables.
    ///
    /// Failures are logged and yield the defaults.
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(xdg_config) = Self::default_config_path()
            && xdg_config.exists()
        {
            tracing::debug!("Loading config from {:?}", xdg_config);
            builder = builder.add_source(
                File::from(xdg_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let local_config = PathBuf::from("merge.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./merge.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // MERGE_API_KEY -> api_key. Values stay strings so credentials that
        // look numeric are not rewritten; numeric fields convert on deserialize.
        builder = builder.add_source(EnvSource::with_prefix("MERGE"));

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<ClientConfig>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    ClientConfig::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                ClientConfig::default()
            }
        }
    }

    /// Parse configuration from a TOML document, on top of the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, config::ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// The base URL requests are sent to.
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "merge").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_KEYS: &[&str] = &[
        "MERGE_API_KEY",
        "MERGE_ACCOUNT_TOKEN",
        "MERGE_ENVIRONMENT",
        "MERGE_BASE_URL",
        "MERGE_MAX_RETRIES",
        "MERGE_TIMEOUT_SECS",
    ];

    /// Sets `MERGE_*` variables for one test and restores them on drop.
    ///
    /// Only use from `#[serial_test::serial]` tests.
    struct ScopedEnv {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl ScopedEnv {
        fn new(vars: &[(&'static str, &str)]) -> Self {
            let saved = ENV_KEYS
                .iter()
                .map(|key| (*key, std::env::var(key).ok()))
                .collect();
            for key in ENV_KEYS {
                unsafe { std::env::remove_var(key) };
            }
            for (key, value) in vars {
                unsafe { std::env::set_var(key, value) };
            }
            Self { saved }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for (key, original) in &self.saved {
                match original {
                    Some(value) => unsafe { std::env::set_var(key, value) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_load_reads_merge_env_vars() {
        let _env = ScopedEnv::new(&[
            ("MERGE_API_KEY", "env_key"),
            ("MERGE_ACCOUNT_TOKEN", "env_acct"),
            ("MERGE_ENVIRONMENT", "sandbox"),
            ("MERGE_MAX_RETRIES", "5"),
            ("MERGE_TIMEOUT_SECS", "15"),
        ]);

        let config = ClientConfig::load();

        assert_eq!(config.api_key.as_deref(), Some("env_key"));
        assert_eq!(config.account_token.as_deref(), Some("env_acct"));
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    #[serial_test::serial]
    fn test_load_keeps_numeric_looking_credentials_verbatim() {
        let _env = ScopedEnv::new(&[
            ("MERGE_API_KEY", "00123456789012345678901234567890"),
            ("MERGE_ACCOUNT_TOKEN", "1e5"),
        ]);

        let config = ClientConfig::load();

        assert_eq!(
            config.api_key.as_deref(),
            Some("00123456789012345678901234567890")
        );
        assert_eq!(config.account_token.as_deref(), Some("1e5"));
    }

    #[test]
    #[serial_test::serial]
    fn test_load_falls_back_to_defaults_on_invalid_value() {
        let _env = ScopedEnv::new(&[("MERGE_API_KEY", "env_key"), ("MERGE_MAX_RETRIES", "abc")]);

        let config = ClientConfig::load();

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.account_token.is_none());
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.resolved_base_url(), "https://api.merge.dev/api");
    }

    #[test]
    fn test_config_from_toml_string() {
        let config = ClientConfig::from_toml_str(
            r#"
            api_key = "test_key"
            account_token = "acct_123"
            environment = "sandbox"
            max_retries = 5
            timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("test_key"));
        assert_eq!(config.account_token.as_deref(), Some("acct_123"));
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(
            config.resolved_base_url(),
            "https://api-sandbox.merge.dev/api"
        );
    }

    #[test]
    fn test_config_partial_override_keeps_defaults() {
        let config = ClientConfig::from_toml_str(r#"environment = "production_eu""#).unwrap();

        assert_eq!(config.environment, Environment::ProductionEu);
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_base_url_override_wins() {
        let config = ClientConfig::from_toml_str(
            r#"
            environment = "sandbox"
            base_url = "http://localhost:8080/api"
            "#,
        )
        .unwrap();

        assert_eq!(config.resolved_base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_invalid_environment_is_an_error() {
        assert!(ClientConfig::from_toml_str(r#"environment = "staging""#).is_err());
    }
}
