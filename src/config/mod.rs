use crate::constants::env_vars;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Upstream API host. Should include the https:// prefix.
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// API credential, sourced from the environment at load time. Readable
    /// from the config file for local development, but never written back.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 12 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

/// Default upstream API host
fn default_api_host() -> String {
    crate::constants::DEFAULT_API_HOST.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_host: default_api_host(),
            api_key: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used; no file is created.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `RAPIDAPI_KEY` - API credential; absence means disabled mode
    /// - `CRICKET_API_HOST` - Override upstream API host
    /// - `CRICKET_LOG_FILE` - Override log file path
    /// - `CRICKET_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 12)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or defaulted configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - A missing credential is NOT an error; the fetch layer degrades to
    ///   disabled mode instead
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            config.api_key = Some(api_key);
        }

        if let Ok(api_host) = std::env::var(env_vars::API_HOST) {
            config.api_host = api_host;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_host, &self.log_file_path)
    }

    /// True when a non-empty API credential is present. Drives the one-time
    /// enable/disable decision in the fetch layer.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Saves current configuration to the default config file location.
    /// The credential is never serialized.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - The credential is shown masked, never in full
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("API Host:");
        println!("{}", config.api_host);
        println!("────────────────────────────────────");
        println!("API Key:");
        match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => println!("{}", mask_credential(key)),
            _ => println!("(not set - API calls disabled)"),
        }
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/cricket_dashboard.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// host has the proper https:// prefix. The credential field is skipped
    /// during serialization so secrets never land on disk.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_host = if !self.api_host.starts_with("https://") {
            format!("https://{}", self.api_host.trim_start_matches("http://"))
        } else {
            self.api_host.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_host,
            api_key: None,
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Masks a credential for display and logging: first five and last four
/// characters with the middle elided. Short keys are fully masked.
pub fn mask_credential(key: &str) -> String {
    if key.len() > 9 && key.is_ascii() {
        format!("{}...{}", &key[..5], &key[key.len() - 4..])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_host = "https://api.example.com"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_host, "https://api.example.com");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(
            config.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert!(config.api_key.is_none());
    }

    #[tokio::test]
    async fn test_config_defaults_when_fields_missing() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_host, crate::constants::DEFAULT_API_HOST);
        assert_eq!(config.log_file_path, None);
        assert!(!config.has_credential());
    }

    #[tokio::test]
    async fn test_config_save_never_writes_credential() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_key: Some("super-secret-key-1234".to_string()),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            !content.contains("super-secret-key-1234"),
            "Credential must not be serialized. Content: {content}"
        );
        assert!(content.contains("api_host"));
    }

    #[tokio::test]
    async fn test_config_save_prefixes_https() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_host: "api.example.com".to_string(),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();

        let saved = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(saved.api_host, "https://api.example.com");
    }

    #[test]
    fn test_has_credential() {
        let mut config = Config::default();
        assert!(!config.has_credential());

        config.api_key = Some(String::new());
        assert!(!config.has_credential());

        config.api_key = Some("abcdefghijklmnop".to_string());
        assert!(config.has_credential());
    }

    #[test]
    fn test_mask_credential() {
        assert_eq!(
            mask_credential("abcdefghijklmnop"),
            "abcde...mnop".to_string()
        );
        assert_eq!(mask_credential("short"), "***".to_string());
        assert_eq!(mask_credential(""), "***".to_string());
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_take_precedence() {
        // set_var is unsafe in edition 2024; serialized so no other test
        // observes the mutated environment
        unsafe {
            std::env::set_var(env_vars::API_KEY, "env-key-abcdef-1234");
            std::env::set_var(env_vars::API_HOST, "https://mock.example.com");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }

        let config = Config::load().await.unwrap();

        unsafe {
            std::env::remove_var(env_vars::API_KEY);
            std::env::remove_var(env_vars::API_HOST);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(config.api_host, "https://mock.example.com");
        assert_eq!(config.api_key.as_deref(), Some("env-key-abcdef-1234"));
        assert!(config.has_credential());
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[tokio::test]
    #[serial]
    async fn test_unparseable_timeout_env_is_ignored() {
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "not-a-number");
        }

        let config = Config::load().await.unwrap();

        unsafe {
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(
            config.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = Config {
            api_host: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
