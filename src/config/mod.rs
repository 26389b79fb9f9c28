use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;

use paths::{get_config_path, get_log_dir_path};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
///
/// Every field has a usable default, so running without a config file
/// is the normal case: defaults point at the public fantasy API, the
/// Wikidata query service, and `index.html` in the working directory.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the fantasy league API (bootstrap + fixtures endpoints).
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// SPARQL query service endpoint used to build the birthday index.
    #[serde(default = "default_sparql_endpoint")]
    pub sparql_endpoint: String,
    /// Path the generated HTML report is written to, overwritten each run.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base() -> String {
    crate::constants::endpoints::FANTASY_API_BASE.to_string()
}

fn default_sparql_endpoint() -> String {
    crate::constants::endpoints::SPARQL_ENDPOINT.to_string()
}

fn default_output_path() -> String {
    crate::constants::DEFAULT_OUTPUT_FILE.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: default_api_base(),
            sparql_endpoint: default_sparql_endpoint(),
            output_path: default_output_path(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, built-in defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `BIRTHDAY_FIXTURES_API_BASE` - Override fantasy API base URL
    /// - `BIRTHDAY_FIXTURES_SPARQL_ENDPOINT` - Override SPARQL endpoint
    /// - `BIRTHDAY_FIXTURES_OUTPUT` - Override report output path
    /// - `BIRTHDAY_FIXTURES_LOG_FILE` - Override log file path
    /// - `BIRTHDAY_FIXTURES_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file/default values.
    fn apply_env_overrides(&mut self) {
        use crate::constants::env_vars;

        if let Ok(api_base) = std::env::var(env_vars::FANTASY_API_BASE) {
            self.api_base = api_base;
        }

        if let Ok(endpoint) = std::env::var(env_vars::SPARQL_ENDPOINT) {
            self.sparql_endpoint = endpoint;
        }

        if let Ok(output_path) = std::env::var(env_vars::OUTPUT_FILE) {
            self.output_path = output_path;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "api_base must start with http:// or https://: '{}'",
                self.api_base
            )));
        }

        if !self.sparql_endpoint.starts_with("http://")
            && !self.sparql_endpoint.starts_with("https://")
        {
            return Err(AppError::config_error(format!(
                "sparql_endpoint must start with http:// or https://: '{}'",
                self.sparql_endpoint
            )));
        }

        if self.output_path.trim().is_empty() {
            return Err(AppError::config_error("output_path must not be empty"));
        }

        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error(
                "http_timeout_seconds must be at least 1",
            ));
        }

        Ok(())
    }

    /// Saves current configuration to the default config file location.
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
    /// # Returns
    /// * `Ok(())` - Successfully displayed configuration
    /// * `Err(AppError)` - Error occurred while reading config
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists (defaults shown)
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not present, using built-in defaults)");
        }
        println!("────────────────────────────────────");
        println!("Fantasy API Base:");
        println!("{}", config.api_base);
        println!("────────────────────────────────────");
        println!("SPARQL Endpoint:");
        println!("{}", config.sparql_endpoint);
        println!("────────────────────────────────────");
        println!("Report Output Path:");
        println!("{}", config.output_path);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/birthday_fixtures.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred while saving (e.g., invalid path, I/O error)
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
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
