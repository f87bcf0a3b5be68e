//! Configuration management module.
//!
//! Supports loading configuration from:
//! - A `.env` file in the working directory
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `TAXID_WORKER__<SECTION>__<KEY>` pattern

mod server;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Request limits for validation and generation.
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `.env` (exported into the process environment, if present)
    /// 2. `config/default.toml`
    /// 3. `config/{TAXID_PROFILE}.toml` (if `TAXID_PROFILE` is set)
    /// 4. Environment variables with `TAXID_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is normal outside development
        dotenvy::dotenv().ok();

        let profile = std::env::var("TAXID_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // TAXID_WORKER__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("TAXID_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        if self.validation.max_batch_size == 0 {
            return Err(ConfigError::Message(
                "validation.max_batch_size cannot be 0".to_string(),
            ));
        }

        if self.validation.max_generate_count == 0 {
            return Err(ConfigError::Message(
                "validation.max_generate_count cannot be 0".to_string(),
            ));
        }

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got {:?}",
                self.observability.log_format
            )));
        }

        Ok(())
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Maximum number of items in one batch validation request.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Maximum number of documents generated per request.
    #[serde(default = "default_max_generate_count")]
    pub max_generate_count: u32,
}

const fn default_max_batch_size() -> usize {
    1000
}

const fn default_max_generate_count() -> u32 {
    100
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            max_generate_count: default_max_generate_count(),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Bearer key required on `/v1` routes. Empty disables authentication.
    #[serde(default)]
    pub api_key: String,
}

impl AuthConfig {
    /// Whether `/v1` routes require a key.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: default_metrics_enabled(),
        }
    }
}
