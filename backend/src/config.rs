//! Configuration management for the iScan API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with ISCAN_ prefix

use std::net::{IpAddr, SocketAddr};

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Language;

/// Placeholder substituted with the barcode in the upstream URL template
pub const BARCODE_PLACEHOLDER: &str = "{barcode}";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Project name shown on the root endpoint
    pub project_name: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Open Food Facts API configuration
    pub openfood: OpenFoodConfig,

    /// Rating engine configuration
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenFoodConfig {
    /// Product URL template containing `{barcode}`
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent sent upstream
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Description language used when the request does not pick one
    pub default_language: String,
}

impl AnalysisConfig {
    /// Configured default language, falling back to English for unknown codes
    pub fn language(&self) -> Language {
        Language::from_code(&self.default_language).unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("ISCAN_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("project_name", "iScan API")?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "openfood.api_url",
                "https://world.openfoodfacts.org/api/v2/product/{barcode}.json",
            )?
            .set_default("openfood.timeout_secs", 10)?
            .set_default(
                "openfood.user_agent",
                "iScan/0.1 (+https://world.openfoodfacts.org)",
            )?
            .set_default("analysis.default_language", "en")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ISCAN_ prefix)
            .add_source(
                Environment::with_prefix("ISCAN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.openfood.api_url.contains(BARCODE_PLACEHOLDER) {
            return Err(ConfigError::Message(format!(
                "openfood.api_url must contain the {} placeholder",
                BARCODE_PLACEHOLDER
            )));
        }
        Ok(())
    }
}

impl ServerConfig {
    /// Socket address to bind, accepting `localhost` as an alias for 127.0.0.1
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::Message(format!("invalid server.host '{}'", self.host)))?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}
