//! Configuration management for the mowing check server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with MOWCHECK_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::open_meteo;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Open-Meteo API configuration
    pub open_meteo: OpenMeteoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenMeteoConfig {
    /// Geocoding search endpoint
    pub geocoding_url: String,

    /// Forecast endpoint
    pub forecast_url: String,

    /// Number of forecast days requested (the cold spell rule looks at 3)
    pub forecast_days: u8,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("MOWCHECK_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("open_meteo.geocoding_url", open_meteo::GEOCODING_URL)?
            .set_default("open_meteo.forecast_url", open_meteo::FORECAST_URL)?
            .set_default(
                "open_meteo.forecast_days",
                i64::from(open_meteo::DEFAULT_FORECAST_DAYS),
            )?
            .set_default("open_meteo.timeout_secs", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (MOWCHECK_ prefix)
            .add_source(
                Environment::with_prefix("MOWCHECK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            geocoding_url: open_meteo::GEOCODING_URL.to_string(),
            forecast_url: open_meteo::FORECAST_URL.to_string(),
            forecast_days: open_meteo::DEFAULT_FORECAST_DAYS,
            timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            open_meteo: OpenMeteoConfig::default(),
        }
    }
}
