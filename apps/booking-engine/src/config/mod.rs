//! Configuration for the booking engine.
//!
//! Settings come from an optional `booking.toml` next to the binary,
//! overridden by `BOOKING_*` environment variables (nested keys use
//! `__`, e.g. `BOOKING_SERVER__HTTP_PORT`).

use config::{Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The loaded values are inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port for the REST endpoints.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
        }
    }
}

const fn default_http_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

/// A venue to register in the directory at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSeed {
    /// Unique venue name.
    pub name: String,
    /// Hourly price, as a decimal string (e.g. `"50.00"`).
    pub hourly_price: Decimal,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Venues seeded into the directory at startup.
    #[serde(default)]
    pub venues: Vec<VenueSeed>,
}

impl AppConfig {
    /// Load from `booking.toml` (if present) and `BOOKING_*` env vars,
    /// then validate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or the values
    /// are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let loaded = config::Config::builder()
            .add_source(File::with_name("booking").required(false))
            .add_source(Environment::with_prefix("BOOKING").separator("__"))
            .build()?;
        let app: Self = loaded.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Load from an inline TOML document (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document fails to parse or the
    /// values are inconsistent.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let loaded = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let app: Self = loaded.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Check the loaded values for consistency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.http_port == 0 {
            return Err(ConfigError::Invalid("http_port must be non-zero".into()));
        }
        let mut seen = std::collections::HashSet::new();
        for venue in &self.venues {
            if venue.name.trim().is_empty() {
                return Err(ConfigError::Invalid("venue name must be non-blank".into()));
            }
            if venue.hourly_price <= Decimal::ZERO {
                return Err(ConfigError::Invalid(format!(
                    "venue '{}' must have a positive hourly price",
                    venue.name
                )));
            }
            if !seen.insert(venue.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate venue name '{}'",
                    venue.name
                )));
            }
        }
        Ok(())
    }
}
