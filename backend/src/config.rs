//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::hmpi::DEFAULT_CRITICAL_HPI;
use std::env;

/// Default port, matching the address the web client was built against
pub const DEFAULT_PORT: u16 = 3001;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Calculation configuration
    pub calculation: CalculationConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Calculation configuration
#[derive(Debug, Clone)]
pub struct CalculationConfig {
    /// HPI at or above which a sample is classified as unsafe
    pub critical_hpi: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: "0.0.0.0".to_string(),
            },
            calculation: CalculationConfig {
                critical_hpi: DEFAULT_CRITICAL_HPI,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                host: env::var("HOST").unwrap_or(defaults.server.host),
            },
            calculation: CalculationConfig {
                critical_hpi: env::var("HPI_CRITICAL_THRESHOLD")
                    .ok()
                    .and_then(|t| t.parse::<f64>().ok())
                    .filter(|t| t.is_finite() && *t > 0.0)
                    .unwrap_or(defaults.calculation.critical_hpi),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("HPI_CRITICAL_THRESHOLD");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.calculation.critical_hpi, 100.0);
        assert_eq!(config.server_addr(), "0.0.0.0:3001");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("PORT", "8081");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("HPI_CRITICAL_THRESHOLD", "75.5");

        let config = Config::from_env();
        assert_eq!(config.server_addr(), "127.0.0.1:8081");
        assert_eq!(config.calculation.critical_hpi, 75.5);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back_to_defaults() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("HPI_CRITICAL_THRESHOLD", "-3");

        let config = Config::from_env();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.calculation.critical_hpi, DEFAULT_CRITICAL_HPI);
        clear_env();
    }
}
