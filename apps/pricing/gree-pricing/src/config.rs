//! Configuration for the pricing service

use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use std::path::PathBuf;

pub use core_config::Environment;

pub const DEFAULT_RATES_FILE: &str = "rates.json";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// JSON document holding the active rates
    pub rates_file: PathBuf,
    /// Comma-separated list of allowed origins
    pub cors_origins: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            rates_file: PathBuf::from(env_or_default("RATES_FILE", DEFAULT_RATES_FILE)),
            cors_origins: env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_CORS_ORIGIN),
        })
    }

    pub fn with_rates_file(mut self, rates_file: Option<PathBuf>) -> Self {
        if let Some(path) = rates_file {
            self.rates_file = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(
            ["RATES_FILE", "CORS_ALLOWED_ORIGIN", "APP_ENV", "HOST", "PORT"],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.rates_file, PathBuf::from("rates.json"));
                assert_eq!(config.cors_origins, "http://localhost:3000");
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.app.name, "gree-pricing");
            },
        );
    }

    #[test]
    fn test_overrides_from_env() {
        temp_env::with_vars(
            [
                ("RATES_FILE", Some("/var/lib/gree/rates.json")),
                ("APP_ENV", Some("production")),
                ("PORT", Some("9000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.rates_file, PathBuf::from("/var/lib/gree/rates.json"));
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 9000);
            },
        );
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_command_line_rates_file_wins() {
        temp_env::with_var("RATES_FILE", Some("from-env.json"), || {
            let config = Config::from_env()
                .unwrap()
                .with_rates_file(Some(PathBuf::from("from-flag.json")));
            assert_eq!(config.rates_file, PathBuf::from("from-flag.json"));
        });
    }
}
