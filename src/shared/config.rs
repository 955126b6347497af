use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::log_info;
use crate::shared::errors::{AppError, AppResult};

pub const BREEDS_COLLECTION: &str = "breeds";
pub const DOGS_COLLECTION: &str = "dogs";

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/";
const DEFAULT_DATABASE_NAME: &str = "dogshelter";
const TESTING_DATABASE_NAME: &str = "dogshelter_test";
const DEFAULT_PORT: u16 = 5100;
const DEFAULT_SEED_DATA_DIR: &str = "data";

/// Deployment environment selected through `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Testing,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Testing => "testing",
        }
    }

    fn default_debug(&self) -> bool {
        !matches!(self, Environment::Production)
    }

    fn default_database_name(&self) -> &'static str {
        match self {
            Environment::Testing => TESTING_DATABASE_NAME,
            _ => DEFAULT_DATABASE_NAME,
        }
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "default" | "" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "testing" => Ok(Environment::Testing),
            other => Err(AppError::ConfigError(format!(
                "Unknown APP_ENV '{}', expected development, production or testing",
                other
            ))),
        }
    }
}

/// Process configuration read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub mongodb_uri: String,
    pub database_name: String,
    pub debug: bool,
    pub port: u16,
    pub seed_data_dir: PathBuf,
}

impl AppConfig {
    /// Load `.env` (if any) and read configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => Environment::Development,
        };

        let debug = match lookup("APP_DEBUG") {
            Some(raw) => raw.trim().eq_ignore_ascii_case("true"),
            None => environment.default_debug(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::ConfigError(format!("Invalid PORT '{}': {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        let config = Self {
            environment,
            mongodb_uri: lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| environment.default_database_name().to_string()),
            debug,
            port,
            seed_data_dir: lookup("SEED_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_DATA_DIR)),
        };

        if config.database_name.trim().is_empty() {
            return Err(AppError::ConfigError(
                "DATABASE_NAME cannot be empty".to_string(),
            ));
        }

        log_info!(
            "Configuration loaded for {} environment (database: {})",
            config.environment.as_str(),
            config.database_name
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017/");
        assert_eq!(config.database_name, "dogshelter");
        assert_eq!(config.port, 5100);
        assert!(config.debug);
        assert_eq!(config.seed_data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_testing_environment_uses_test_database() {
        let config = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "testing")])).unwrap();
        assert_eq!(config.database_name, "dogshelter_test");
        assert!(config.debug);
    }

    #[test]
    fn test_production_disables_debug_by_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "Production")])).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.debug);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MONGODB_URI", "mongodb://db:27017/"),
            ("DATABASE_NAME", "shelter"),
            ("PORT", "8080"),
            ("APP_DEBUG", "false"),
        ]))
        .unwrap();
        assert_eq!(config.mongodb_uri, "mongodb://db:27017/");
        assert_eq!(config.database_name, "shelter");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_unknown_environment_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "staging")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
