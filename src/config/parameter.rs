use crate::error::AppError;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{error, info, warn};

static CONFIG: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Default configuration values
const DEFAULTS: &[(&str, &str)] = &[
    ("SERVER_ADDRESS", "127.0.0.1"),
    ("SERVER_PORT", "8081"),
    ("JWT_TTL_IN_MINUTES", "60"),
    ("JWT_ISSUER", "animalz"),
    ("JWT_LEEWAY_SECONDS", "0"),
    ("BCRYPT_COST", "12"),
    ("DB_MAX_CONNECTIONS", "20"),
    ("DB_MIN_CONNECTIONS", "5"),
    ("DB_ACQUIRE_TIMEOUT_SECONDS", "30"),
    ("DB_IDLE_TIMEOUT_SECONDS", "600"),
    ("DB_MAX_LIFETIME_SECONDS", "1800"),
    ("LOG_LEVEL", "info"),
    ("ENV", "development"),
];

/// Keys without a sensible default; startup fails when they are absent.
const REQUIRED: &[&str] = &["DATABASE_URL", "JWT_SECRET"];

pub fn init() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment file: {:?}", path),
        Err(_) => warn!("No .env file found, using system environment variables"),
    }

    let mut config = HashMap::new();

    for (key, value) in DEFAULTS {
        config.insert(key.to_string(), value.to_string());
    }

    let known_keys = DEFAULTS.iter().map(|(key, _)| *key).chain(REQUIRED.iter().copied());
    for key in known_keys {
        if let Ok(value) = std::env::var(key) {
            config.insert(key.to_string(), value);
        }
    }

    if CONFIG.set(config).is_err() {
        error!("Configuration already initialized");
    } else {
        info!("Configuration initialized successfully");
    }
}

/// Look a parameter up in the loaded table, falling back to the defaults
/// when `init` has not run (unit tests, tooling).
fn lookup(parameter: &str) -> Option<String> {
    match CONFIG.get() {
        Some(config) => config.get(parameter).cloned(),
        None => DEFAULTS
            .iter()
            .find(|(key, _)| *key == parameter)
            .map(|(_, value)| value.to_string()),
    }
}

pub fn get(parameter: &str) -> String {
    lookup(parameter).unwrap_or_else(|| {
        error!("Configuration parameter '{}' not found", parameter);
        panic!("Required configuration parameter '{}' is missing", parameter);
    })
}

pub fn get_optional(parameter: &str) -> Option<String> {
    lookup(parameter)
}

/// Fetch a parameter that has no default, reporting its absence as an error.
pub fn require(parameter: &str) -> Result<String, AppError> {
    lookup(parameter)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("missing required parameter '{}'", parameter)))
}

pub fn get_i64(parameter: &str) -> i64 {
    let value = get(parameter);
    value.parse::<i64>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid i64: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid i64", parameter);
    })
}

pub fn get_u64(parameter: &str) -> u64 {
    let value = get(parameter);
    value.parse::<u64>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid u64: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid u64", parameter);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_served_before_init() {
        assert_eq!(get("SERVER_PORT"), "8081");
        assert_eq!(get_u64("BCRYPT_COST"), 12);
        assert_eq!(get_i64("JWT_TTL_IN_MINUTES"), 60);
    }

    #[test]
    fn test_unknown_parameter_is_none() {
        assert!(get_optional("NOT_A_PARAMETER").is_none());
        assert!(matches!(require("NOT_A_PARAMETER"), Err(AppError::Config(_))));
    }
}
