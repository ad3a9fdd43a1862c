//! Application configuration, read from the environment exactly once at
//! startup and handed to the components that need it at construction.

use thiserror::Error;

/// Page size used when the caller supplies no limit and `DEFAULT_LIMIT` is
/// unset.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Hard cap on caller-supplied page sizes.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Base URL of the remote catalog used by the seed importer.
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Process-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub default_limit: i64,
    pub catalog_url: String,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable must be set")]
    MissingDatabaseUrl,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `DEFAULT_LIMIT` and `CATALOG_URL` fall
    /// back to crate defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let default_limit = env_parse_or("DEFAULT_LIMIT", DEFAULT_PAGE_LIMIT);
        let catalog_url =
            std::env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_owned());
        Ok(Self { database_url, default_limit, catalog_url })
    }
}

/// Parses an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and falls back silently; a set but
/// unparseable value logs a warning instead of being swallowed.
pub fn env_parse_or<T: std::str::FromStr + std::fmt::Display>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "POKEDEX_TEST_PARSE_VALID_55101";
        unsafe { std::env::set_var(var_name, "25") };
        let result: i64 = env_parse_or(var_name, 10);
        assert_eq!(result, 25);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value_falls_back() {
        let var_name = "POKEDEX_TEST_PARSE_INVALID_55102";
        unsafe { std::env::set_var(var_name, "snorlax") };
        let result: i64 = env_parse_or(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var_falls_back() {
        let var_name = "POKEDEX_TEST_PARSE_MISSING_55103";
        unsafe { std::env::remove_var(var_name) };
        let result: i64 = env_parse_or(var_name, 10);
        assert_eq!(result, 10);
    }
}
