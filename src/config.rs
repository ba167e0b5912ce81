//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PASSWORD` (optional): shared secret for the whole service. When unset
///   the credential service falls back to a fixed default and logs a warning.
/// - `DATABASE_URL` (optional): SQLite connection string, defaults to `sqlite:data/quotes.db`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 5000
/// - `STATIC_DIR` (optional): directory containing `index.html`, defaults to `static`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_database_url() -> String {
    "sqlite:data/quotes.db".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into its expected type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        Self::from_iter(std::env::vars())
    }

    /// Parse configuration from an explicit set of variables.
    ///
    /// Field names are automatically converted: server_port -> SERVER_PORT
    fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_iter(vars(&[])).unwrap();

        assert_eq!(config.password, None);
        assert_eq!(config.database_url, "sqlite:data/quotes.db");
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn reads_upper_case_variables() {
        let config = Config::from_iter(vars(&[
            ("PASSWORD", "hunter2"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SERVER_PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.password.as_deref(), Some("hunter2"));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Config::from_iter(vars(&[("SERVER_PORT", "http")])).is_err());
    }
}
