use crate::constants::{ENV_API_PASSWORD, ENV_API_URL, ENV_API_USERNAME};
use crate::error::{Result, ScraperError};
use std::env;

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Loads configuration from the environment. Every variable is
    /// required; a missing or empty one fails before any network call.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: require_env(ENV_API_URL)?,
            username: require_env(ENV_API_USERNAME)?,
            password: require_env(ENV_API_PASSWORD)?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ScraperError::Config(format!(
            "environment variable {name} must be set"
        ))),
    }
}
