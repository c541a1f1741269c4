//! Configuration management for the Aoide CLI.
//!
//! This module handles loading configuration values from environment
//! variables and a `.env` file in the working directory. All settings are
//! collected once at startup into a single immutable [`Config`] struct
//! that is passed by reference to every component that needs it.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::env;

use crate::error::{AoideError, Result};

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_ANALYSIS_HOST: &str = "track-analysis.p.rapidapi.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable application configuration, built once at startup.
///
/// # Environment Variables
///
/// | Variable            | Required | Default                                  |
/// |---------------------|----------|------------------------------------------|
/// | `CLIENT_ID`         | yes      | -                                        |
/// | `CLIENT_SECRET`     | yes      | -                                        |
/// | `API_AUTH_URL`      | no       | `https://accounts.spotify.com/api/token` |
/// | `API_BASE_URL`      | no       | `https://api.spotify.com/v1`             |
/// | `AUDIOANALYSIS_KEY` | no       | - (`--vector` fails without it)          |
/// | `AUDIOANALYSIS_HOST`| no       | `track-analysis.p.rapidapi.com`          |
/// | `API_TIMEOUT`       | no       | `30` (seconds)                           |
/// | `DEBUG`             | no       | `false`                                  |
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub api_base_url: String,
    pub analysis_key: Option<String>,
    pub analysis_host: String,
    pub timeout: u64,
    pub debug: bool,
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing or unreadable `.env` file is not an error: credentials may
/// just as well come from the plain process environment. The file is only
/// ever read, never written.
pub fn load_env() {
    dotenv::dotenv().ok();
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AoideError::Config`] if a required variable is missing or
    /// empty, or if `API_TIMEOUT` is set but not a positive integer.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            client_id: require("CLIENT_ID")?,
            client_secret: require("CLIENT_SECRET")?,
            auth_url: optional("API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            api_base_url: optional("API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            analysis_key: optional("AUDIOANALYSIS_KEY"),
            analysis_host: optional("AUDIOANALYSIS_HOST")
                .unwrap_or_else(|| DEFAULT_ANALYSIS_HOST.to_string()),
            timeout: timeout_from_env()?,
            debug: optional("DEBUG")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

/// Wrapper over `env::var` that rejects missing or empty values.
fn require(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AoideError::Config(format!("{name} must be set"))),
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn timeout_from_env() -> Result<u64> {
    match optional("API_TIMEOUT") {
        None => Ok(DEFAULT_TIMEOUT_SECS),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(AoideError::Config(format!(
                "API_TIMEOUT must be a positive number of seconds, got '{raw}'"
            ))),
        },
    }
}
