// ABOUTME: Environment-based server configuration with dotenv support and API key discovery
// ABOUTME: Reads ports, model, cuisine, cache TTLs and the Gemini key from env or key.properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! Environment-based configuration management

use crate::cache::CacheConfig;
use crate::constants::cache::{DEFAULT_SNAPSHOT_PATH, TTL_MEALS_SECS, TTL_SNAPSHOT_SECS};
use crate::constants::llm::{API_KEY_PLACEHOLDER, DEFAULT_API_KEY_FILE, DEFAULT_GEMINI_MODEL};
use crate::constants::meals::DEFAULT_CUISINE;
use crate::constants::network::{DEFAULT_HOST, DEFAULT_HTTP_PORT};
use crate::errors::{AppError, AppResult};
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Where the API key was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// `GEMINI_API_KEY` environment variable
    Environment,
    /// `key=` line of a key-value file
    File(PathBuf),
}

impl fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => f.write_str("GEMINI_API_KEY"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Outcome of API key discovery
#[derive(Clone, PartialEq, Eq)]
pub enum ApiKeyStatus {
    /// A usable key was found
    Configured {
        /// The credential
        key: String,
        /// Where it came from
        source: ApiKeySource,
    },
    /// No usable key; generation routes are disabled
    Missing {
        /// Human-readable explanation for startup logs and error responses
        reason: String,
    },
}

impl ApiKeyStatus {
    /// The key, if one is configured
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Configured { key, .. } => Some(key),
            Self::Missing { .. } => None,
        }
    }

    /// The key, or a `CONFIG_MISSING` error explaining its absence
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no usable key was found
    pub fn require(&self) -> AppResult<&str> {
        match self {
            Self::Configured { key, .. } => Ok(key),
            Self::Missing { reason } => Err(AppError::config_missing(reason.clone())),
        }
    }
}

impl fmt::Debug for ApiKeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured { source, .. } => f
                .debug_struct("Configured")
                .field("key", &"[REDACTED]")
                .field("source", source)
                .finish(),
            Self::Missing { reason } => f.debug_struct("Missing").field("reason", reason).finish(),
        }
    }
}

/// LLM provider settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Gemini credential discovery result
    pub api_key: ApiKeyStatus,
    /// Gemini model id
    pub model: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// LLM provider settings
    pub llm: LlmConfig,
    /// Cuisine used by the prompts when a request names none
    pub default_cuisine: String,
    /// Meals cache and snapshot settings
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            info!("No .env file loaded: {}", e);
        }

        let key_file = PathBuf::from(env_var_or("API_KEY_FILE", DEFAULT_API_KEY_FILE));
        let api_key = discover_api_key(env::var("GEMINI_API_KEY").ok(), &key_file);

        let snapshot_path = env_var_or("MEALS_SNAPSHOT_PATH", DEFAULT_SNAPSHOT_PATH);

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", DEFAULT_HOST),
            llm: LlmConfig {
                api_key,
                model: env_var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            },
            default_cuisine: env_var_or("DEFAULT_CUISINE", DEFAULT_CUISINE),
            cache: CacheConfig {
                fresh_ttl: Duration::from_secs(
                    env_var_or("MEALS_CACHE_TTL_SECS", &TTL_MEALS_SECS.to_string())
                        .parse()
                        .context("Invalid MEALS_CACHE_TTL_SECS value")?,
                ),
                snapshot_ttl: Duration::from_secs(
                    env_var_or("MEALS_SNAPSHOT_TTL_SECS", &TTL_SNAPSHOT_SECS.to_string())
                        .parse()
                        .context("Invalid MEALS_SNAPSHOT_TTL_SECS value")?,
                ),
                snapshot_path: (!snapshot_path.trim().is_empty())
                    .then(|| PathBuf::from(snapshot_path.trim())),
            },
        };

        if let ApiKeyStatus::Missing { reason } = &config.llm.api_key {
            warn!("{reason}; menu and suggestion generation is disabled");
        }

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Mindful Menu Server Configuration:\n\
             - Listen: {}:{}\n\
             - Gemini Model: {}\n\
             - API Key: {}\n\
             - Default Cuisine: {}\n\
             - Cache TTL: {}s\n\
             - Snapshot: {} (restore window {}s)",
            self.host,
            self.http_port,
            self.llm.model,
            match &self.llm.api_key {
                ApiKeyStatus::Configured { source, .. } => format!("configured via {source}"),
                ApiKeyStatus::Missing { .. } => "missing".to_owned(),
            },
            self.default_cuisine,
            self.cache.fresh_ttl.as_secs(),
            self.cache
                .snapshot_path
                .as_ref()
                .map_or_else(|| "disabled".to_owned(), |p| p.display().to_string()),
            self.cache.snapshot_ttl.as_secs(),
        )
    }
}

/// Resolve the API key: a non-empty environment value wins over the key file
///
/// Empty values and the sample placeholder count as absent.
#[must_use]
pub fn discover_api_key(env_value: Option<String>, key_file: &Path) -> ApiKeyStatus {
    if let Some(key) = env_value.map(|v| v.trim().to_owned()) {
        if is_usable_key(&key) {
            return ApiKeyStatus::Configured {
                key,
                source: ApiKeySource::Environment,
            };
        }
    }

    match read_key_file(key_file) {
        Ok(Some(key)) if is_usable_key(&key) => ApiKeyStatus::Configured {
            key,
            source: ApiKeySource::File(key_file.to_path_buf()),
        },
        Ok(_) => ApiKeyStatus::Missing {
            reason: format!("API key not set in {}", key_file.display()),
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => ApiKeyStatus::Missing {
            reason: format!(
                "GEMINI_API_KEY is not set and {} was not found",
                key_file.display()
            ),
        },
        Err(e) => ApiKeyStatus::Missing {
            reason: format!("Failed to read {}: {e}", key_file.display()),
        },
    }
}

/// Value of the first `key=` line of a key-value file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read
pub fn read_key_file(path: &Path) -> io::Result<Option<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_key_properties(&contents))
}

fn parse_key_properties(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("key="))
        .map(|value| value.trim().to_owned())
}

fn is_usable_key(key: &str) -> bool {
    !key.is_empty() && key != API_KEY_PLACEHOLDER
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_properties_takes_first_key_line() {
        let contents = "# Gemini\nname=demo\nkey= abc123 \nkey=second\n";
        assert_eq!(parse_key_properties(contents), Some("abc123".to_owned()));
        assert_eq!(parse_key_properties("other=1\n"), None);
    }

    #[test]
    fn test_placeholder_is_not_usable() {
        assert!(!is_usable_key(API_KEY_PLACEHOLDER));
        assert!(!is_usable_key(""));
        assert!(is_usable_key("AIzaSyExample"));
    }

    #[test]
    fn test_api_key_status_debug_redacts_key() {
        let status = ApiKeyStatus::Configured {
            key: "secret-key".to_owned(),
            source: ApiKeySource::Environment,
        };
        let rendered = format!("{status:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
