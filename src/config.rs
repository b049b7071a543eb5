//! Configuration management for the address book demo.
//!
//! This module handles loading and validating configuration from environment variables.
//! An optional .env file is read first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// How contact listings are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Contact name: ..., phones: ...` line per record
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

/// Configuration for the address book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format for listings (default: text)
    pub output_format: OutputFormat,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: text)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let output_format = Self::parse_output_format("ADDRESS_BOOK_OUTPUT")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            output_format,
            log_level,
        })
    }

    /// Parse an environment variable as an output format, defaulting to text.
    fn parse_output_format(var_name: &str) -> ConfigResult<OutputFormat> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "text" => Ok(OutputFormat::Text),
                "json" => Ok(OutputFormat::Json),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be 'text' or 'json', got: {}", val),
                }),
            },
            Err(_) => Ok(OutputFormat::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}
