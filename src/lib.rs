//! Folio-Loom: a portfolio content hydrator
//!
//! This crate fetches line-oriented content documents for a portfolio site,
//! parses them into typed records through a single schema-driven state machine,
//! and guarantees every section a non-empty, renderable record list by
//! substituting fixed fallback content when live content is unavailable.

pub mod config;
pub mod content;
pub mod hydrate;
pub mod output;

use thiserror::Error;

/// Main error type for Folio-Loom operations
#[derive(Debug, Error)]
pub enum LoomError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown content kind: {0}")]
    UnknownKind(String),

    #[error("No document configured for content kind: {0}")]
    MissingDocument(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Folio-Loom operations
pub type Result<T> = std::result::Result<T, LoomError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use content::{ContentKind, Record, Schema};
pub use hydrate::{ContentOrigin, Hydrator, PublishedList};
