//! Error types for the rulebook.

use thiserror::Error;

/// Errors raised while building personas or parsing rule data.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("persona name must not be empty")]
    EmptyName,

    #[error("a specialization must be chosen before creating a persona")]
    MissingSpecialization,

    #[error("failed to parse content catalog: {0}")]
    Content(#[from] serde_json::Error),

    #[error("content catalog has no scenarios for fallback mode '{0}'")]
    MissingFallback(String),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RulesError>;
