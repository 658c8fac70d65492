//! Error types for the quest engine.

use legends_rules::RulesError;
use thiserror::Error;

/// Errors at the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("persona record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("persona record is malformed: {0}")]
    InvalidRecord(String),

    #[error("persona record has schema version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        found: u64,
        supported: u64,
    },
}

/// Errors from the session controller.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no persona has been created yet")]
    NoPersona,

    #[error("unknown game mode '{0}'")]
    UnknownMode(String),

    #[error("game mode '{mode}' requires level {required}, persona is level {level}")]
    ModeLocked {
        mode: String,
        required: u32,
        level: u32,
    },

    #[error("a game mode can only be picked from the dashboard")]
    NotOnDashboard,

    #[error("no game mode is selected")]
    NoModeSelected,

    #[error("scenario '{scenario}' is not offered in mode '{mode}'")]
    UnknownScenario {
        mode: String,
        scenario: String,
    },

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
