//! Game configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, RulesError};
use crate::mechanics::AnswerGold;

/// Top-level configuration. Every section and field has a default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub pacing: PacingConfig,
    pub rewards: AnswerGold,
    pub storage: StorageConfig,
}

impl GameConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

/// Display delays of the quest flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Delay after answering before "continue" becomes available.
    pub result_reveal_ms: u64,
    /// Delay after the verdict before rewards are applied.
    pub completion_return_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            result_reveal_ms: 1500,
            completion_return_ms: 4000,
        }
    }
}

impl PacingConfig {
    pub fn result_reveal(&self) -> Duration {
        Duration::from_millis(self.result_reveal_ms)
    }

    pub fn completion_return(&self) -> Duration {
        Duration::from_millis(self.completion_return_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key the persona record is stored under.
    pub persona_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persona_key: "legalLegends_avatar".to_string(),
        }
    }
}
