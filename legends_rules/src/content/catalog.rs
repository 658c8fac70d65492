//! Content catalog - read-only mapping from game mode to scenarios.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

use super::Scenario;
use crate::error::{Result, RulesError};

const BUNDLED_CATALOG: &str = include_str!("../../assets/default_catalog.json");

/// Serialized form of the catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    fallback_mode: String,
    modes: HashMap<String, Vec<Scenario>>,
}

/// Shared, immutable scenario catalog.
///
/// Scenarios are reference counted so a running quest can hold on to its
/// scenario without borrowing the catalog.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    fallback_mode: String,
    modes: HashMap<String, Vec<Arc<Scenario>>>,
}

impl ContentCatalog {
    /// Build a catalog from already-loaded scenarios.
    pub fn new(
        fallback_mode: impl Into<String>,
        modes: HashMap<String, Vec<Scenario>>,
    ) -> Result<Self> {
        let fallback_mode = fallback_mode.into();

        let mut shared = HashMap::with_capacity(modes.len());
        for (mode, scenarios) in modes {
            let scenarios: Vec<Arc<Scenario>> = scenarios
                .into_iter()
                .filter(|scenario| {
                    if scenario.questions.is_empty() {
                        warn!(
                            mode = %mode,
                            scenario = %scenario.id,
                            "skipping scenario without questions"
                        );
                        return false;
                    }
                    if scenario.min_correct_answers as usize > scenario.questions.len() {
                        warn!(
                            mode = %mode,
                            scenario = %scenario.id,
                            "pass threshold exceeds question count; scenario can never be passed"
                        );
                    }
                    true
                })
                .map(Arc::new)
                .collect();
            shared.insert(mode, scenarios);
        }

        if shared.get(&fallback_mode).map_or(true, Vec::is_empty) {
            return Err(RulesError::MissingFallback(fallback_mode));
        }

        Ok(Self {
            fallback_mode,
            modes: shared,
        })
    }

    /// Parse a catalog from its JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.fallback_mode, doc.modes)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The catalog shipped with the game.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn fallback_mode(&self) -> &str {
        &self.fallback_mode
    }

    /// Scenarios for a mode, or the fallback mode's scenarios if it has none.
    pub fn scenarios_for(&self, mode_id: &str) -> &[Arc<Scenario>] {
        if let Some(scenarios) = self.modes.get(mode_id) {
            return scenarios;
        }
        debug!(
            mode = %mode_id,
            fallback = %self.fallback_mode,
            "no scenarios for mode, using fallback"
        );
        self.modes
            .get(&self.fallback_mode)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look up a scenario among those offered for a mode.
    pub fn find_scenario(&self, mode_id: &str, scenario_id: &str) -> Option<Arc<Scenario>> {
        self.scenarios_for(mode_id)
            .iter()
            .find(|s| s.id == scenario_id)
            .cloned()
    }
}
