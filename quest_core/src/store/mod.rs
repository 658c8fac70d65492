//! Persona persistence.
//!
//! The store itself is a plain key-value boundary holding serialized
//! records. `PersonaRepository` layers (de)serialization and schema
//! migration on top of it.

mod file;
mod migration;

pub use file::*;
pub use migration::*;

use legends_rules::Persona;
use std::collections::HashMap;
use tracing::info;

use crate::error::StoreError;

/// Key-value storage for serialized records.
pub trait PersonaStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw record, e.g. one written by an older client.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PersonaStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Loads and saves the persona under a fixed key.
#[derive(Debug)]
pub struct PersonaRepository<S> {
    store: S,
    key: String,
}

impl<S: PersonaStore> PersonaRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persona, migrating older records. `None` on first run.
    pub fn load(&self) -> Result<Option<Persona>, StoreError> {
        let Some(raw) = self.store.load(&self.key)? else {
            return Ok(None);
        };
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let migrated = migrate(value)?;
        if migrated.from_version < CURRENT_SCHEMA_VERSION {
            info!(
                key = %self.key,
                from = migrated.from_version,
                to = CURRENT_SCHEMA_VERSION,
                "migrated persona record"
            );
        }
        Ok(Some(migrated.persona))
    }

    /// Overwrite the stored persona. Last write wins.
    pub fn save(&mut self, persona: &Persona) -> Result<(), StoreError> {
        let record = encode(persona)?;
        self.store.save(&self.key, &record)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}
