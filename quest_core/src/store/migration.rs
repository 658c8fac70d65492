//! Versioned schema migration for stored persona records.
//!
//! Version 1 records predate the resource pools and gold and carry no
//! `schemaVersion` field. Version 2 is the current shape. Migration runs once,
//! at load time.

use legends_rules::{Persona, DEFAULT_MAX_HEALTH, DEFAULT_MAX_MANA, STARTING_GOLD};
use serde_json::{Map, Value};

use crate::error::StoreError;

pub const CURRENT_SCHEMA_VERSION: u64 = 2;

const VERSION_FIELD: &str = "schemaVersion";

/// A persona record brought up to the current schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Migrated {
    pub persona: Persona,
    pub from_version: u64,
}

/// Bring a stored record to the current schema and decode it.
pub fn migrate(value: Value) -> Result<Migrated, StoreError> {
    let Value::Object(mut record) = value else {
        return Err(StoreError::InvalidRecord(
            "expected a JSON object".to_string(),
        ));
    };

    let from_version = match record.remove(VERSION_FIELD) {
        None | Some(Value::Null) => 1,
        Some(v) => v.as_u64().ok_or_else(|| {
            StoreError::InvalidRecord(format!("{} must be a positive integer", VERSION_FIELD))
        })?,
    };
    if from_version > CURRENT_SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    if from_version < 2 {
        backfill_v1(&mut record);
    }

    let mut persona: Persona = serde_json::from_value(Value::Object(record))?;
    persona.skills.clamp();

    Ok(Migrated {
        persona,
        from_version,
    })
}

/// v1 -> v2: add the resource pools and gold with their starting values.
fn backfill_v1(record: &mut Map<String, Value>) {
    let defaults = [
        ("health", DEFAULT_MAX_HEALTH),
        ("maxHealth", DEFAULT_MAX_HEALTH),
        ("mana", DEFAULT_MAX_MANA),
        ("maxMana", DEFAULT_MAX_MANA),
        ("gold", STARTING_GOLD),
    ];
    for (field, default) in defaults {
        let slot = record.entry(field).or_insert(Value::Null);
        if slot.is_null() {
            *slot = Value::from(default);
        }
    }
}

/// Serialize a persona as a current-version record.
pub fn encode(persona: &Persona) -> Result<String, StoreError> {
    let mut value = serde_json::to_value(persona)?;
    if let Value::Object(record) = &mut value {
        record.insert(
            VERSION_FIELD.to_string(),
            Value::from(CURRENT_SCHEMA_VERSION),
        );
    }
    Ok(serde_json::to_string(&value)?)
}
