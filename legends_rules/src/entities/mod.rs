//! Entity definitions: the player persona and its parts.

mod components;
mod persona;

pub use components::*;
pub use persona::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a persona.
///
/// Stored as text so records written by older clients (which used
/// timestamp strings) keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaId(pub String);

impl PersonaId {
    /// Create a new random persona ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PersonaId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The legal practice area a persona specializes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    Corporate,
    Criminal,
    Civil,
    Family,
    Immigration,
}

impl Specialization {
    pub const ALL: [Specialization; 5] = [
        Specialization::Corporate,
        Specialization::Criminal,
        Specialization::Civil,
        Specialization::Family,
        Specialization::Immigration,
    ];

    /// The in-game class title shown next to the persona's name.
    pub fn title(&self) -> &'static str {
        match self {
            Specialization::Corporate => "Corporate Warlock",
            Specialization::Criminal => "Shadow Defender",
            Specialization::Civil => "Court Paladin",
            Specialization::Family => "Harmony Sage",
            Specialization::Immigration => "Border Mystic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Specialization::Corporate => "Master of dark contracts and corporate sorcery",
            Specialization::Criminal => "Warrior of justice in the criminal underworld",
            Specialization::Civil => "Noble protector of civil rights and liberties",
            Specialization::Family => "Wise mediator of family disputes and bonds",
            Specialization::Immigration => "Guide souls across legal boundaries",
        }
    }
}

impl std::fmt::Display for Specialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Specialization::Corporate => "Corporate",
            Specialization::Criminal => "Criminal",
            Specialization::Civil => "Civil",
            Specialization::Family => "Family",
            Specialization::Immigration => "Immigration",
        };
        write!(f, "{}", name)
    }
}

/// Avatar glyphs offered at persona creation. The first one is the default.
pub const AVATAR_GLYPHS: [&str; 8] = [
    "\u{1F9D9}\u{200D}\u{2642}\u{FE0F}",
    "\u{1F9D9}\u{200D}\u{2640}\u{FE0F}",
    "\u{2694}\u{FE0F}",
    "\u{1F6E1}\u{FE0F}",
    "\u{1F451}",
    "\u{1F52E}",
    "\u{2696}\u{FE0F}",
    "\u{1F5E1}\u{FE0F}",
];

/// The glyph used when the player does not pick one.
pub fn default_avatar_glyph() -> &'static str {
    AVATAR_GLYPHS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_ids_are_unique() {
        assert_ne!(PersonaId::new(), PersonaId::new());
    }

    #[test]
    fn test_legacy_id_roundtrips_as_plain_string() {
        let id: PersonaId = serde_json::from_str("\"1712345678901\"").unwrap();
        assert_eq!(id.as_str(), "1712345678901");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1712345678901\"");
    }

    #[test]
    fn test_specialization_titles() {
        assert_eq!(Specialization::Corporate.title(), "Corporate Warlock");
        assert_eq!(Specialization::Family.title(), "Harmony Sage");
        assert_eq!(Specialization::ALL.len(), 5);
    }

    #[test]
    fn test_specialization_serializes_by_name() {
        let json = serde_json::to_string(&Specialization::Immigration).unwrap();
        assert_eq!(json, "\"Immigration\"");
    }
}
