//! The player persona and its creation.

use serde::{Deserialize, Serialize};

use super::{default_avatar_glyph, Achievement, Artifact, PersonaId, SkillSet, Specialization};
use crate::error::{Result, RulesError};

pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_XP_TO_NEXT: u32 = 100;
pub const STARTING_GOLD: u32 = 100;
pub const DEFAULT_MAX_HEALTH: u32 = 100;
pub const DEFAULT_MAX_MANA: u32 = 50;

/// Number of achievements shown in the "recent" list.
pub const RECENT_ACHIEVEMENTS: usize = 3;

/// The player's persistent character record.
///
/// Field names serialize in camelCase to stay compatible with saved records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: PersonaId,
    pub name: String,
    pub specialization: Specialization,
    /// Avatar glyph.
    pub avatar: String,

    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,

    pub skills: SkillSet,

    // Cosmetic resource pools, restored on level-up
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,

    pub gold: u32,

    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl Persona {
    /// Create a persona with the fixed starting values.
    pub fn new(
        name: impl Into<String>,
        specialization: Specialization,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: PersonaId::new(),
            name: name.into(),
            specialization,
            avatar: avatar.into(),
            level: STARTING_LEVEL,
            xp: 0,
            xp_to_next: STARTING_XP_TO_NEXT,
            skills: SkillSet::default(),
            health: DEFAULT_MAX_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
            mana: DEFAULT_MAX_MANA,
            max_mana: DEFAULT_MAX_MANA,
            gold: STARTING_GOLD,
            achievements: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    /// True when enough experience has accumulated for a level-up.
    pub fn level_up_pending(&self) -> bool {
        self.xp >= self.xp_to_next
    }

    /// Fraction of the way to the next level, for progress bars.
    pub fn xp_progress(&self) -> f32 {
        if self.xp_to_next == 0 {
            return 1.0;
        }
        (self.xp as f32 / self.xp_to_next as f32).min(1.0)
    }

    /// Refill health and mana.
    pub fn restore_vitals(&mut self) {
        self.health = self.max_health;
        self.mana = self.max_mana;
    }

    /// Record an achievement. Returns false if one with the same id is already unlocked.
    pub fn unlock_achievement(&mut self, achievement: Achievement) -> bool {
        if self.achievements.iter().any(|a| a.id == achievement.id) {
            return false;
        }
        self.achievements.push(achievement);
        true
    }

    /// The most recently unlocked achievements, newest first.
    pub fn recent_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().rev().take(RECENT_ACHIEVEMENTS)
    }
}

/// Player choices collected on the creation screen.
#[derive(Debug, Clone, Default)]
pub struct PersonaDraft {
    pub name: String,
    pub specialization: Option<Specialization>,
    pub avatar: Option<String>,
}

impl PersonaDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn specialization(mut self, specialization: Specialization) -> Self {
        self.specialization = Some(specialization);
        self
    }

    pub fn avatar(mut self, glyph: impl Into<String>) -> Self {
        self.avatar = Some(glyph.into());
        self
    }

    /// Whether the draft may be submitted.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.specialization.is_some()
    }

    /// Build the starting persona.
    pub fn build(self) -> Result<Persona> {
        if self.name.trim().is_empty() {
            return Err(RulesError::EmptyName);
        }
        let Some(specialization) = self.specialization else {
            return Err(RulesError::MissingSpecialization);
        };
        let avatar = self
            .avatar
            .unwrap_or_else(|| default_avatar_glyph().to_string());

        Ok(Persona::new(self.name, specialization, avatar))
    }
}
