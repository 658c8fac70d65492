//! Component definitions for personas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest value any skill rating can reach.
pub const SKILL_CAP: u32 = 100;

/// Rating every skill starts at for a new persona.
pub const STARTING_SKILL: u32 = 15;

/// The five skill categories a question can focus on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Advocacy,
    Research,
    Negotiation,
    Ethics,
    Drafting,
}

impl SkillKind {
    pub const ALL: [SkillKind; 5] = [
        SkillKind::Advocacy,
        SkillKind::Research,
        SkillKind::Negotiation,
        SkillKind::Ethics,
        SkillKind::Drafting,
    ];

    /// In-game name of the skill.
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillKind::Advocacy => "Blade of Truth",
            SkillKind::Research => "Ancient Wisdom",
            SkillKind::Negotiation => "Silver Tongue",
            SkillKind::Ethics => "Moral Compass",
            SkillKind::Drafting => "Quill of Power",
        }
    }
}

impl std::fmt::Display for SkillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkillKind::Advocacy => "advocacy",
            SkillKind::Research => "research",
            SkillKind::Negotiation => "negotiation",
            SkillKind::Ethics => "ethics",
            SkillKind::Drafting => "drafting",
        };
        write!(f, "{}", name)
    }
}

/// Skill ratings, each kept within `0..=SKILL_CAP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub advocacy: u32,
    pub research: u32,
    pub negotiation: u32,
    pub ethics: u32,
    pub drafting: u32,
}

impl Default for SkillSet {
    fn default() -> Self {
        Self::uniform(STARTING_SKILL)
    }
}

impl SkillSet {
    /// A skill set with every rating at `value` (clamped).
    pub fn uniform(value: u32) -> Self {
        let value = value.min(SKILL_CAP);
        Self {
            advocacy: value,
            research: value,
            negotiation: value,
            ethics: value,
            drafting: value,
        }
    }

    pub fn get(&self, skill: SkillKind) -> u32 {
        match skill {
            SkillKind::Advocacy => self.advocacy,
            SkillKind::Research => self.research,
            SkillKind::Negotiation => self.negotiation,
            SkillKind::Ethics => self.ethics,
            SkillKind::Drafting => self.drafting,
        }
    }

    fn slot_mut(&mut self, skill: SkillKind) -> &mut u32 {
        match skill {
            SkillKind::Advocacy => &mut self.advocacy,
            SkillKind::Research => &mut self.research,
            SkillKind::Negotiation => &mut self.negotiation,
            SkillKind::Ethics => &mut self.ethics,
            SkillKind::Drafting => &mut self.drafting,
        }
    }

    /// Raise a skill by `amount`, saturating at `SKILL_CAP`. Returns the new rating.
    pub fn raise(&mut self, skill: SkillKind, amount: u32) -> u32 {
        let slot = self.slot_mut(skill);
        *slot = slot.saturating_add(amount).min(SKILL_CAP);
        *slot
    }

    /// Clamp every rating into range. Used after loading untrusted records.
    pub fn clamp(&mut self) {
        for skill in SkillKind::ALL {
            let slot = self.slot_mut(skill);
            *slot = (*slot).min(SKILL_CAP);
        }
    }

    /// Iterate skills in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillKind, u32)> + '_ {
        SkillKind::ALL
            .into_iter()
            .map(move |skill| (skill, self.get(skill)))
    }
}

/// Rarity of achievements and artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// An unlocked achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    pub unlocked_at: DateTime<Utc>,
}

/// Kinds of legal artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    Precedent,
    Template,
    Strategy,
    Wisdom,
}

/// A collectible artifact. Modeled for saved records; no mechanic grants one yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub description: String,
    pub rarity: Rarity,
    pub effect: String,
}
