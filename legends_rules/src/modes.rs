//! Game modes and level gating.

use serde::{Deserialize, Serialize};

use crate::mechanics::{DifficultyTier, QuestType};

/// A selectable game mode on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// 1-8, shown as stars.
    pub difficulty: u32,
    /// Advertised reward. Not consulted by the reward computation.
    pub xp_reward: u32,
    /// Advertised reward. Not consulted by the reward computation.
    pub gold_reward: u32,
    pub required_level: u32,
    pub quest_type: QuestType,
}

impl GameMode {
    /// A mode is selectable once the persona reaches its required level.
    pub fn is_selectable(&self, level: u32) -> bool {
        level >= self.required_level
    }

    pub fn difficulty_tier(&self) -> DifficultyTier {
        DifficultyTier::for_difficulty(self.difficulty)
    }
}

/// A mode together with whether it can currently be chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeAvailability<'a> {
    pub mode: &'a GameMode,
    pub selectable: bool,
}

/// Evaluate gating for every mode at the given level. Nothing is cached.
pub fn mode_availability(modes: &[GameMode], level: u32) -> Vec<ModeAvailability<'_>> {
    modes
        .iter()
        .map(|mode| ModeAvailability {
            mode,
            selectable: mode.is_selectable(level),
        })
        .collect()
}

/// Only the modes selectable at the given level.
pub fn selectable_modes(modes: &[GameMode], level: u32) -> impl Iterator<Item = &GameMode> {
    modes.iter().filter(move |mode| mode.is_selectable(level))
}

#[allow(clippy::too_many_arguments)]
fn mode(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    difficulty: u32,
    xp_reward: u32,
    gold_reward: u32,
    required_level: u32,
    quest_type: QuestType,
) -> GameMode {
    GameMode {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        difficulty,
        xp_reward,
        gold_reward,
        required_level,
        quest_type,
    }
}

/// The six modes offered on the dashboard.
pub fn default_modes() -> Vec<GameMode> {
    vec![
        mode(
            "courtroom",
            "The Crimson Courtroom",
            "Face the Shadow Judge in trials that test your very soul. Each case is a battle \
                for justice in the darkest corners of law.",
            "\u{2696}\u{FE0F}",
            4,
            250,
            50,
            1,
            QuestType::Story,
        ),
        mode(
            "negotiation",
            "Devil's Bargain Arena",
            "Enter the realm where words are weapons and contracts are forged in shadow. Master \
                the art of dark negotiation.",
            "\u{1F91D}",
            3,
            200,
            40,
            1,
            QuestType::Challenge,
        ),
        mode(
            "research",
            "Forbidden Library",
            "Delve into ancient tomes and cursed precedents. Uncover secrets that lesser \
                lawyers fear to seek.",
            "\u{1F4DA}",
            2,
            150,
            30,
            1,
            QuestType::Story,
        ),
        mode(
            "challenges",
            "Trial by Fire",
            "Face the ultimate tests of legal prowess. Only the worthy shall emerge victorious \
                from these burning challenges.",
            "\u{1F525}",
            5,
            300,
            75,
            3,
            QuestType::Challenge,
        ),
        mode(
            "ethics",
            "The Moral Abyss",
            "Navigate the treacherous waters of ethical dilemmas where right and wrong blur \
                into shadow.",
            "\u{26A1}",
            6,
            400,
            100,
            5,
            QuestType::Story,
        ),
        mode(
            "masterclass",
            "The Final Judgment",
            "Face the ultimate boss battle. The Dark Lord of Law awaits only the most legendary \
                champions.",
            "\u{1F451}",
            8,
            500,
            200,
            10,
            QuestType::Boss,
        ),
    ]
}
