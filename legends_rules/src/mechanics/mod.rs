//! Game mechanics: answer outcomes, verdicts, ranks and rewards.

mod progression;

pub use progression::*;

use serde::{Deserialize, Serialize};

/// Qualitative outcome tag attached to a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consequence {
    Success,
    Failure,
    Neutral,
}

/// Final outcome of a completed quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Success,
    Failure,
}

impl Verdict {
    /// Pass iff the correct-answer count reaches the scenario's threshold.
    pub fn judge(correct_answers: u32, min_correct_answers: u32) -> Self {
        if correct_answers >= min_correct_answers {
            Verdict::Success
        } else {
            Verdict::Failure
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }
}

/// How a game mode is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    Story,
    Challenge,
    Boss,
}

/// Rank label for a skill rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillRank {
    Novice,
    Apprentice,
    Adept,
    Master,
}

impl SkillRank {
    pub fn for_rating(value: u32) -> Self {
        if value >= 80 {
            SkillRank::Master
        } else if value >= 60 {
            SkillRank::Adept
        } else if value >= 40 {
            SkillRank::Apprentice
        } else {
            SkillRank::Novice
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillRank::Novice => "NOVICE",
            SkillRank::Apprentice => "APPRENTICE",
            SkillRank::Adept => "ADEPT",
            SkillRank::Master => "MASTER",
        }
    }
}

/// Tier label for a mode's difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DifficultyTier {
    Novice,
    Adept,
    Master,
    Legendary,
}

impl DifficultyTier {
    pub fn for_difficulty(difficulty: u32) -> Self {
        match difficulty {
            0..=2 => DifficultyTier::Novice,
            3..=4 => DifficultyTier::Adept,
            5..=6 => DifficultyTier::Master,
            _ => DifficultyTier::Legendary,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyTier::Novice => "NOVICE",
            DifficultyTier::Adept => "ADEPT",
            DifficultyTier::Master => "MASTER",
            DifficultyTier::Legendary => "LEGENDARY",
        }
    }
}

/// Flat gold awarded per answer, independent of the choice's xp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerGold {
    pub correct_answer_gold: u32,
    pub incorrect_answer_gold: u32,
}

impl Default for AnswerGold {
    fn default() -> Self {
        Self {
            correct_answer_gold: 10,
            incorrect_answer_gold: 5,
        }
    }
}

impl AnswerGold {
    pub fn for_answer(&self, is_correct: bool) -> u32 {
        if is_correct {
            self.correct_answer_gold
        } else {
            self.incorrect_answer_gold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_threshold() {
        assert_eq!(Verdict::judge(3, 3), Verdict::Success);
        assert_eq!(Verdict::judge(2, 3), Verdict::Failure);
        assert_eq!(Verdict::judge(0, 0), Verdict::Success);
    }

    #[test]
    fn test_skill_ranks() {
        assert_eq!(SkillRank::for_rating(15).label(), "NOVICE");
        assert_eq!(SkillRank::for_rating(40).label(), "APPRENTICE");
        assert_eq!(SkillRank::for_rating(60).label(), "ADEPT");
        assert_eq!(SkillRank::for_rating(79), SkillRank::Adept);
        assert_eq!(SkillRank::for_rating(100), SkillRank::Master);
    }

    #[test]
    fn test_difficulty_tiers() {
        assert_eq!(DifficultyTier::for_difficulty(2).label(), "NOVICE");
        assert_eq!(DifficultyTier::for_difficulty(4).label(), "ADEPT");
        assert_eq!(DifficultyTier::for_difficulty(6).label(), "MASTER");
        assert_eq!(DifficultyTier::for_difficulty(8).label(), "LEGENDARY");
    }

    #[test]
    fn test_answer_gold_defaults() {
        let gold = AnswerGold::default();
        assert_eq!(gold.for_answer(true), 10);
        assert_eq!(gold.for_answer(false), 5);
    }

    #[test]
    fn test_consequence_serde() {
        let c: Consequence = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(c, Consequence::Neutral);
    }
}
