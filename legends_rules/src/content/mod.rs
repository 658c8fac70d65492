//! Quest content: scenarios, questions and choices.
//!
//! Content is authored elsewhere and read-only at runtime. The educational
//! metadata on a choice (`ChoiceInsight`) is informational only and never
//! feeds into scoring.

mod catalog;
mod insight;

pub use catalog::*;
pub use insight::*;

use serde::{Deserialize, Serialize};

use crate::entities::SkillKind;
use crate::mechanics::{Consequence, Verdict};

/// Positional label for the choice at `index` (A, B, C, ...).
pub fn choice_label(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| (b'A' + i) as char)
}

/// Index of the choice carrying `label`, case-insensitive.
pub fn label_index(label: char) -> Option<usize> {
    let upper = label.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}

/// One playable scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub introduction: String,
    pub questions: Vec<Question>,
    pub success_outcome: String,
    pub failure_outcome: String,
    /// Minimum correct answers needed to pass.
    pub min_correct_answers: u32,
}

impl Scenario {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Narrative shown for the given verdict.
    pub fn outcome_text(&self, verdict: Verdict) -> &str {
        match verdict {
            Verdict::Success => &self.success_outcome,
            Verdict::Failure => &self.failure_outcome,
        }
    }
}

/// A single multiple-choice question. Choice order is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub title: String,
    /// Fact pattern the question is set in.
    #[serde(rename = "scenario")]
    pub setting: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub skill_focus: SkillKind,
    pub choices: Vec<Choice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practical_importance: Option<String>,
}

impl Question {
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    pub fn choice_by_label(&self, label: char) -> Option<&Choice> {
        label_index(label).and_then(|i| self.choices.get(i))
    }

    /// Choices paired with their positional labels.
    pub fn labeled_choices(&self) -> impl Iterator<Item = (char, &Choice)> {
        self.choices
            .iter()
            .enumerate()
            .filter_map(|(i, c)| choice_label(i).map(|label| (label, c)))
    }

    /// Marked high-impact in the UI when practical importance is given.
    pub fn is_high_impact(&self) -> bool {
        self.practical_importance.is_some()
    }
}

/// One answer option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
    pub xp_gain: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_bonus: Option<SkillKind>,
    pub consequence: Consequence,

    #[serde(flatten)]
    pub insight: ChoiceInsight,
}
