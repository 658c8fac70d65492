//! Quest progress - the run-time record of a single scenario attempt.

use legends_rules::{Choice, QuestRewards};
use serde::{Deserialize, Serialize};

/// Outcome of one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    pub choice_id: String,
    pub was_correct: bool,
    pub xp_gained: u32,
}

/// Cumulative state of a quest attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestProgress {
    /// 0-based, only ever increases.
    pub current_question_index: usize,
    pub correct_answers: u32,
    pub total_xp_gained: u32,
    pub total_gold_gained: u32,
    /// Append-only.
    pub answered_questions: Vec<AnswerRecord>,
}

impl QuestProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one answer into the totals.
    ///
    /// Purely additive: the tracker does not stop the same question from
    /// being recorded twice, that is the state machine's job.
    pub fn record_answer(
        &mut self,
        question_id: &str,
        choice: &Choice,
        gold: u32,
    ) -> &AnswerRecord {
        if choice.is_correct {
            self.correct_answers += 1;
        }
        self.total_xp_gained = self.total_xp_gained.saturating_add(choice.xp_gain);
        self.total_gold_gained = self.total_gold_gained.saturating_add(gold);

        self.answered_questions.push(AnswerRecord {
            question_id: question_id.to_string(),
            choice_id: choice.id.clone(),
            was_correct: choice.is_correct,
            xp_gained: choice.xp_gain,
        });
        &self.answered_questions[self.answered_questions.len() - 1]
    }

    pub fn answered_count(&self) -> usize {
        self.answered_questions.len()
    }

    /// Aggregate rewards handed to the progression engine.
    pub fn rewards(&self) -> QuestRewards {
        QuestRewards::new(self.total_xp_gained, self.total_gold_gained)
    }

    /// Fraction of questions already behind the player, for progress bars.
    pub fn completion_ratio(&self, total_questions: usize) -> f32 {
        if total_questions == 0 {
            return 1.0;
        }
        self.current_question_index as f32 / total_questions as f32
    }
}
