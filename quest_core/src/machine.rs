//! Quest state machine - drives one scenario attempt from start to verdict.
//!
//! ```text
//! Selecting -> AwaitingChoice -> ShowingResult -+-> AwaitingChoice (next question)
//!                                               +-> Completed -> (rewards handed off) -> Selecting
//! ```
//!
//! Every operation called outside its phase is a silent no-op that returns
//! `false`, so stray UI events such as a double click cannot corrupt progress.

use chrono::{DateTime, Utc};
use legends_rules::{
    AnswerGold, Choice, GameConfig, PacingConfig, QuestRewards, Question, Scenario, Verdict,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::progress::QuestProgress;
use crate::timer::{DisplayTimer, TimerKind};

/// Feedback for the answer currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_id: String,
    pub choice_id: String,
    pub is_correct: bool,
    pub xp_gained: u32,
    pub gold_gained: u32,
}

/// Where the quest currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestPhase {
    /// No scenario chosen.
    Selecting,
    /// A question is displayed and unanswered.
    AwaitingChoice,
    /// An answer was submitted; continuing opens once the reveal timer fires.
    ShowingResult {
        feedback: AnswerFeedback,
        can_continue: bool,
    },
    /// Terminal for this attempt; rewards are released when the return timer fires.
    Completed { verdict: Verdict },
}

/// Final result of a quest, handed to the progression engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestOutcome {
    pub scenario_id: String,
    pub verdict: Verdict,
    pub progress: QuestProgress,
}

impl QuestOutcome {
    pub fn rewards(&self) -> QuestRewards {
        self.progress.rewards()
    }
}

/// Emitted by `tick` when a timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestSignal {
    ContinueAvailable,
    RewardsReady(QuestOutcome),
}

/// The quest state machine. Owns the progress of the active attempt.
#[derive(Debug, Clone)]
pub struct QuestMachine {
    pacing: PacingConfig,
    gold: AnswerGold,
    scenario: Option<Arc<Scenario>>,
    progress: Option<QuestProgress>,
    phase: QuestPhase,
    timer: Option<DisplayTimer>,
}

impl QuestMachine {
    pub fn new(pacing: PacingConfig, gold: AnswerGold) -> Self {
        Self {
            pacing,
            gold,
            scenario: None,
            progress: None,
            phase: QuestPhase::Selecting,
            timer: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.pacing, config.rewards)
    }

    pub fn phase(&self) -> &QuestPhase {
        &self.phase
    }

    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_deref()
    }

    pub fn progress(&self) -> Option<&QuestProgress> {
        self.progress.as_ref()
    }

    /// The pending timer, if any.
    pub fn pending_timer(&self) -> Option<&DisplayTimer> {
        self.timer.as_ref()
    }

    /// The question at the current index.
    pub fn current_question(&self) -> Option<&Question> {
        let index = self.progress.as_ref()?.current_question_index;
        self.scenario.as_ref()?.question(index)
    }

    /// True when the current question is the scenario's last.
    pub fn is_last_question(&self) -> bool {
        match (&self.scenario, &self.progress) {
            (Some(scenario), Some(progress)) => {
                progress.current_question_index + 1 >= scenario.total_questions()
            }
            _ => false,
        }
    }

    /// Correct answers over questions answered so far.
    pub fn score(&self) -> (u32, usize) {
        self.progress
            .as_ref()
            .map_or((0, 0), |p| (p.correct_answers, p.answered_count()))
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            QuestPhase::Completed { verdict } => Some(verdict),
            _ => None,
        }
    }

    /// The success or failure narrative once completed.
    pub fn outcome_text(&self) -> Option<&str> {
        let verdict = self.verdict()?;
        self.scenario.as_ref().map(|s| s.outcome_text(verdict))
    }

    /// The choice whose result is on screen, with its educational metadata.
    pub fn feedback_choice(&self) -> Option<&Choice> {
        match &self.phase {
            QuestPhase::ShowingResult { feedback, .. } => self
                .current_question()
                .and_then(|q| q.choice(&feedback.choice_id)),
            _ => None,
        }
    }

    /// Begin an attempt at `scenario`. Only valid while selecting.
    pub fn start_quest(&mut self, scenario: Arc<Scenario>) -> bool {
        if self.phase != QuestPhase::Selecting {
            debug!(phase = ?self.phase, "start_quest ignored outside selection");
            return false;
        }
        if scenario.questions.is_empty() {
            debug!(scenario = %scenario.id, "start_quest ignored for scenario without questions");
            return false;
        }

        info!(
            scenario = %scenario.id,
            questions = scenario.total_questions(),
            min_correct = scenario.min_correct_answers,
            "quest started"
        );
        self.scenario = Some(scenario);
        self.progress = Some(QuestProgress::new());
        self.timer = None;
        self.phase = QuestPhase::AwaitingChoice;
        true
    }

    /// Answer the current question with the choice identified by `choice_id`.
    pub fn submit_choice(&mut self, choice_id: &str, now: DateTime<Utc>) -> bool {
        if self.phase != QuestPhase::AwaitingChoice {
            debug!(
                choice = %choice_id,
                phase = ?self.phase,
                "submit_choice ignored outside AwaitingChoice"
            );
            return false;
        }
        let Some(scenario) = self.scenario.as_ref() else {
            return false;
        };
        let Some(progress) = self.progress.as_mut() else {
            return false;
        };
        let Some(question) = scenario.question(progress.current_question_index) else {
            return false;
        };
        let Some(choice) = question.choice(choice_id) else {
            debug!(
                question = %question.id,
                choice = %choice_id,
                "submit_choice ignored for unknown choice"
            );
            return false;
        };

        let gold = self.gold.for_answer(choice.is_correct);
        let record = progress.record_answer(&question.id, choice, gold);
        let feedback = AnswerFeedback {
            question_id: record.question_id.clone(),
            choice_id: record.choice_id.clone(),
            is_correct: record.was_correct,
            xp_gained: record.xp_gained,
            gold_gained: gold,
        };
        debug!(
            question = %feedback.question_id,
            choice = %feedback.choice_id,
            correct = feedback.is_correct,
            xp = feedback.xp_gained,
            gold = feedback.gold_gained,
            "choice submitted"
        );

        self.phase = QuestPhase::ShowingResult {
            feedback,
            can_continue: false,
        };
        self.timer = Some(DisplayTimer::schedule(
            TimerKind::RevealContinue,
            now,
            self.pacing.result_reveal(),
        ));
        true
    }

    /// Answer by positional label (A, B, C, ...).
    pub fn submit_label(&mut self, label: char, now: DateTime<Utc>) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        let choice_id = match question.choice_by_label(label) {
            Some(choice) => choice.id.clone(),
            None => {
                debug!(label = %label, "submit_label ignored for unknown label");
                return false;
            }
        };
        self.submit_choice(&choice_id, now)
    }

    /// Whether "continue" is available at `now`.
    pub fn can_continue(&self, now: DateTime<Utc>) -> bool {
        match &self.phase {
            QuestPhase::ShowingResult { can_continue, .. } => {
                *can_continue || self.timer_due(TimerKind::RevealContinue, now)
            }
            _ => false,
        }
    }

    /// Move past the result screen, to the next question or the verdict.
    pub fn continue_quest(&mut self, now: DateTime<Utc>) -> bool {
        if !self.can_continue(now) {
            debug!(phase = ?self.phase, "continue_quest ignored; continuation not open");
            return false;
        }
        let Some(scenario) = self.scenario.as_ref() else {
            return false;
        };
        let Some(progress) = self.progress.as_mut() else {
            return false;
        };
        self.timer = None;

        if progress.current_question_index + 1 < scenario.total_questions() {
            progress.current_question_index += 1;
            self.phase = QuestPhase::AwaitingChoice;
            return true;
        }

        let verdict = Verdict::judge(progress.correct_answers, scenario.min_correct_answers);
        info!(
            scenario = %scenario.id,
            correct = progress.correct_answers,
            required = scenario.min_correct_answers,
            verdict = ?verdict,
            "quest completed"
        );
        self.phase = QuestPhase::Completed { verdict };
        self.timer = Some(DisplayTimer::schedule(
            TimerKind::ReturnToDashboard,
            now,
            self.pacing.completion_return(),
        ));
        true
    }

    /// Fire the pending timer if its deadline has passed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<QuestSignal> {
        let timer = self.timer.filter(|t| t.is_due(now))?;
        self.timer = None;

        match (timer.kind, &mut self.phase) {
            (TimerKind::RevealContinue, QuestPhase::ShowingResult { can_continue, .. }) => {
                *can_continue = true;
                Some(QuestSignal::ContinueAvailable)
            }
            (TimerKind::ReturnToDashboard, QuestPhase::Completed { verdict }) => {
                let verdict = *verdict;
                let progress = self.progress.take().unwrap_or_default();
                let scenario_id = self
                    .scenario
                    .take()
                    .map(|s| s.id.clone())
                    .unwrap_or_default();
                self.phase = QuestPhase::Selecting;
                Some(QuestSignal::RewardsReady(QuestOutcome {
                    scenario_id,
                    verdict,
                    progress,
                }))
            }
            (kind, phase) => {
                debug!(?kind, ?phase, "timer fired in unexpected phase; dropped");
                None
            }
        }
    }

    /// Drop any pending timer without changing phase.
    fn cancel_timers(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!(kind = ?timer.kind, "timer cancelled");
        }
    }

    /// Leave the quest, discarding its progress. Returns false if no quest was active.
    pub fn abandon_quest(&mut self) -> bool {
        if self.phase == QuestPhase::Selecting {
            return false;
        }
        self.cancel_timers();
        if let Some(scenario) = self.scenario.take() {
            info!(scenario = %scenario.id, "quest abandoned");
        }
        self.progress = None;
        self.phase = QuestPhase::Selecting;
        true
    }

    fn timer_due(&self, kind: TimerKind, now: DateTime<Utc>) -> bool {
        self.timer.is_some_and(|t| t.kind == kind && t.is_due(now))
    }
}
