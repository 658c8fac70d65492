//! Events handed back to the surrounding UI and navigation layer.

use legends_rules::{GameMode, LevelUp, Persona, Verdict};

/// Points where the engine returns control to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A new persona was created and saved.
    AvatarCreated(Persona),

    /// The player entered a game mode.
    ModeSelected(GameMode),

    /// A quest finished and its rewards were applied to the persona.
    QuestCompleted {
        scenario_id: String,
        verdict: Verdict,
        xp_gained: u32,
        gold_gained: u32,
        level_up: Option<LevelUp>,
    },

    /// The player left a mode without finishing a quest.
    BackToDashboard,
}

impl SessionEvent {
    /// Short name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::AvatarCreated(_) => "avatar_created",
            SessionEvent::ModeSelected(_) => "mode_selected",
            SessionEvent::QuestCompleted { .. } => "quest_completed",
            SessionEvent::BackToDashboard => "back_to_dashboard",
        }
    }
}
