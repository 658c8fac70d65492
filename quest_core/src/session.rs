//! Session controller - owns the persona and routes player actions.

use legends_rules::{
    apply_quest_rewards, default_modes, leaderboard, mode_availability, ContentCatalog, GameConfig,
    GameMode, LeaderboardEntry, ModeAvailability, Persona, PersonaDraft, Scenario,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::error::{SessionError, StoreError};
use crate::events::SessionEvent;
use crate::machine::{QuestMachine, QuestOutcome, QuestSignal};
use crate::store::{PersonaRepository, PersonaStore, CURRENT_SCHEMA_VERSION};
use crate::timer::{Clock, SystemClock};

/// Which screen the player is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Creation,
    Dashboard,
    Quest { mode_id: String },
}

/// One player's session: exactly one persona and at most one active quest.
pub struct GameSession<S> {
    config: GameConfig,
    catalog: Arc<ContentCatalog>,
    modes: Vec<GameMode>,
    repository: PersonaRepository<S>,
    persona: Option<Persona>,
    screen: Screen,
    selected_mode: Option<GameMode>,
    machine: Option<QuestMachine>,
    /// Schema version of a saved record too new to read. It is never overwritten.
    newer_record: Option<u64>,
    clock: Box<dyn Clock>,
    rng: StdRng,
    events: VecDeque<SessionEvent>,
}

impl<S: PersonaStore> GameSession<S> {
    /// Open a session, loading any saved persona from `store`.
    ///
    /// A record that cannot be read is logged and treated as absent. A record
    /// written by a newer schema is kept: persona creation is refused rather
    /// than replacing it.
    pub fn open(store: S, catalog: Arc<ContentCatalog>, config: GameConfig) -> Self {
        let repository = PersonaRepository::new(store, config.storage.persona_key.clone());
        let mut newer_record = None;
        let persona = match repository.load() {
            Ok(persona) => persona,
            Err(StoreError::UnsupportedVersion { found, supported }) => {
                error!(
                    key = %repository.key(),
                    found,
                    supported,
                    "saved persona comes from a newer version; leaving it untouched"
                );
                newer_record = Some(found);
                None
            }
            Err(e) => {
                warn!(
                    key = %repository.key(),
                    error = %e,
                    "could not load saved persona; starting fresh"
                );
                None
            }
        };
        let screen = if persona.is_some() {
            Screen::Dashboard
        } else {
            Screen::Creation
        };
        if let Some(persona) = &persona {
            info!(persona = %persona.id, level = persona.level, "persona loaded");
        }

        Self {
            config,
            catalog,
            modes: default_modes(),
            repository,
            persona,
            screen,
            selected_mode: None,
            machine: None,
            newer_record,
            clock: Box::new(SystemClock),
            rng: StdRng::from_entropy(),
            events: VecDeque::new(),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the random source used for skill growth.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Replace the mode list.
    pub fn with_modes(mut self, modes: Vec<GameMode>) -> Self {
        self.modes = modes;
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn persona(&self) -> Option<&Persona> {
        self.persona.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn repository(&self) -> &PersonaRepository<S> {
        &self.repository
    }

    pub fn selected_mode(&self) -> Option<&GameMode> {
        self.selected_mode.as_ref()
    }

    /// The active quest machine, while in a mode.
    pub fn quest(&self) -> Option<&QuestMachine> {
        self.machine.as_ref()
    }

    /// Hand queued events to the caller.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    /// Create (or replace) the persona.
    pub fn create_persona(&mut self, draft: PersonaDraft) -> Result<&Persona, SessionError> {
        if let Some(found) = self.newer_record {
            return Err(SessionError::Store(StoreError::UnsupportedVersion {
                found,
                supported: CURRENT_SCHEMA_VERSION,
            }));
        }
        let persona = draft.build()?;
        info!(persona = %persona.id, specialization = %persona.specialization, "persona created");

        self.persist(&persona);
        self.emit(SessionEvent::AvatarCreated(persona.clone()));
        self.machine = None;
        self.selected_mode = None;
        self.screen = Screen::Dashboard;
        Ok(self.persona.insert(persona))
    }

    /// Every mode with its selectability at the persona's current level.
    pub fn modes(&self) -> Vec<ModeAvailability<'_>> {
        let level = self.persona.as_ref().map_or(0, |p| p.level);
        mode_availability(&self.modes, level)
    }

    /// Enter a mode if the persona's level allows it. Only allowed from the
    /// dashboard, so a running quest and its pending rewards are never dropped.
    pub fn select_mode(&mut self, mode_id: &str) -> Result<&GameMode, SessionError> {
        let persona = self.persona.as_ref().ok_or(SessionError::NoPersona)?;
        if self.screen != Screen::Dashboard {
            debug!(
                mode = %mode_id,
                screen = ?self.screen,
                "select_mode refused outside the dashboard"
            );
            return Err(SessionError::NotOnDashboard);
        }
        let mode = self
            .modes
            .iter()
            .find(|m| m.id == mode_id)
            .ok_or_else(|| SessionError::UnknownMode(mode_id.to_string()))?;
        if !mode.is_selectable(persona.level) {
            return Err(SessionError::ModeLocked {
                mode: mode.id.clone(),
                required: mode.required_level,
                level: persona.level,
            });
        }

        let mode = mode.clone();
        info!(mode = %mode.id, "mode selected");
        self.emit(SessionEvent::ModeSelected(mode.clone()));
        self.machine = Some(QuestMachine::from_config(&self.config));
        self.screen = Screen::Quest {
            mode_id: mode.id.clone(),
        };
        Ok(self.selected_mode.insert(mode))
    }

    /// Scenarios offered in the selected mode.
    pub fn scenarios(&self) -> &[Arc<Scenario>] {
        match &self.selected_mode {
            Some(mode) => self.catalog.scenarios_for(&mode.id),
            None => &[],
        }
    }

    /// Start a scenario of the selected mode.
    pub fn start_quest(&mut self, scenario_id: &str) -> Result<bool, SessionError> {
        let Some(mode) = self.selected_mode.as_ref() else {
            return Err(SessionError::NoModeSelected);
        };
        let scenario = self
            .catalog
            .find_scenario(&mode.id, scenario_id)
            .ok_or_else(|| SessionError::UnknownScenario {
                mode: mode.id.clone(),
                scenario: scenario_id.to_string(),
            })?;
        Ok(self
            .machine
            .as_mut()
            .map_or(false, |machine| machine.start_quest(scenario)))
    }

    pub fn submit_choice(&mut self, choice_id: &str) -> bool {
        let now = self.clock.now();
        self.machine
            .as_mut()
            .map_or(false, |machine| machine.submit_choice(choice_id, now))
    }

    pub fn submit_label(&mut self, label: char) -> bool {
        let now = self.clock.now();
        self.machine
            .as_mut()
            .map_or(false, |machine| machine.submit_label(label, now))
    }

    pub fn can_continue(&self) -> bool {
        let now = self.clock.now();
        self.machine
            .as_ref()
            .map_or(false, |machine| machine.can_continue(now))
    }

    pub fn continue_quest(&mut self) -> bool {
        let now = self.clock.now();
        self.machine
            .as_mut()
            .map_or(false, |machine| machine.continue_quest(now))
    }

    /// Advance timers. Call from the host's event loop.
    ///
    /// When the post-verdict delay elapses, the quest's rewards are applied to
    /// the persona, the persona is saved and the player returns to the dashboard.
    pub fn tick(&mut self) -> Option<QuestSignal> {
        let now = self.clock.now();
        let signal = self.machine.as_mut()?.tick(now)?;
        if let QuestSignal::RewardsReady(outcome) = &signal {
            self.complete_quest(outcome);
        }
        Some(signal)
    }

    /// Leave the current quest, discarding its progress. Stays in the mode.
    pub fn abandon_quest(&mut self) -> bool {
        self.machine
            .as_mut()
            .map_or(false, QuestMachine::abandon_quest)
    }

    /// Leave the mode and return to the dashboard.
    pub fn back_to_dashboard(&mut self) -> bool {
        if !matches!(self.screen, Screen::Quest { .. }) {
            debug!(screen = ?self.screen, "back_to_dashboard ignored outside a mode");
            return false;
        }
        if let Some(mut machine) = self.machine.take() {
            machine.abandon_quest();
        }
        self.selected_mode = None;
        self.screen = Screen::Dashboard;
        self.emit(SessionEvent::BackToDashboard);
        true
    }

    /// The Hall of Legends with the current persona ranked in.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.persona.as_ref().map(leaderboard).unwrap_or_default()
    }

    fn complete_quest(&mut self, outcome: &QuestOutcome) {
        let rewards = outcome.rewards();
        let level_up = match self.persona.as_mut() {
            Some(persona) => apply_quest_rewards(persona, rewards, &mut self.rng),
            None => {
                warn!(
                    scenario = %outcome.scenario_id,
                    "quest completed without a persona; rewards dropped"
                );
                None
            }
        };
        if let Some(persona) = self.persona.clone() {
            self.persist(&persona);
        }

        info!(
            scenario = %outcome.scenario_id,
            verdict = ?outcome.verdict,
            xp = rewards.xp,
            gold = rewards.gold,
            "quest rewards applied"
        );
        self.emit(SessionEvent::QuestCompleted {
            scenario_id: outcome.scenario_id.clone(),
            verdict: outcome.verdict,
            xp_gained: rewards.xp,
            gold_gained: rewards.gold,
            level_up,
        });
        self.machine = None;
        self.selected_mode = None;
        self.screen = Screen::Dashboard;
    }

    fn emit(&mut self, event: SessionEvent) {
        debug!(event = event.name(), "session event");
        self.events.push_back(event);
    }

    /// Fire-and-forget save.
    fn persist(&mut self, persona: &Persona) {
        if let Err(e) = self.repository.save(persona) {
            warn!(persona = %persona.id, error = %e, "failed to save persona");
        }
    }
}
