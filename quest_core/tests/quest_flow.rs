//! End-to-end quest flows through the session controller.

use legends_rules::{ContentCatalog, GameConfig, PersonaDraft, Specialization, Verdict};
use quest_core::{
    FileStore, GameSession, ManualClock, MemoryStore, PersonaStore, QuestPhase, QuestSignal, Screen,
    SessionError, SessionEvent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;

fn open<S: PersonaStore>(store: S, config: GameConfig) -> (GameSession<S>, ManualClock) {
    let clock = ManualClock::at_epoch();
    let catalog = Arc::new(ContentCatalog::bundled().unwrap());
    let session = GameSession::open(store, catalog, config)
        .with_clock(clock.clone())
        .with_rng(StdRng::seed_from_u64(2024));
    (session, clock)
}

fn portia(specialization: Specialization) -> PersonaDraft {
    PersonaDraft::new("Portia").specialization(specialization)
}

/// Answer, wait out the reveal delay and continue.
fn answer<S: PersonaStore>(session: &mut GameSession<S>, clock: &ManualClock, choice_id: &str) {
    assert!(
        session.submit_choice(choice_id),
        "choice {} rejected",
        choice_id
    );
    assert!(!session.can_continue());
    clock.advance(Duration::from_millis(1500));
    assert_eq!(session.tick(), Some(QuestSignal::ContinueAvailable));
    assert!(session.continue_quest());
}

#[test]
fn test_failed_courtroom_quest_still_pays_out() {
    let (mut session, clock) = open(MemoryStore::new(), GameConfig::default());
    session
        .create_persona(portia(Specialization::Corporate))
        .unwrap();
    session.select_mode("courtroom").unwrap();
    assert!(session.start_quest("contract-unconscionability").unwrap());

    // Two of five correct against a threshold of three
    for choice in [
        "unconscionability",
        "procedural",
        "void-entire-contract",
        "recommend-rejection",
        "distinguish-different-context",
    ] {
        answer(&mut session, &clock, choice);
    }

    let quest = session.quest().unwrap();
    assert_eq!(quest.verdict(), Some(Verdict::Failure));
    assert_eq!(quest.score(), (2, 5));
    assert_eq!(quest.progress().unwrap().total_xp_gained, 245);
    assert_eq!(quest.progress().unwrap().total_gold_gained, 35);

    // Nothing is applied before the return delay
    clock.advance(Duration::from_millis(3999));
    assert_eq!(session.tick(), None);
    assert_eq!(session.persona().unwrap().xp, 0);

    clock.advance(Duration::from_millis(1));
    let Some(QuestSignal::RewardsReady(outcome)) = session.tick() else {
        panic!("rewards were not released");
    };
    assert_eq!(outcome.verdict, Verdict::Failure);

    let persona = session.persona().unwrap();
    assert_eq!(persona.level, 2);
    assert_eq!(persona.xp, 145);
    assert_eq!(persona.xp_to_next, 300);
    assert_eq!(persona.gold, 135);
    assert!(persona.skills.iter().all(|(_, v)| (17..=24).contains(&v)));
    assert_eq!(session.screen(), &Screen::Dashboard);

    let names: Vec<_> = session
        .drain_events()
        .iter()
        .map(SessionEvent::name)
        .collect();
    assert_eq!(
        names,
        vec!["avatar_created", "mode_selected", "quest_completed"]
    );
}

#[test]
fn test_operations_out_of_order_do_not_corrupt_progress() {
    let (mut session, clock) = open(MemoryStore::new(), GameConfig::default());
    session
        .create_persona(portia(Specialization::Civil))
        .unwrap();
    assert!(!session.submit_choice("ca-supreme-court"));
    assert!(!session.continue_quest());

    session.select_mode("research").unwrap();
    assert!(!session.submit_choice("ca-supreme-court"));
    session.start_quest("forbidden-precedent-analysis").unwrap();

    assert!(session.submit_choice("ninth-circuit"));
    assert!(!session.submit_choice("ca-supreme-court"));
    let restarted = session.start_quest("forbidden-precedent-analysis").unwrap();
    assert!(!restarted);

    let progress = session.quest().unwrap().progress().unwrap();
    assert_eq!(progress.answered_count(), 1);
    assert_eq!(progress.correct_answers, 0);
    assert_eq!(progress.total_gold_gained, 5);

    // The reveal deadline passed without a tick; continuing still works
    clock.advance(Duration::from_secs(2));
    assert!(session.continue_quest());
    assert_eq!(
        session.quest().unwrap().phase(),
        &QuestPhase::AwaitingChoice
    );
}

#[test]
fn test_level_gate_opens_after_progress() {
    let (mut session, clock) = open(MemoryStore::new(), GameConfig::default());
    session
        .create_persona(portia(Specialization::Criminal))
        .unwrap();
    assert!(session.select_mode("challenges").is_err());

    // Two perfect research runs: 170 xp each
    for _ in 0..2 {
        session.select_mode("research").unwrap();
        session.start_quest("forbidden-precedent-analysis").unwrap();
        answer(&mut session, &clock, "ca-supreme-court");
        answer(&mut session, &clock, "analogize-similarities");
        clock.advance(Duration::from_secs(4));
        assert!(matches!(session.tick(), Some(QuestSignal::RewardsReady(_))));
    }

    // 0 + 170 -> level 2 with 70; 70 + 170 = 240 < 300
    let persona = session.persona().unwrap();
    assert_eq!((persona.level, persona.xp), (2, 240));
    assert!(session.select_mode("challenges").is_err());

    session.select_mode("research").unwrap();
    session.start_quest("forbidden-precedent-analysis").unwrap();
    answer(&mut session, &clock, "ca-supreme-court");
    answer(&mut session, &clock, "analogize-similarities");
    clock.advance(Duration::from_secs(4));
    session.tick();

    assert_eq!(session.persona().unwrap().level, 3);
    assert!(session.select_mode("challenges").is_ok());
    // Challenges has no scenarios of its own
    assert_eq!(session.scenarios()[0].id, "contract-unconscionability");
}

#[test]
fn test_fast_pacing_from_config() {
    let config = GameConfig::from_toml_str(
        r#"
        [pacing]
        result_reveal_ms = 0
        completion_return_ms = 0
        "#,
    )
    .unwrap();
    let (mut session, _clock) = open(MemoryStore::new(), config);
    session
        .create_persona(portia(Specialization::Family))
        .unwrap();
    session.select_mode("negotiation").unwrap();
    session.start_quest("devils-bargain-ethics").unwrap();

    for choice in [
        "truthful-disclosure",
        "honest-projection-with-context",
        "truthful-disclosure-with-context",
    ] {
        assert!(session.submit_choice(choice));
        assert!(session.continue_quest());
    }
    assert!(matches!(
        session.tick(),
        Some(QuestSignal::RewardsReady(outcome)) if outcome.verdict == Verdict::Success
    ));
    assert_eq!(session.persona().unwrap().gold, 130);
}

#[test]
fn test_progress_survives_restart_on_disk() {
    let dir = tempfile::TempDir::new().unwrap();

    let (mut session, clock) = open(FileStore::new(dir.path()), GameConfig::default());
    session
        .create_persona(portia(Specialization::Immigration))
        .unwrap();
    session.select_mode("research").unwrap();
    session.start_quest("forbidden-precedent-analysis").unwrap();
    answer(&mut session, &clock, "most-recent");
    answer(&mut session, &clock, "ignore-precedent");
    clock.advance(Duration::from_secs(4));
    session.tick();
    let saved = session.persona().unwrap().clone();
    drop(session);

    let (reopened, _) = open(FileStore::new(dir.path()), GameConfig::default());
    assert_eq!(reopened.screen(), &Screen::Dashboard);
    assert_eq!(reopened.persona(), Some(&saved));
    assert_eq!((saved.xp, saved.gold), (45, 110));
}

#[test]
fn test_leaving_mid_quest_discards_progress() {
    let (mut session, clock) = open(MemoryStore::new(), GameConfig::default());
    session
        .create_persona(portia(Specialization::Corporate))
        .unwrap();
    session.select_mode("courtroom").unwrap();
    session.start_quest("contract-unconscionability").unwrap();
    answer(&mut session, &clock, "unconscionability");
    answer(&mut session, &clock, "procedural");

    assert!(session.back_to_dashboard());
    assert_eq!(session.screen(), &Screen::Dashboard);
    assert!(session.quest().is_none());

    clock.advance(Duration::from_secs(30));
    assert_eq!(session.tick(), None);
    let persona = session.persona().unwrap();
    assert_eq!((persona.xp, persona.gold, persona.level), (0, 100, 1));
}

#[test]
fn test_switching_mode_during_verdict_delay_keeps_rewards() {
    let (mut session, clock) = open(MemoryStore::new(), GameConfig::default());
    session
        .create_persona(portia(Specialization::Corporate))
        .unwrap();
    session.select_mode("courtroom").unwrap();
    session.start_quest("contract-unconscionability").unwrap();
    for choice in [
        "unconscionability",
        "procedural",
        "refuse-enforcement",
        "full-disclosure-counseling",
        "analogize-unconscionability",
    ] {
        answer(&mut session, &clock, choice);
    }
    assert_eq!(session.quest().unwrap().verdict(), Some(Verdict::Success));

    // Switching away while the verdict is on screen is refused
    assert!(matches!(
        session.select_mode("negotiation"),
        Err(SessionError::NotOnDashboard)
    ));
    assert_eq!(
        session.screen(),
        &Screen::Quest {
            mode_id: "courtroom".to_string()
        }
    );

    clock.advance(Duration::from_secs(4));
    let Some(QuestSignal::RewardsReady(outcome)) = session.tick() else {
        panic!("rewards were not released");
    };
    assert_eq!(outcome.rewards().xp, 425);

    // 425 xp: level 2 at 100, 325 carried toward 300 stays pending
    let persona = session.persona().unwrap();
    assert_eq!(
        (persona.level, persona.xp, persona.xp_to_next),
        (2, 325, 300)
    );
    assert_eq!(persona.gold, 150);
    assert_eq!(session.repository().load().unwrap().as_ref(), Some(persona));

    assert!(session.select_mode("negotiation").is_ok());
}
