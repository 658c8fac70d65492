//! Persona progression - folding quest rewards into the persona.

use rand::Rng;
use tracing::info;

use crate::entities::{Persona, SkillKind};

/// Experience threshold per level: `xp_to_next = level * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 150;

/// Inclusive range of the random skill growth applied on level-up.
pub const SKILL_GROWTH_MIN: u32 = 2;
pub const SKILL_GROWTH_MAX: u32 = 9;

/// Aggregate rewards of one completed quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuestRewards {
    pub xp: u32,
    pub gold: u32,
}

impl QuestRewards {
    pub fn new(xp: u32, gold: u32) -> Self {
        Self { xp, gold }
    }
}

/// What changed when a level-up triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub xp_to_next: u32,
    /// Actual gain per skill after clamping.
    pub skill_gains: Vec<(SkillKind, u32)>,
}

/// Apply a quest's rewards to the persona.
///
/// At most one level boundary is crossed per call: the surplus experience
/// carries over, but is not re-checked against the new threshold.
pub fn apply_quest_rewards<R: Rng + ?Sized>(
    persona: &mut Persona,
    rewards: QuestRewards,
    rng: &mut R,
) -> Option<LevelUp> {
    persona.xp = persona.xp.saturating_add(rewards.xp);
    persona.gold = persona.gold.saturating_add(rewards.gold);

    if !persona.level_up_pending() {
        return None;
    }

    persona.level += 1;
    persona.xp -= persona.xp_to_next;
    persona.xp_to_next = persona.level * XP_PER_LEVEL;

    let mut skill_gains = Vec::with_capacity(SkillKind::ALL.len());
    for skill in SkillKind::ALL {
        let before = persona.skills.get(skill);
        let roll = rng.gen_range(SKILL_GROWTH_MIN..=SKILL_GROWTH_MAX);
        let after = persona.skills.raise(skill, roll);
        skill_gains.push((skill, after - before));
    }

    persona.restore_vitals();

    info!(
        persona = %persona.id,
        level = persona.level,
        xp = persona.xp,
        xp_to_next = persona.xp_to_next,
        "persona leveled up"
    );

    Some(LevelUp {
        new_level: persona.level,
        xp_to_next: persona.xp_to_next,
        skill_gains,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Specialization, SKILL_CAP};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn persona() -> Persona {
        Persona::new("Ada", Specialization::Civil, "x")
    }

    #[test]
    fn test_no_level_up() {
        let mut persona = persona();
        persona.health = 40;
        let before = persona.clone();
        let mut rng = StdRng::seed_from_u64(1);

        let level_up = apply_quest_rewards(&mut persona, QuestRewards::new(50, 20), &mut rng);

        assert!(level_up.is_none());
        assert_eq!(persona.xp, 50);
        assert_eq!(persona.gold, before.gold + 20);
        assert_eq!(persona.level, 1);
        assert_eq!(persona.skills, before.skills);
        assert_eq!(persona.health, 40);
        assert_eq!(persona.mana, before.mana);
    }

    #[test]
    fn test_level_up_carries_remainder() {
        let mut persona = persona();
        persona.level = 2;
        persona.xp = 140;
        persona.xp_to_next = 300;
        persona.health = 10;
        persona.mana = 0;
        let before = persona.skills;
        let mut rng = StdRng::seed_from_u64(7);

        let level_up =
            apply_quest_rewards(&mut persona, QuestRewards::new(200, 0), &mut rng).unwrap();

        assert_eq!(persona.xp, 40);
        assert_eq!(persona.level, 3);
        assert_eq!(persona.xp_to_next, 450);
        assert_eq!(level_up.new_level, 3);
        assert_eq!(persona.health, persona.max_health);
        assert_eq!(persona.mana, persona.max_mana);
        for (skill, value) in persona.skills.iter() {
            let gain = value - before.get(skill);
            assert!((SKILL_GROWTH_MIN..=SKILL_GROWTH_MAX).contains(&gain));
        }
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let mut persona = persona();
        let mut rng = StdRng::seed_from_u64(3);
        let level_up = apply_quest_rewards(&mut persona, QuestRewards::new(100, 0), &mut rng);
        assert!(level_up.is_some());
        assert_eq!(persona.xp, 0);
        assert_eq!(persona.xp_to_next, 300);
    }

    #[test]
    fn test_single_step_level_up() {
        let mut persona = persona();
        let mut rng = StdRng::seed_from_u64(11);

        apply_quest_rewards(&mut persona, QuestRewards::new(1000, 0), &mut rng);

        // Only one boundary crossed even though 900 >= 300
        assert_eq!(persona.level, 2);
        assert_eq!(persona.xp, 900);
        assert_eq!(persona.xp_to_next, 300);
        assert!(persona.level_up_pending());
    }

    #[test]
    fn test_skills_clamp_at_cap() {
        let mut persona = persona();
        persona.skills.ethics = 99;
        let mut rng = StdRng::seed_from_u64(5);

        let level_up =
            apply_quest_rewards(&mut persona, QuestRewards::new(150, 0), &mut rng).unwrap();

        assert_eq!(persona.skills.ethics, SKILL_CAP);
        let ethics_gain = level_up
            .skill_gains
            .iter()
            .find(|(skill, _)| *skill == SkillKind::Ethics)
            .map(|(_, gain)| *gain);
        assert_eq!(ethics_gain, Some(1));
    }
}
