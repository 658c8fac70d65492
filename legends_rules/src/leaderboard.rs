//! Hall of Legends - the persona ranked against a fixed roster of rivals.

use crate::entities::{Persona, Specialization};

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub name: String,
    pub level: u32,
    pub xp: u32,
    /// Specialization title, e.g. "Court Paladin".
    pub title: String,
    pub achievements: usize,
    pub is_current: bool,
}

struct Rival {
    name: &'static str,
    level: u32,
    xp: u32,
    specialization: Specialization,
    achievements: usize,
}

const RIVALS: [Rival; 4] = [
    Rival {
        name: "Shadowbane Alexandra",
        level: 15,
        xp: 3450,
        specialization: Specialization::Corporate,
        achievements: 28,
    },
    Rival {
        name: "Darkblade Marcus",
        level: 13,
        xp: 2800,
        specialization: Specialization::Criminal,
        achievements: 24,
    },
    Rival {
        name: "Voidwhisper Sarah",
        level: 12,
        xp: 2350,
        specialization: Specialization::Civil,
        achievements: 21,
    },
    Rival {
        name: "Soulreaper David",
        level: 9,
        xp: 1450,
        specialization: Specialization::Family,
        achievements: 15,
    },
];

/// Rank the persona among the rivals by level, then xp.
pub fn leaderboard(persona: &Persona) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = RIVALS
        .iter()
        .map(|rival| LeaderboardEntry {
            rank: 0,
            name: rival.name.to_string(),
            level: rival.level,
            xp: rival.xp,
            title: rival.specialization.title().to_string(),
            achievements: rival.achievements,
            is_current: false,
        })
        .collect();

    entries.push(LeaderboardEntry {
        rank: 0,
        name: persona.name.clone(),
        level: persona.level,
        xp: persona.xp,
        title: persona.specialization.title().to_string(),
        achievements: persona.achievements.len(),
        is_current: true,
    });

    // Stable sort keeps rivals ahead of the persona on exact ties
    entries.sort_by(|a, b| b.level.cmp(&a.level).then(b.xp.cmp(&a.xp)));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}
