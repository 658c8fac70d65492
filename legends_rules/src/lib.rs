//! # Legends Rules
//!
//! The rulebook crate - personas, skills, progression, game modes and quest content.
//! This crate is the single source of truth for game data and does not drive any quest;
//! the quest engine lives in `quest_core`.

pub mod config;
pub mod content;
pub mod entities;
pub mod error;
pub mod leaderboard;
pub mod mechanics;
pub mod modes;

pub use config::*;
pub use content::*;
pub use entities::*;
pub use error::*;
pub use leaderboard::*;
pub use mechanics::*;
pub use modes::*;
