//! # Quest Core
//!
//! The quest engine of Legal Legends. This crate consumes the rules and
//! content defined in `legends_rules`, drives a player through a scenario,
//! and folds the rewards into the persistent persona.
//!
//! ## Core Components
//!
//! - **machine**: The quest state machine and its progress tracker
//! - **timer**: Clock port and cancellable display timers
//! - **store**: Key-value persistence with versioned schema migration
//! - **session**: The top-level controller that owns the persona
//! - **events**: Events handed back to the UI layer
//!
//! ## Design Philosophy
//!
//! - **Single Owner**: The session owns the one persona and at most one quest
//! - **Event-Driven**: Every mutation follows one player action or timer tick
//! - **Forgiving**: Operations issued in the wrong phase are ignored, never errors

pub mod error;
pub mod events;
pub mod machine;
pub mod progress;
pub mod session;
pub mod store;
pub mod timer;

pub use error::*;
pub use events::*;
pub use machine::*;
pub use progress::*;
pub use session::*;
pub use store::*;
pub use timer::*;
