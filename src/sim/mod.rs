//! Game logic
//!
//! Everything here is deterministic for a given seed and input sequence:
//! - Seeded RNG only
//! - Stable entity order (player first, then target)
//! - No rendering or platform dependencies beyond the `engine` traits

pub mod autopilot;
pub mod entity;
pub mod game;
pub mod level;
pub mod player;
pub mod state;
pub mod target;

pub use entity::{Behavior, Entity, EntityKind};
pub use game::{Game, GamePhase};
pub use level::Level;
pub use player::PlayerState;
pub use state::{FinalReport, GameState, RngState};
