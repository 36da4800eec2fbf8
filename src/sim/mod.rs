//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - All state is mutated from within a single frame tick

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::anchors_overlap;
pub use state::{Bounds, Direction, GameState, Gem, GemKind, Hazard, Player, PlayerStatus};
pub use tick::tick;
