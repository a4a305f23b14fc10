//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod physics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::first_hit;
pub use snapshot::{RenderSink, Snapshot};
pub use spawn::{PolicyAction, SpawnOutcome};
pub use state::{GamePhase, GameState, Obstacle, Player, Rect, SpawnControl};
pub use tick::{TickInput, TickReport, tick};
