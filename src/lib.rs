//! Rabbit Run - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, difficulty)
//! - `tuning`: Data-driven game balance
//! - `driver`: Fixed-step adapter between frame clocks and the simulation
//! - `autopilot`: Demo-mode jump heuristic
//! - `renderer`: Snapshot to vertex conversion for any drawing backend

pub mod autopilot;
pub mod driver;
pub mod renderer;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use driver::Driver;
pub use sim::{GamePhase, GameState, RenderSink, Snapshot};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal step rate (one simulation step per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame the driver will account for (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 300.0;
    /// Ground line sits this far above the bottom of the field
    pub const GROUND_INSET: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_POWER: f32 = 15.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 20.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 50.0;
    /// Minimum clearance between the right edge and the newest obstacle
    pub const MIN_GAP: f32 = 30.0;
    /// Obstacles allowed in a row before a gap is forced
    pub const MAX_CONSECUTIVE: u32 = 3;
    /// Per-step chance to attempt a spawn
    pub const SPAWN_CHANCE: f64 = 0.02;
    /// Per-step chance to reset the consecutive counter when not spawning
    pub const GAP_CHANCE: f64 = 0.01;

    /// Difficulty
    pub const BASE_SPEED: f32 = 5.0;
    /// Score interval between speed bumps
    pub const SPEED_MILESTONE: u32 = 10;

    /// Decorative carrot
    pub const CARROT_SIZE: f32 = 30.0;
    pub const CARROT_OFFSET_X: f32 = 100.0;
    /// Carrot base sits this far above the bottom of the field
    pub const CARROT_BASE_INSET: f32 = 50.0;
}
