//! Read-only view of a step for presentation layers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, Rect};

/// Everything a renderer or HUD needs after a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub field: Vec2,
    /// Y of the ground line
    pub ground_y: f32,
    pub player: Rect,
    pub jumping: bool,
    pub obstacles: Vec<Rect>,
    /// Decorative goal the rabbit chases
    pub carrot: Rect,
    pub score: u32,
    pub game_speed: f32,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        Self {
            field: Vec2::new(tuning.field_width, tuning.field_height),
            ground_y: tuning.ground_y(),
            player: state.player.rect(),
            jumping: state.player.jumping,
            obstacles: state.obstacles.iter().map(|o| o.rect()).collect(),
            carrot: tuning.carrot_rect(),
            score: state.score,
            game_speed: state.game_speed,
            phase: state.phase,
        }
    }
}

/// Receives a snapshot once per driven frame
pub trait RenderSink {
    fn present(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> RenderSink for F {
    fn present(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}
