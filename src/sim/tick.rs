//! Per-step simulation
//!
//! Core game loop that advances the session deterministically. One call is one
//! frame; every constant is tuned per step, not per second.

use super::state::{GamePhase, GameState};
use super::{collision, difficulty, obstacles, physics};

/// Input commands for a single step
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested since the last step
    pub jump: bool,
}

/// What happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Points earned this step
    pub points: u32,
    /// The run ended this step
    pub game_over: bool,
}

/// Advance the session by one step. A no-op unless running.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    if state.phase != GamePhase::Running {
        return TickReport::default();
    }

    if input.jump {
        state.request_jump();
    }

    state.time_ticks += 1;
    let resting_y = state.resting_y();

    physics::integrate(&mut state.player, state.tuning.gravity, resting_y);

    let points = obstacles::update(state);

    if let Some(index) = collision::check(&mut state.player, &state.obstacles, resting_y) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: hit obstacle {} after {} steps, final score {}",
            index,
            state.time_ticks,
            state.score
        );
        return TickReport {
            points,
            game_over: true,
        };
    }

    state.game_speed = difficulty::update_speed(state.game_speed, state.score, &state.tuning);

    log::trace!(
        "tick {}: y={:.1} obstacles={} score={}",
        state.time_ticks,
        state.player.pos.y,
        state.obstacles.len(),
        state.score
    );

    TickReport {
        points,
        game_over: false,
    }
}

impl GameState {
    /// Advance one step with no new input
    pub fn step(&mut self) -> TickReport {
        tick(self, &TickInput::default())
    }
}
