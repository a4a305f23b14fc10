//! Obstacle tracking: scroll, prune, spawn, score

use super::spawn::{PolicyAction, run_policy};
use super::state::{GameState, Obstacle};

/// Move every obstacle left by `speed`
pub fn advance(obstacles: &mut [Obstacle], speed: f32) {
    for obstacle in obstacles {
        obstacle.pos.x -= speed;
    }
}

/// Drop obstacles that have fully left the field. Returns how many were removed.
pub fn prune(obstacles: &mut Vec<Obstacle>) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_field());
    before - obstacles.len()
}

/// X of the rightmost obstacle, or 0 when the field is empty
pub fn rightmost_x(obstacles: &[Obstacle]) -> f32 {
    obstacles
        .iter()
        .map(|o| o.pos.x)
        .reduce(f32::max)
        .unwrap_or(0.0)
}

/// Mark obstacles whose right edge is behind `player_x` as passed.
/// Returns the number of new pass-events.
pub fn mark_passed(obstacles: &mut [Obstacle], player_x: f32) -> u32 {
    let mut passed = 0;
    for obstacle in obstacles.iter_mut().filter(|o| !o.passed) {
        if obstacle.rect().right() < player_x {
            obstacle.passed = true;
            passed += 1;
        }
    }
    passed
}

/// Run the tracker for one step and return the points earned
pub fn update(state: &mut GameState) -> u32 {
    advance(&mut state.obstacles, state.game_speed);

    if prune(&mut state.obstacles) > 0 {
        // An obstacle leaving the field opens a gap on screen
        state.spawn.consecutive = 0;
    }

    state.spawn.last_obstacle_x = rightmost_x(&state.obstacles);

    let action = run_policy(
        &mut state.obstacles,
        &mut state.spawn,
        &state.tuning,
        &mut state.rng,
    );
    if let PolicyAction::Attempted(outcome) = action {
        log::trace!("Spawn attempt: {:?}", outcome);
    }

    let points = mark_passed(&mut state.obstacles, state.player.pos.x);
    state.score += points;
    points
}
