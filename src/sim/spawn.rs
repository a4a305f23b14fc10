//! Procedural obstacle generation
//!
//! Obstacles always enter at the right edge of the field. Two rules keep every
//! run jumpable: at most `max_consecutive` obstacles in a row, and a minimum
//! clearance between the edge and the newest obstacle.

use glam::Vec2;
use rand::Rng;

use super::state::{Obstacle, SpawnControl};
use crate::tuning::Tuning;

/// Why a spawn attempt did or did not produce an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned,
    /// Run cap hit; the counter was reset to force a gap
    GapForced,
    /// Newest obstacle is still too close to the edge
    TooClose,
}

/// What the per-step policy decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyAction {
    Idle,
    Attempted(SpawnOutcome),
    /// Counter reset without spawning
    GapReset,
}

/// Try to place one obstacle at the right edge
pub fn try_spawn<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    control: &mut SpawnControl,
    tuning: &Tuning,
    rng: &mut R,
) -> SpawnOutcome {
    if control.consecutive >= tuning.max_consecutive {
        control.consecutive = 0;
        return SpawnOutcome::GapForced;
    }

    let x = tuning.field_width;
    if control.last_obstacle_x > 0.0 && x - control.last_obstacle_x < tuning.min_gap {
        return SpawnOutcome::TooClose;
    }

    let height = rng.random_range(tuning.obstacle_min_height..tuning.obstacle_max_height);
    obstacles.push(Obstacle {
        pos: Vec2::new(x, tuning.ground_y() - height),
        size: Vec2::new(tuning.obstacle_width, height),
        passed: false,
    });
    control.consecutive += 1;
    control.last_obstacle_x = x;

    log::debug!(
        "Spawned obstacle h={:.1} (run of {})",
        height,
        control.consecutive
    );
    SpawnOutcome::Spawned
}

/// Per-step spawn policy.
///
/// A spawn is attempted with `spawn_chance` while under the run cap; if that
/// roll fails, a second roll with `gap_chance` resets the run counter.
pub fn run_policy<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    control: &mut SpawnControl,
    tuning: &Tuning,
    rng: &mut R,
) -> PolicyAction {
    let spawn_roll: f64 = rng.random();
    if spawn_roll < tuning.spawn_chance && control.consecutive < tuning.max_consecutive {
        return PolicyAction::Attempted(try_spawn(obstacles, control, tuning, rng));
    }

    let gap_roll: f64 = rng.random();
    if gap_roll < tuning.gap_chance {
        control.consecutive = 0;
        log::debug!("Random gap reset");
        return PolicyAction::GapReset;
    }

    PolicyAction::Idle
}
