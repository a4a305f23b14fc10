//! Demo mode: a simple look-ahead that plays the game
//!
//! Used by the headless binary and usable as an attract mode by frontends.

use crate::sim::GameState;

/// Steps of lead between the jump and reaching the obstacle
const LEAD_STEPS: f32 = 8.0;

/// Whether the autopilot wants to jump this step
pub fn should_jump(state: &GameState) -> bool {
    if !state.is_running() || state.player.jumping {
        return false;
    }

    let player = state.player.rect();
    let lead = state.game_speed * LEAD_STEPS;

    // Nearest obstacle still ahead of the rabbit's front edge
    state
        .obstacles
        .iter()
        .map(|o| o.rect().left() - player.right())
        .filter(|gap| *gap > 0.0)
        .reduce(f32::min)
        .is_some_and(|gap| gap <= lead)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> GameState {
        let mut state = GameState::new(21);
        state.tuning.spawn_chance = 0.0;
        state.start();
        state
    }

    #[test]
    fn test_waits_for_obstacle() {
        let mut state = quiet();
        assert!(!should_jump(&state));
        state.insert_obstacle(400.0, 40.0);
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_jumps_when_close() {
        let mut state = quiet();
        state.insert_obstacle(120.0, 40.0);
        assert!(should_jump(&state));
        state.request_jump();
        assert!(!should_jump(&state), "already airborne");
    }

    #[test]
    fn test_clears_tallest_obstacle() {
        let mut state = quiet();
        state.insert_obstacle(500.0, 49.9);
        for _ in 0..200 {
            if should_jump(&state) {
                state.request_jump();
            }
            state.step();
        }
        assert!(state.is_running());
        assert_eq!(state.score(), 1);
    }
}
