//! Vertical jump physics
//!
//! Velocity is in pixels per step and positive while rising; screen y grows
//! downward, so integration subtracts velocity from y.

use super::state::Player;

impl Player {
    /// Apply the jump impulse if grounded. Returns whether the jump started.
    pub fn jump(&mut self, jump_power: f32) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.jump_velocity = jump_power;
        true
    }

    /// Snap to the ground if at or below it. Returns true if the player landed.
    pub fn clamp_to_ground(&mut self, resting_y: f32) -> bool {
        if self.pos.y >= resting_y {
            self.pos.y = resting_y;
            self.jumping = false;
            self.jump_velocity = 0.0;
            return true;
        }
        false
    }
}

/// Advance the player one step (semi-implicit Euler)
pub fn integrate(player: &mut Player, gravity: f32, resting_y: f32) {
    if !player.jumping {
        return;
    }

    player.pos.y -= player.jump_velocity;
    player.jump_velocity -= gravity;

    if player.clamp_to_ground(resting_y) {
        log::trace!("Landed");
    }
}
