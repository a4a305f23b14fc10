//! Collision detection
//!
//! Everything is axis-aligned, so a strict AABB overlap test is enough.
//! Rectangles that merely touch along an edge do not collide.

use super::state::{Obstacle, Player, Rect};

impl Rect {
    /// Strict overlap test (shared edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Index of the first obstacle (in spawn order) touching the player
pub fn first_hit(player: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| player.overlaps(&o.rect()))
}

/// Ground safety clamp followed by the obstacle test.
///
/// Returns the index of the obstacle that ended the run, if any.
pub fn check(player: &mut Player, obstacles: &[Obstacle], resting_y: f32) -> Option<usize> {
    player.clamp_to_ground(resting_y);
    first_hit(&player.rect(), obstacles)
}
