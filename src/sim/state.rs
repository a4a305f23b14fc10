//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; starting a new run resets
//! it in place.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed but never started
    Ready,
    /// Active gameplay
    Running,
    /// Run ended on a collision
    GameOver,
}

/// Axis-aligned rectangle in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The rabbit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    pub size: Vec2,
    pub jumping: bool,
    /// Upward velocity in pixels per step (positive = rising)
    pub jump_velocity: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.resting_y()),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            jumping: false,
            jump_velocity: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// An obstacle sliding toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Set once the obstacle's right edge is behind the player
    pub passed: bool,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// True once the obstacle has fully left the field on the left side
    #[inline]
    pub fn is_off_field(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }
}

/// Bookkeeping that keeps obstacle runs jumpable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnControl {
    /// Obstacles spawned since the last gap
    pub consecutive: u32,
    /// X of the rightmost live obstacle, 0 when none
    pub last_obstacle_x: f32,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    /// Pixels obstacles move per step
    pub game_speed: f32,
    /// Steps taken in the current run
    pub time_ticks: u64,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawn: SpawnControl,
    /// Single random source for every procedural decision
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a session in the `Ready` phase; call [`GameState::start`] to play
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Ready,
            score: 0,
            game_speed: tuning.base_speed,
            time_ticks: 0,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            spawn: SpawnControl::default(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// (Re)initialize the run and enter `Running`.
    ///
    /// The RNG keeps its stream so consecutive runs differ while staying
    /// reproducible from the session seed.
    pub fn start(&mut self) {
        self.score = 0;
        self.game_speed = self.tuning.base_speed;
        self.time_ticks = 0;
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.spawn = SpawnControl::default();
        self.phase = GamePhase::Running;
        log::info!("Run started (seed {})", self.seed);
    }

    /// Ask the rabbit to jump. Ignored unless running and grounded.
    ///
    /// Returns whether the jump was taken.
    pub fn request_jump(&mut self) -> bool {
        self.is_running() && self.player.jump(self.tuning.jump_power)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Player y when standing on the ground
    pub fn resting_y(&self) -> f32 {
        self.tuning.resting_y()
    }

    /// Push an obstacle of the given height at `x`, standing on the ground.
    ///
    /// Bypasses the spawn rules; meant for scripted scenarios and tests.
    pub fn insert_obstacle(&mut self, x: f32, height: f32) {
        let ground = self.tuning.ground_y();
        self.obstacles.push(Obstacle {
            pos: Vec2::new(x, ground - height),
            size: Vec2::new(self.tuning.obstacle_width, height),
            passed: false,
        });
        self.spawn.consecutive += 1;
        self.spawn.last_obstacle_x = self.spawn.last_obstacle_x.max(x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_ready_and_grounded() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.player.pos.y, state.resting_y());
        assert!(!state.player.jumping);
        assert_eq!(state.game_speed, 5.0);
    }

    #[test]
    fn test_jump_ignored_before_start() {
        let mut state = GameState::new(1);
        assert!(!state.request_jump());
        assert!(!state.player.jumping);

        state.start();
        assert!(state.request_jump());
        assert!(state.player.jumping);
        assert!(!state.request_jump(), "no double jump");
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 5.0, 8.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 15.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 28.0);
    }

    #[test]
    fn test_insert_obstacle_sits_on_ground() {
        let mut state = GameState::new(1);
        state.insert_obstacle(400.0, 30.0);
        let obs = &state.obstacles[0];
        assert_eq!(obs.rect().bottom(), state.tuning.ground_y());
        assert_eq!(state.spawn.last_obstacle_x, 400.0);
        assert_eq!(state.spawn.consecutive, 1);
    }
}
