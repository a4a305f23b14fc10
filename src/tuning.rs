//! Data-driven game balance
//!
//! Every per-step constant the simulation reads lives here. Defaults match the
//! classic game; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Rect;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Distance from the bottom of the field to the ground line
    pub ground_inset: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Velocity lost per step while airborne
    pub gravity: f32,
    /// Upward velocity applied on jump
    pub jump_power: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Inclusive lower bound of the random height
    pub obstacle_min_height: f32,
    /// Exclusive upper bound of the random height
    pub obstacle_max_height: f32,
    pub min_gap: f32,
    pub max_consecutive: u32,
    pub spawn_chance: f64,
    pub gap_chance: f64,

    // === Difficulty ===
    pub base_speed: f32,
    pub speed_milestone: u32,

    // === Carrot ===
    pub carrot_size: f32,
    /// Distance from the right edge of the field to the carrot's left side
    pub carrot_offset_x: f32,
    /// Distance from the bottom of the field to the carrot's base
    pub carrot_base_inset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_inset: GROUND_INSET,

            player_x: PLAYER_X,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            min_gap: MIN_GAP,
            max_consecutive: MAX_CONSECUTIVE,
            spawn_chance: SPAWN_CHANCE,
            gap_chance: GAP_CHANCE,

            base_speed: BASE_SPEED,
            speed_milestone: SPEED_MILESTONE,

            carrot_size: CARROT_SIZE,
            carrot_offset_x: CARROT_OFFSET_X,
            carrot_base_inset: CARROT_BASE_INSET,
        }
    }
}

impl Tuning {
    /// Environment variable the native binary reads a tuning path from
    pub const ENV_VAR: &'static str = "RABBIT_RUN_TUNING";

    /// Y of the ground line (top of the grass strip)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.field_height - self.ground_inset
    }

    /// Player y when standing on the ground
    #[inline]
    pub fn resting_y(&self) -> f32 {
        self.ground_y() - self.player_height
    }

    /// Carrot bounding box; anchored to the field, not the player
    pub fn carrot_rect(&self) -> Rect {
        let base_y = self.field_height - self.carrot_base_inset;
        Rect::new(
            self.field_width - self.carrot_offset_x,
            base_y - self.carrot_size,
            self.carrot_size,
            self.carrot_size,
        )
    }

    /// Parse and validate a JSON tuning document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse an optional JSON document, falling back to defaults when it is
    /// absent, blank or invalid
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::error!("{e}; using default tuning");
                Self::default()
            }),
        }
    }

    /// Read a JSON tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("gravity", self.gravity),
            ("jump_power", self.jump_power),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_min_height", self.obstacle_min_height),
            ("obstacle_max_height", self.obstacle_max_height),
            ("min_gap", self.min_gap),
            ("base_speed", self.base_speed),
            ("carrot_size", self.carrot_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("ground_inset", self.ground_inset),
            ("player_x", self.player_x),
            ("carrot_offset_x", self.carrot_offset_x),
            ("carrot_base_inset", self.carrot_base_inset),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        for (name, p) in [("spawn_chance", self.spawn_chance), ("gap_chance", self.gap_chance)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }

        if self.obstacle_min_height >= self.obstacle_max_height {
            return Err(TuningError::Invalid(format!(
                "obstacle height range [{}, {}) is empty",
                self.obstacle_min_height, self.obstacle_max_height
            )));
        }

        // Spawns are at least min_gap apart and all scroll together
        if self.min_gap < self.obstacle_width {
            return Err(TuningError::Invalid(format!(
                "min_gap {} is narrower than obstacle_width {}; obstacles would overlap",
                self.min_gap, self.obstacle_width
            )));
        }

        if self.speed_milestone == 0 {
            return Err(TuningError::Invalid(
                "speed_milestone must be at least 1".to_string(),
            ));
        }

        if self.resting_y() < 0.0 {
            return Err(TuningError::Invalid(
                "player does not fit above the ground line".to_string(),
            ));
        }

        Ok(())
    }
}
