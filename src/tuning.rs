//! Data-driven game balance
//!
//! Every number that shapes how a run feels lives here so it can be loaded
//! from JSON and tweaked without touching the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Physics, difficulty and spawn parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    pub gravity: f32,
    pub jump_impulse: f32,
    pub ground_height: f32,
    pub landing_tolerance: f32,

    // === Difficulty ===
    pub level_duration_ms: f64,
    pub base_scroll_speed: f32,
    pub max_scroll_speed: f32,
    pub speed_per_level: f32,
    pub speed_per_point: f32,

    // === Obstacles ===
    pub obstacle_delay_base_ms: f64,
    pub obstacle_delay_min_ms: f64,
    pub obstacle_delay_per_level_ms: f64,
    pub obstacle_delay_per_point_ms: f64,
    /// Large obstacles join the pool once the level exceeds this
    pub large_after_level: u32,
    /// Double spawns are possible once the level exceeds this
    pub double_after_level: u32,
    pub double_chance: f64,
    pub double_gap: f32,

    // === Collectibles ===
    pub collectible_delay_base_ms: f64,
    pub collectible_delay_min_ms: f64,
    pub collectible_delay_per_level_ms: f64,
    pub collectible_chance: f64,
    /// Fraction of the maximum jump height collectibles may be placed at
    pub collectible_reach_factor: f32,
    pub collectible_min_clearance: f32,
    pub collectible_spread: f32,
    pub collectible_buffer: f32,
    pub collectible_attempts: u32,
    pub collectible_bonus: u64,
    pub zigzag_amplitude: f32,
    pub zigzag_speed_min: f32,
    pub zigzag_speed_max: f32,

    // === Animation ===
    pub crush_ticks: u32,
    pub collect_ticks: u32,
    pub particle_gravity: f32,
    pub particle_drag: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            ground_height: GROUND_HEIGHT,
            landing_tolerance: LANDING_TOLERANCE,

            level_duration_ms: LEVEL_DURATION_MS,
            base_scroll_speed: BASE_SCROLL_SPEED,
            max_scroll_speed: MAX_SCROLL_SPEED,
            speed_per_level: SPEED_PER_LEVEL,
            speed_per_point: SPEED_PER_POINT,

            obstacle_delay_base_ms: 1800.0,
            obstacle_delay_min_ms: 800.0,
            obstacle_delay_per_level_ms: 100.0,
            obstacle_delay_per_point_ms: 10.0,
            large_after_level: 3,
            double_after_level: 2,
            double_chance: 0.3,
            double_gap: 60.0,

            collectible_delay_base_ms: 5000.0,
            collectible_delay_min_ms: 3000.0,
            collectible_delay_per_level_ms: 200.0,
            collectible_chance: 0.7,
            collectible_reach_factor: 0.8,
            collectible_min_clearance: 40.0,
            collectible_spread: 200.0,
            collectible_buffer: 50.0,
            collectible_attempts: 10,
            collectible_bonus: COLLECTIBLE_BONUS,
            zigzag_amplitude: ZIGZAG_AMPLITUDE,
            zigzag_speed_min: 0.08,
            zigzag_speed_max: 0.12,

            crush_ticks: CRUSH_TICKS,
            collect_ticks: COLLECT_TICKS,
            particle_gravity: 0.4,
            particle_drag: 0.98,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.gravity <= 0.0 {
            return invalid("gravity", "must be positive");
        }
        if self.jump_impulse >= 0.0 {
            return invalid("jump_impulse", "must point upward (negative)");
        }
        if self.level_duration_ms <= 0.0 {
            return invalid("level_duration_ms", "must be positive");
        }
        if self.max_scroll_speed < self.base_scroll_speed {
            return invalid("max_scroll_speed", "must not be below base_scroll_speed");
        }
        if self.obstacle_delay_min_ms > self.obstacle_delay_base_ms {
            return invalid("obstacle_delay_min_ms", "must not exceed obstacle_delay_base_ms");
        }
        if self.collectible_delay_min_ms > self.collectible_delay_base_ms {
            return invalid(
                "collectible_delay_min_ms",
                "must not exceed collectible_delay_base_ms",
            );
        }
        if !(0.0..=1.0).contains(&self.double_chance) {
            return invalid("double_chance", "must be within 0..=1");
        }
        if !(0.0..=1.0).contains(&self.collectible_chance) {
            return invalid("collectible_chance", "must be within 0..=1");
        }
        if self.collectible_attempts == 0 {
            return invalid("collectible_attempts", "must allow at least one attempt");
        }
        if self.zigzag_speed_max < self.zigzag_speed_min {
            return invalid("zigzag_speed_max", "must not be below zigzag_speed_min");
        }
        if self.reachable_height() <= self.collectible_min_clearance {
            return invalid(
                "collectible_min_clearance",
                "leaves no reachable band for collectibles",
            );
        }
        Ok(())
    }

    /// Apex of a standing jump: v² / 2g
    pub fn max_jump_height(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / (2.0 * self.gravity)
    }

    /// Highest point above the ground a collectible may be placed at
    pub fn reachable_height(&self) -> f32 {
        self.max_jump_height() * self.collectible_reach_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.2, "crush_ticks": 30 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.crush_ticks, 30);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
    }

    #[test]
    fn test_rejects_downward_jump() {
        let err = Tuning::from_json(r#"{ "jump_impulse": 5.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "jump_impulse",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_reachable_height() {
        let tuning = Tuning::default();
        // 16² / 1.8 ≈ 142.2, 80% of that ≈ 113.8
        assert!((tuning.max_jump_height() - 142.222).abs() < 0.01);
        assert!((tuning.reachable_height() - 113.778).abs() < 0.01);
    }
}
