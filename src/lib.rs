//! Smash Runner - A side-scrolling box-smashing runner
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, spawning, collisions, game state)
//! - `render`: Snapshot to vertex conversion for any GPU host
//! - `platform`: Input triggers and the feedback (haptics) port
//! - `runner`: Fixed-timestep host driver
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod render;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use runner::Game;
pub use settings::{QualityPreset, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;
    /// Longest simulated gap a single tick may cover (ms)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Gravity applied to the player every tick (units/tick²)
    pub const GRAVITY: f32 = 0.9;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -16.0;
    /// Height of the ground band below the ground line
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 50.0;

    /// How far below an obstacle's top the player's feet may sink and still land
    pub const LANDING_TOLERANCE: f32 = 15.0;

    /// Scroll speed curve
    pub const BASE_SCROLL_SPEED: f32 = 4.0;
    pub const MAX_SCROLL_SPEED: f32 = 12.0;
    pub const SPEED_PER_LEVEL: f32 = 1.5;
    pub const SPEED_PER_POINT: f32 = 0.05;

    /// Level length (ms of play per level)
    pub const LEVEL_DURATION_MS: f64 = 15_000.0;

    /// Collectible bonus and motion
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const COLLECTIBLE_BONUS: u64 = 5;
    pub const ZIGZAG_AMPLITUDE: f32 = 20.0;

    /// Animation lengths (ticks)
    pub const CRUSH_TICKS: u32 = 25;
    pub const COLLECT_TICKS: u32 = 20;
}
