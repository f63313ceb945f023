//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay headless:
//! - One call to `tick` per frame, no internal threads or sleeps
//! - Randomness only through the caller's RNG
//! - No rendering or platform dependencies

pub mod geometry;
pub mod particles;
pub mod physics;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use geometry::{Aabb, landed_on_top, would_overlap_reserved_area};
pub use snapshot::Snapshot;
pub use state::{
    Collectible, GameEvent, GamePhase, GameState, MAX_PARTICLES, Obstacle, ObstacleSize, Particle,
    Player, Viewport,
};
pub use tick::{TickInput, jump, tick};
