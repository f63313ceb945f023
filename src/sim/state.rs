//! Game state and core simulation types
//!
//! Everything the simulation mutates is owned by [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, player standing on the ground
    Waiting,
    /// Active run
    Playing,
    /// Run ended by a head-on collision
    GameOver,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
    pub jumping: bool,
    pub running: bool,
    /// Ticks spent running, drives the leg animation
    pub animation_frame: u32,
}

impl Player {
    /// A player standing on the given ground line
    pub fn new(ground_y: f32) -> Self {
        let size = Vec2::splat(PLAYER_SIZE);
        Self {
            pos: Vec2::new(PLAYER_X, ground_y - size.y),
            size,
            velocity_y: 0.0,
            jumping: false,
            running: false,
            animation_frame: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// y coordinate at which the player stands on the ground
    #[inline]
    pub fn rest_y(&self, ground_y: f32) -> f32 {
        ground_y - self.size.y
    }

    /// Start a jump. Returns false (and does nothing) while airborne.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.jumping {
            return false;
        }
        self.velocity_y = impulse;
        self.jumping = true;
        true
    }
}

/// Obstacle size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleSize {
    Small,
    Medium,
    Large,
}

impl ObstacleSize {
    /// Edge length of the (square) box
    pub fn edge(&self) -> f32 {
        match self {
            ObstacleSize::Small => 25.0,
            ObstacleSize::Medium => 35.0,
            ObstacleSize::Large => 45.0,
        }
    }

    /// Points awarded for crushing it
    pub fn points(&self) -> u64 {
        match self {
            ObstacleSize::Small => 1,
            ObstacleSize::Medium => 2,
            ObstacleSize::Large => 3,
        }
    }

    /// Vertical velocity the player bounces off with
    pub fn bounce(&self) -> f32 {
        match self {
            ObstacleSize::Small => -8.0,
            ObstacleSize::Medium => -10.0,
            ObstacleSize::Large => -12.0,
        }
    }

    /// Particles emitted when crushed
    pub fn particle_count(&self) -> usize {
        match self {
            ObstacleSize::Small => 10,
            ObstacleSize::Medium => 15,
            ObstacleSize::Large => 20,
        }
    }
}

/// A box scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleSize,
    pub crushed: bool,
    /// Ticks since crushed
    pub crush_ticks: u32,
}

impl Obstacle {
    /// A box of the given class resting on the ground at `x`
    pub fn on_ground(kind: ObstacleSize, x: f32, ground_y: f32) -> Self {
        let edge = kind.edge();
        Self {
            pos: Vec2::new(x, ground_y - edge),
            size: Vec2::splat(edge),
            kind,
            crushed: false,
            crush_ticks: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A bonus item drifting along a sine path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    pub zigzag_phase: f32,
    pub zigzag_speed: f32,
    pub base_y: f32,
    pub collected: bool,
    /// Ticks since collected
    pub collect_ticks: u32,
}

impl Collectible {
    pub fn new(pos: Vec2, zigzag_speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(COLLECTIBLE_SIZE),
            zigzag_phase: 0.0,
            zigzag_speed,
            base_y: pos.y,
            collected: false,
            collect_ticks: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A particle for visual effects (no gameplay effect)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in ticks
    pub life: f32,
    pub max_life: f32,
    /// Packed 0xRRGGBB
    pub color: u32,
    pub size: f32,
}

/// Default particle cap when no settings are applied
pub const MAX_PARTICLES: usize = 500;

/// Viewport dimensions supplied by the host layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Discrete notifications raised during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Waiting → Playing
    RunStarted,
    /// Jump accepted (including the one that starts a run)
    Jumped,
    /// Player crushed an obstacle
    Landed { kind: ObstacleSize, points: u64 },
    /// Player picked up a collectible
    Collected { points: u64 },
    /// Difficulty level increased
    LevelUp { level: u32 },
    /// Head-on collision ended the run
    Collision { score: u64, new_best: bool },
    /// GameOver → Waiting
    Restarted,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Best score seen, seeded from the persisted record
    pub high_score: u64,
    pub level: u32,
    pub scroll_speed: f32,
    pub viewport: Viewport,
    /// Ground line (y of the ground's top edge)
    pub ground_y: f32,
    /// Simulation clock (ms)
    pub clock_ms: f64,
    /// Clock reading when the current run began
    pub run_started_at: f64,
    pub last_obstacle_spawn: Option<f64>,
    pub last_collectible_spawn: Option<f64>,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub max_particles: usize,
    /// Events raised since the host last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game in the waiting phase
    pub fn new(viewport: Viewport, tuning: Tuning) -> Self {
        let ground_y = viewport.height - tuning.ground_height;
        Self {
            phase: GamePhase::Waiting,
            score: 0,
            high_score: 0,
            level: 1,
            scroll_speed: tuning.base_scroll_speed,
            viewport,
            ground_y,
            clock_ms: 0.0,
            run_started_at: 0.0,
            last_obstacle_spawn: None,
            last_collectible_spawn: None,
            player: Player::new(ground_y),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            particles: Vec::new(),
            max_particles: MAX_PARTICLES,
            events: Vec::new(),
            tuning,
        }
    }

    /// Whether the viewport leaves room to simulate anything
    pub fn geometry_valid(&self) -> bool {
        self.viewport.width > 0.0 && self.ground_y > self.player.size.y
    }

    /// Apply new viewport geometry and re-seat ground-relative entities
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let ground_y = viewport.height - self.tuning.ground_height;
        let shift = ground_y - self.ground_y;
        self.viewport = viewport;
        self.ground_y = ground_y;

        // A resting player follows the ground; an airborne one is pushed out of it
        let rest = self.player.rest_y(ground_y);
        if !self.player.jumping || self.player.pos.y >= rest {
            self.player.pos.y = rest;
            self.player.velocity_y = 0.0;
            self.player.jumping = false;
        }
        for obstacle in &mut self.obstacles {
            obstacle.pos.y = ground_y - obstacle.size.y;
        }
        for collectible in &mut self.collectibles {
            collectible.base_y += shift;
            collectible.pos.y += shift;
        }

        if !self.geometry_valid() {
            log::warn!(
                "Degenerate viewport {}x{}, simulation suspended",
                viewport.width,
                viewport.height
            );
        }
    }

    /// Reset everything a run touches (GameOver → Waiting)
    pub fn reset_run(&mut self) {
        self.phase = GamePhase::Waiting;
        self.score = 0;
        self.level = 1;
        self.scroll_speed = self.tuning.base_scroll_speed;
        self.run_started_at = 0.0;
        self.last_obstacle_spawn = None;
        self.last_collectible_spawn = None;
        self.player = Player::new(self.ground_y);
        self.obstacles.clear();
        self.collectibles.clear();
        self.particles.clear();
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Viewport::new(800.0, 600.0), Tuning::default())
    }

    #[test]
    fn test_new_state_waiting_on_ground() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Waiting);
        assert_eq!(state.ground_y, 520.0);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_X, 470.0));
        assert_eq!(state.scroll_speed, BASE_SCROLL_SPEED);
        assert!(state.geometry_valid());
    }

    #[test]
    fn test_player_no_double_jump() {
        let mut player = Player::new(520.0);
        assert!(player.jump(JUMP_IMPULSE));
        player.velocity_y = -3.0;
        assert!(!player.jump(JUMP_IMPULSE));
        assert_eq!(player.velocity_y, -3.0);
    }

    #[test]
    fn test_obstacle_sits_on_ground() {
        let obstacle = Obstacle::on_ground(ObstacleSize::Large, 800.0, 520.0);
        assert_eq!(obstacle.aabb().bottom(), 520.0);
        assert_eq!(obstacle.size, Vec2::splat(45.0));
    }

    #[test]
    fn test_resize_reseats_ground_entities() {
        let mut state = state();
        state.obstacles.push(Obstacle::on_ground(ObstacleSize::Small, 400.0, 520.0));
        state
            .collectibles
            .push(Collectible::new(Vec2::new(500.0, 450.0), 0.1));

        state.set_viewport(Viewport::new(1024.0, 700.0));

        assert_eq!(state.ground_y, 620.0);
        assert_eq!(state.player.pos.y, 570.0);
        assert_eq!(state.obstacles[0].aabb().bottom(), 620.0);
        assert_eq!(state.collectibles[0].base_y, 550.0);
    }

    #[test]
    fn test_shrink_pushes_airborne_player_out_of_ground() {
        let mut state = state();
        state.phase = GamePhase::GameOver;
        state.player.jumping = true;
        state.player.pos.y = 440.0;
        state.player.velocity_y = -2.0;

        state.set_viewport(Viewport::new(800.0, 500.0));

        assert_eq!(state.ground_y, 420.0);
        assert_eq!(state.player.pos.y, 370.0);
        assert_eq!(state.player.velocity_y, 0.0);
        assert!(!state.player.jumping);
    }

    #[test]
    fn test_resize_keeps_airborne_player_above_ground() {
        let mut state = state();
        state.player.jumping = true;
        state.player.pos.y = 300.0;
        state.player.velocity_y = -5.0;

        state.set_viewport(Viewport::new(800.0, 500.0));

        assert_eq!(state.player.pos.y, 300.0);
        assert_eq!(state.player.velocity_y, -5.0);
        assert!(state.player.jumping);
    }

    #[test]
    fn test_degenerate_viewport() {
        let mut state = state();
        state.set_viewport(Viewport::new(0.0, 600.0));
        assert!(!state.geometry_valid());
        state.set_viewport(Viewport::new(800.0, 100.0));
        assert!(!state.geometry_valid());
    }

    #[test]
    fn test_drain_events() {
        let mut state = state();
        state.push_event(GameEvent::Jumped);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
        assert!(state.events.is_empty());
    }
}
