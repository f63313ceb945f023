//! Read-only view of the simulation for renderers and HUDs

use serde::Serialize;

use super::state::{Collectible, GamePhase, GameState, Obstacle, Particle, Player, Viewport};

/// Everything a presentation layer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub scroll_speed: f32,
    pub viewport: Viewport,
    pub ground_y: f32,
    pub ground_height: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub particles: Vec<Particle>,
    pub crush_ticks: u32,
    pub collect_ticks: u32,
    /// Whether the HUD shows the speed readout
    pub show_speed: bool,
}

impl Snapshot {
    /// HUD speed readout, e.g. "5.5x", when enabled
    pub fn speed_label(&self) -> Option<String> {
        self.show_speed.then(|| format!("{:.1}x", self.scroll_speed))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameState {
    /// Capture the current frame (call between ticks only)
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            scroll_speed: self.scroll_speed,
            viewport: self.viewport,
            ground_y: self.ground_y,
            ground_height: self.tuning.ground_height,
            player: self.player.clone(),
            obstacles: self.obstacles.clone(),
            collectibles: self.collectibles.clone(),
            particles: self.particles.clone(),
            crush_ticks: self.tuning.crush_ticks,
            collect_ticks: self.tuning.collect_ticks,
            show_speed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(Viewport::new(800.0, 600.0), Tuning::default());
        state.score = 7;
        state.scroll_speed = 5.5;
        let snapshot = state.snapshot();

        assert_eq!(snapshot.phase, GamePhase::Waiting);
        assert_eq!(snapshot.score, 7);
        assert_eq!(snapshot.player, state.player);
        assert_eq!(snapshot.speed_label().as_deref(), Some("5.5x"));
    }

    #[test]
    fn test_speed_label_hidden() {
        let state = GameState::new(Viewport::new(800.0, 600.0), Tuning::default());
        let snapshot = Snapshot {
            show_speed: false,
            ..state.snapshot()
        };
        assert_eq!(snapshot.speed_label(), None);
    }

    #[test]
    fn test_snapshot_json() {
        let state = GameState::new(Viewport::new(800.0, 600.0), Tuning::default());
        let json = state.snapshot().to_json().unwrap();
        assert!(json.contains("\"phase\":\"Waiting\""));
        assert!(json.contains("\"ground_y\":520.0"));
    }
}
