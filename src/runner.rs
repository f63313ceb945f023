//! Host-side driver
//!
//! Owns the simulation, its RNG and the collaborators around it, and turns
//! variable display frames into fixed simulation ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::highscores::HighScore;
use crate::platform::{Feedback, Trigger, apply_trigger};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, Viewport, tick};
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct Game<F: Feedback> {
    state: GameState,
    rng: Pcg32,
    feedback: F,
    settings: Settings,
    best: HighScore,
    accumulator: f32,
    input: TickInput,
}

impl<F: Feedback> Game<F> {
    pub fn new(
        viewport: Viewport,
        tuning: Tuning,
        settings: Settings,
        best: HighScore,
        seed: u64,
        feedback: F,
    ) -> Self {
        let mut state = GameState::new(viewport, tuning);
        state.high_score = best.score;
        state.max_particles = settings.max_particles();
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state,
            rng: Pcg32::seed_from_u64(seed),
            feedback,
            settings,
            best,
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn high_score(&self) -> HighScore {
        self.best
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            show_speed: self.settings.show_speed,
            ..self.state.snapshot()
        }
    }

    /// Queue a raw input; applied at the start of the next tick
    pub fn press(&mut self, trigger: &Trigger) {
        apply_trigger(&mut self.input, trigger);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.set_viewport(Viewport::new(width, height));
    }

    /// Apply and persist new preferences
    pub fn apply_settings(&mut self, settings: Settings) {
        self.state.max_particles = settings.max_particles();
        settings.save();
        self.settings = settings;
    }

    /// Run simulation ticks for a display frame of `dt` seconds.
    /// Returns the number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, 0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(
                &mut self.state,
                &self.input,
                f64::from(SIM_DT) * 1000.0,
                &mut self.rng,
            );
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input = TickInput::default();
            self.dispatch_events();
        }

        substeps
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            if let GameEvent::Collision { score, new_best } = event {
                if new_best && self.best.record(score, self.state.level) {
                    self.best.save();
                }
            }
            if self.settings.haptics {
                self.feedback.notify(&event);
            }
        }
    }
}
