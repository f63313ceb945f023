//! Smash Runner entry point
//!
//! Native builds run a headless demo: an autopilot plays one run and the
//! result is logged. Web hosts embed the library directly.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use smash_runner::consts::SIM_DT;
    use smash_runner::platform::{LogFeedback, Trigger};
    use smash_runner::sim::{GamePhase, Viewport};
    use smash_runner::{Game, HighScore, Settings, Tuning};

    env_logger::init();
    log::info!("Smash Runner (native) starting...");

    let tuning = match std::env::var("SMASH_RUNNER_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5EED);
    let mut game = Game::new(
        Viewport::new(800.0, 600.0),
        tuning,
        Settings::load(),
        HighScore::load(),
        seed,
        LogFeedback,
    );

    game.press(&Trigger::Key("Space".into()));

    // Ten simulated minutes at most
    for _ in 0..36_000 {
        if autopilot_should_jump(&game) {
            game.press(&Trigger::Pointer);
        }
        game.update(SIM_DT);
        if game.state().phase == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "Run finished: phase {:?}, score {}, level {}, speed {}",
        snapshot.phase,
        snapshot.score,
        snapshot.level,
        snapshot.speed_label().unwrap_or_default()
    );
    println!(
        "score={} level={} best={}",
        snapshot.score,
        snapshot.level,
        game.high_score().score
    );
}

/// Jump when the nearest live obstacle is about to reach the player
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_should_jump<F: smash_runner::platform::Feedback>(
    game: &smash_runner::Game<F>,
) -> bool {
    let state = game.state();
    if state.player.jumping {
        return false;
    }
    let front = state.player.pos.x + state.player.size.x;
    state
        .obstacles
        .iter()
        .filter(|o| !o.crushed && o.pos.x + o.size.x > state.player.pos.x)
        .any(|o| o.pos.x - front < state.scroll_speed * 12.0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `smash_runner::Game` themselves
}
