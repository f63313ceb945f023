//! Player integration and difficulty progression

use super::state::{GameEvent, GameState, Player};
use crate::tuning::Tuning;

/// Level for a given amount of play time (1-based)
pub fn level_at(elapsed_ms: f64, tuning: &Tuning) -> u32 {
    (elapsed_ms.max(0.0) / tuning.level_duration_ms).floor() as u32 + 1
}

/// Scroll speed for a level and score, clamped to the configured maximum
pub fn scroll_speed(level: u32, score: u64, tuning: &Tuning) -> f32 {
    let speed = tuning.base_scroll_speed
        + level.saturating_sub(1) as f32 * tuning.speed_per_level
        + score as f32 * tuning.speed_per_point;
    speed.min(tuning.max_scroll_speed)
}

/// Apply gravity for one tick and clamp to the ground line
pub fn integrate_player(player: &mut Player, ground_y: f32, gravity: f32) {
    player.velocity_y += gravity;
    player.pos.y += player.velocity_y;

    let rest = player.rest_y(ground_y);
    if player.pos.y >= rest {
        player.pos.y = rest;
        player.velocity_y = 0.0;
        player.jumping = false;
    }
}

/// Advance difficulty and the player for one tick of play
pub fn advance(state: &mut GameState) {
    let elapsed = state.clock_ms - state.run_started_at;
    let level = level_at(elapsed, &state.tuning);
    // One event per level gained, even when a long tick skips several
    while state.level < level {
        state.level += 1;
        state.push_event(GameEvent::LevelUp { level: state.level });
        log::info!("Level up: {}", state.level);
    }

    // Level and score only grow within a run, but keep speed monotonic regardless
    let speed = scroll_speed(state.level, state.score, &state.tuning);
    state.scroll_speed = state.scroll_speed.max(speed);

    integrate_player(&mut state.player, state.ground_y, state.tuning.gravity);
    state.player.animation_frame = state.player.animation_frame.wrapping_add(1);
}
