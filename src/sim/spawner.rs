//! Procedural obstacle and collectible generation
//!
//! Both spawners are gated on the simulation clock and the current
//! difficulty; all randomness comes from the caller's RNG.

use glam::Vec2;
use rand::Rng;

use super::geometry::{Aabb, would_overlap_reserved_area};
use super::state::{Collectible, GameState, Obstacle, ObstacleSize};
use crate::consts::COLLECTIBLE_SIZE;
use crate::tuning::Tuning;

/// Milliseconds between obstacle spawns at a given level and score
pub fn obstacle_delay(level: u32, score: u64, tuning: &Tuning) -> f64 {
    let delay = tuning.obstacle_delay_base_ms
        - level as f64 * tuning.obstacle_delay_per_level_ms
        - score as f64 * tuning.obstacle_delay_per_point_ms;
    delay.max(tuning.obstacle_delay_min_ms)
}

/// Milliseconds between collectible spawn attempts at a given level
pub fn collectible_delay(level: u32, tuning: &Tuning) -> f64 {
    let delay =
        tuning.collectible_delay_base_ms - level as f64 * tuning.collectible_delay_per_level_ms;
    delay.max(tuning.collectible_delay_min_ms)
}

/// Whether `delay` ms have passed since `last` (an unset timer is always due)
fn due(now: f64, last: Option<f64>, delay: f64) -> bool {
    last.is_none_or(|last| now - last > delay)
}

/// Size classes available at a level
pub fn size_pool(level: u32, tuning: &Tuning) -> &'static [ObstacleSize] {
    const EARLY: [ObstacleSize; 2] = [ObstacleSize::Small, ObstacleSize::Medium];
    const LATE: [ObstacleSize; 3] = [
        ObstacleSize::Small,
        ObstacleSize::Medium,
        ObstacleSize::Large,
    ];
    if level > tuning.large_after_level {
        &LATE
    } else {
        &EARLY
    }
}

/// Spawn obstacles if the spawn delay has elapsed. Returns how many spawned.
pub fn spawn_obstacles<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> usize {
    let now = state.clock_ms;
    let delay = obstacle_delay(state.level, state.score, &state.tuning);
    if !due(now, state.last_obstacle_spawn, delay) {
        return 0;
    }
    state.last_obstacle_spawn = Some(now);

    let pool = size_pool(state.level, &state.tuning);
    let kind = pool[rng.random_range(0..pool.len())];
    let x = state.viewport.width;
    state
        .obstacles
        .push(Obstacle::on_ground(kind, x, state.ground_y));

    let double = state.level > state.tuning.double_after_level
        && rng.random_bool(state.tuning.double_chance);
    if double {
        state.obstacles.push(Obstacle::on_ground(
            kind,
            x + state.tuning.double_gap,
            state.ground_y,
        ));
    }

    log::debug!(
        "Spawned {:?} obstacle{} at t={:.0}ms",
        kind,
        if double { " pair" } else { "" },
        now
    );
    if double { 2 } else { 1 }
}

/// Pick a collectible position clear of every obstacle, if one can be found
fn place_collectible<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<Vec2> {
    let tuning = &state.tuning;
    let min_y = state.ground_y - tuning.reachable_height();
    let max_y = state.ground_y - tuning.collectible_min_clearance;
    let size = Vec2::splat(COLLECTIBLE_SIZE);
    let reserved: Vec<Aabb> = state.obstacles.iter().map(Obstacle::aabb).collect();

    (0..tuning.collectible_attempts).find_map(|_| {
        let x = state.viewport.width + rng.random::<f32>() * tuning.collectible_spread;
        let y = min_y + rng.random::<f32>() * (max_y - min_y);
        let candidate = Aabb::new(Vec2::new(x, y), size);
        (!would_overlap_reserved_area(&candidate, &reserved, tuning.collectible_buffer))
            .then_some(candidate.pos)
    })
}

/// Spawn a collectible if its delay has elapsed and the chance roll succeeds.
/// Returns true if one was placed.
pub fn spawn_collectible<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> bool {
    let now = state.clock_ms;
    let delay = collectible_delay(state.level, &state.tuning);
    if !due(now, state.last_collectible_spawn, delay)
        || !rng.random_bool(state.tuning.collectible_chance)
    {
        return false;
    }
    state.last_collectible_spawn = Some(now);

    let Some(pos) = place_collectible(state, rng) else {
        log::debug!("No clear spot for a collectible, skipping");
        return false;
    };

    let tuning = &state.tuning;
    let speed = tuning.zigzag_speed_min
        + rng.random::<f32>() * (tuning.zigzag_speed_max - tuning.zigzag_speed_min);
    state.collectibles.push(Collectible::new(pos, speed));
    true
}
