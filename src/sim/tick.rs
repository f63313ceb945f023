//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by one tick. The order of
//! operations inside a playing tick is fixed: difficulty and physics, spawning,
//! obstacles, collectibles, particles.

use rand::Rng;

use super::geometry::landed_on_top;
use super::particles;
use super::physics;
use super::spawner;
use super::state::{Collectible, GameEvent, GamePhase, GameState, Obstacle};
use crate::consts::MAX_FRAME_MS;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (key, tap or click). Several triggers in one frame are one jump.
    pub jump: bool,
}

/// Advance the game state by one tick of `dt_ms` simulated milliseconds
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, dt_ms: f64, rng: &mut R) {
    // Nothing can be placed against a degenerate viewport; leave the clock alone too
    if !state.geometry_valid() {
        return;
    }

    state.clock_ms += dt_ms.clamp(0.0, MAX_FRAME_MS);

    if input.jump {
        jump(state);
    }

    if state.phase == GamePhase::Playing {
        physics::advance(state);
        spawner::spawn_obstacles(state, rng);
        spawner::spawn_collectible(state, rng);
        update_obstacles(state, rng);
        update_collectibles(state, rng);
        particles::update(
            &mut state.particles,
            state.tuning.particle_gravity,
            state.tuning.particle_drag,
        );
    }
}

/// Apply a jump command according to the current phase
pub fn jump(state: &mut GameState) {
    match state.phase {
        GamePhase::Waiting => {
            state.phase = GamePhase::Playing;
            state.run_started_at = state.clock_ms;
            state.player.running = true;
            state.player.jump(state.tuning.jump_impulse);
            state.push_event(GameEvent::RunStarted);
            state.push_event(GameEvent::Jumped);
            log::info!("Run started");
        }
        GamePhase::Playing => {
            // Airborne jumps are ignored (no double jump)
            if state.player.jump(state.tuning.jump_impulse) {
                state.push_event(GameEvent::Jumped);
            }
        }
        GamePhase::GameOver => {
            state.reset_run();
            state.push_event(GameEvent::Restarted);
            log::info!("Restarted");
        }
    }
}

/// Scroll obstacles, resolve landings and head-on collisions, cull
fn update_obstacles<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    let speed = state.scroll_speed;
    let crush_ticks = state.tuning.crush_ticks;
    let mut obstacles = std::mem::take(&mut state.obstacles);

    obstacles.retain_mut(|obstacle| {
        obstacle.pos.x -= speed;

        if obstacle.crushed {
            obstacle.crush_ticks += 1;
            return obstacle.crush_ticks < crush_ticks;
        }

        // Once the run has ended this tick, nothing else collides
        if state.phase == GamePhase::Playing {
            let player = state.player.aabb();
            let bounds = obstacle.aabb();
            // Landing takes precedence: a landing box also intersects
            if landed_on_top(
                &player,
                state.player.velocity_y,
                &bounds,
                state.tuning.landing_tolerance,
            ) {
                crush(state, obstacle, rng);
            } else if player.intersects(&bounds) {
                end_run(state);
            }
        }

        obstacle.pos.x > -obstacle.size.x
    });

    state.obstacles = obstacles;
}

fn crush<R: Rng + ?Sized>(state: &mut GameState, obstacle: &mut Obstacle, rng: &mut R) {
    obstacle.crushed = true;
    obstacle.crush_ticks = 0;

    let points = obstacle.kind.points();
    state.score += points;
    state.player.velocity_y = obstacle.kind.bounce();
    state.player.jumping = true;

    particles::crush_burst(
        &mut state.particles,
        state.max_particles,
        obstacle.pos,
        obstacle.kind,
        rng,
    );
    state.push_event(GameEvent::Landed {
        kind: obstacle.kind,
        points,
    });
}

fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    let new_best = state.score > state.high_score;
    if new_best {
        state.high_score = state.score;
        log::info!("New high score: {}", state.score);
    }
    state.push_event(GameEvent::Collision {
        score: state.score,
        new_best,
    });
    log::info!("Game over: score {} at level {}", state.score, state.level);
}

/// Scroll collectibles along their zigzag, resolve pickups, cull
fn update_collectibles<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    let speed = state.scroll_speed;
    let collect_ticks = state.tuning.collect_ticks;
    let amplitude = state.tuning.zigzag_amplitude;
    let mut collectibles = std::mem::take(&mut state.collectibles);

    collectibles.retain_mut(|collectible| {
        collectible.pos.x -= speed;

        if collectible.collected {
            collectible.collect_ticks += 1;
            return collectible.collect_ticks < collect_ticks;
        }

        collectible.zigzag_phase += collectible.zigzag_speed;
        collectible.pos.y = collectible.base_y + collectible.zigzag_phase.sin() * amplitude;

        if state.phase == GamePhase::Playing && state.player.aabb().intersects(&collectible.aabb())
        {
            collect(state, collectible, rng);
        }

        collectible.pos.x > -collectible.size.x
    });

    state.collectibles = collectibles;
}

/// Pick up a collectible. The player's motion is left untouched.
fn collect<R: Rng + ?Sized>(state: &mut GameState, collectible: &mut Collectible, rng: &mut R) {
    collectible.collected = true;
    collectible.collect_ticks = 0;

    let points = state.tuning.collectible_bonus;
    state.score += points;

    particles::collect_burst(
        &mut state.particles,
        state.max_particles,
        collectible.pos,
        rng,
    );
    state.push_event(GameEvent::Collected { points });
}
