//! Cosmetic particle bursts

use glam::Vec2;
use rand::Rng;

use super::state::{ObstacleSize, Particle};

/// Gold, white, yellow, orange, purple, pink
const CRUSH_PALETTE: [u32; 6] = [0xFFD700, 0xFFFFFF, 0xFFC107, 0xFFA500, 0x8A2BE2, 0xFF1493];
/// Dark gold, orange gold, white, medium gold
const COLLECT_PALETTE: [u32; 4] = [0xD97706, 0xB45309, 0xFFFFFF, 0xFBBF24];

const CRUSH_LIFE: f32 = 40.0;
const COLLECT_LIFE: f32 = 30.0;
const COLLECT_COUNT: usize = 15;

/// Shape of a burst
struct Burst {
    count: usize,
    spread: f32,
    speed: f32,
    lift: f32,
    life: f32,
    min_size: f32,
    size_range: f32,
    palette: &'static [u32],
}

fn emit<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    cap: usize,
    origin: Vec2,
    burst: &Burst,
    rng: &mut R,
) {
    for _ in 0..burst.count {
        if particles.len() >= cap {
            break;
        }
        let offset = Vec2::new(rng.random::<f32>(), rng.random::<f32>()) * burst.spread;
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * burst.speed,
            (rng.random::<f32>() - 0.5) * burst.speed - burst.lift,
        );
        let color = burst.palette[rng.random_range(0..burst.palette.len())];
        particles.push(Particle {
            pos: origin + offset,
            vel,
            life: burst.life,
            max_life: burst.life,
            color,
            size: rng.random::<f32>() * burst.size_range + burst.min_size,
        });
    }
}

/// Debris from a crushed obstacle (bigger boxes throw more)
pub fn crush_burst<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    cap: usize,
    origin: Vec2,
    kind: ObstacleSize,
    rng: &mut R,
) {
    let burst = Burst {
        count: kind.particle_count(),
        spread: 40.0,
        speed: 12.0,
        lift: 3.0,
        life: CRUSH_LIFE,
        min_size: 2.0,
        size_range: 4.0,
        palette: &CRUSH_PALETTE,
    };
    emit(particles, cap, origin, &burst, rng);
}

/// Sparkles from a picked-up collectible
pub fn collect_burst<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    cap: usize,
    origin: Vec2,
    rng: &mut R,
) {
    let burst = Burst {
        count: COLLECT_COUNT,
        spread: 30.0,
        speed: 8.0,
        lift: 2.0,
        life: COLLECT_LIFE,
        min_size: 1.0,
        size_range: 3.0,
        palette: &COLLECT_PALETTE,
    };
    emit(particles, cap, origin, &burst, rng);
}

/// Integrate, age and cull particles for one tick
pub fn update(particles: &mut Vec<Particle>, gravity: f32, drag: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += gravity;
        particle.vel.x *= drag;
        particle.life -= 1.0;
    }
    particles.retain(|p| p.life > 0.0);
}
