//! Shape generation for a snapshot
//!
//! Everything is drawn as axis-aligned quads in screen space; the host maps
//! screen space to clip space.

use glam::Vec2;

use super::vertex::{Vertex, colors, rgb};
use crate::sim::{Collectible, Obstacle, ObstacleSize, Particle, Player, Snapshot};

/// Append two triangles covering the rectangle at `pos` (top-left) of `size`
pub fn quad(vertices: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vertices.push(Vertex::new(x0, y0, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x0, y1, color));

    vertices.push(Vertex::new(x0, y1, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x1, y1, color));
}

fn obstacle_color(kind: ObstacleSize) -> u32 {
    match kind {
        ObstacleSize::Small => colors::OBSTACLE_SMALL,
        ObstacleSize::Medium => colors::OBSTACLE_MEDIUM,
        ObstacleSize::Large => colors::OBSTACLE_LARGE,
    }
}

/// Player body; legs shift every 8 ticks while running
pub fn player(vertices: &mut Vec<Vertex>, player: &Player) {
    let stride = if player.running && (player.animation_frame / 8) % 2 == 1 {
        2.0
    } else {
        0.0
    };
    let color = rgb(colors::PLAYER, 1.0);
    let body = Vec2::new(player.size.x, player.size.y * 0.75);
    quad(vertices, player.pos, body, color);

    let leg = Vec2::new(player.size.x * 0.3, player.size.y * 0.25);
    let legs_y = player.pos.y + body.y;
    quad(
        vertices,
        Vec2::new(player.pos.x + stride, legs_y),
        leg,
        color,
    );
    quad(
        vertices,
        Vec2::new(player.pos.x + player.size.x - leg.x - stride, legs_y),
        leg,
        color,
    );
}

/// Obstacle box; crushed boxes squash toward the ground and fade out
pub fn obstacle(vertices: &mut Vec<Vertex>, obstacle: &Obstacle, crush_ticks: u32) {
    let color = obstacle_color(obstacle.kind);
    if !obstacle.crushed {
        quad(vertices, obstacle.pos, obstacle.size, rgb(color, 1.0));
        return;
    }

    let t = obstacle.crush_ticks as f32 / crush_ticks.max(1) as f32;
    let height = obstacle.size.y * (1.0 - t).max(0.1);
    let pos = Vec2::new(obstacle.pos.x, obstacle.pos.y + obstacle.size.y - height);
    quad(
        vertices,
        pos,
        Vec2::new(obstacle.size.x, height),
        rgb(color, (1.0 - t).max(0.0)),
    );
}

/// Collectible; collected ones grow and fade around their center
pub fn collectible(vertices: &mut Vec<Vertex>, collectible: &Collectible, collect_ticks: u32) {
    let (scale, alpha) = if collectible.collected {
        let t = collectible.collect_ticks as f32 / collect_ticks.max(1) as f32;
        (1.0 + t * 0.5, (1.0 - t).max(0.0))
    } else {
        (1.0, 1.0)
    };
    let center = collectible.pos + collectible.size / 2.0;
    let size = collectible.size * scale;
    quad(
        vertices,
        center - size / 2.0,
        size,
        rgb(colors::COLLECTIBLE, alpha),
    );
}

/// Particle square fading with remaining life
pub fn particle(vertices: &mut Vec<Vertex>, particle: &Particle) {
    let alpha = (particle.life / particle.max_life).clamp(0.0, 1.0);
    let size = Vec2::splat(particle.size);
    quad(
        vertices,
        particle.pos - size / 2.0,
        size,
        rgb(particle.color, alpha),
    );
}

/// Build every vertex for one frame, back to front
pub fn frame_vertices(snapshot: &Snapshot) -> Vec<Vertex> {
    let quads = 2
        + 3
        + snapshot.obstacles.len()
        + snapshot.collectibles.len()
        + snapshot.particles.len();
    let mut vertices = Vec::with_capacity(quads * 6);

    let ground = colors::GROUND[(snapshot.level.max(1) as usize - 1) % colors::GROUND.len()];
    quad(
        &mut vertices,
        Vec2::new(0.0, snapshot.ground_y),
        Vec2::new(snapshot.viewport.width, snapshot.ground_height),
        rgb(ground, 1.0),
    );

    player(&mut vertices, &snapshot.player);
    for o in &snapshot.obstacles {
        obstacle(&mut vertices, o, snapshot.crush_ticks);
    }
    for c in &snapshot.collectibles {
        collectible(&mut vertices, c, snapshot.collect_ticks);
    }
    for p in &snapshot.particles {
        particle(&mut vertices, p);
    }

    vertices
}
