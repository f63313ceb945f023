//! Axis-aligned collision geometry
//!
//! Screen coordinates: x grows to the right, y grows downward, so an entity's
//! "top" is its smallest y and the ground line is a large y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Grow the box by `margin` on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }

    /// Strict horizontal overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Strict overlap on both axes (touching edges do not count)
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }
}

/// Whether a player box is arriving on top of an obstacle
///
/// True when the horizontal ranges overlap, the player's feet sit between the
/// obstacle's top edge and `tolerance` below it, and the player is not rising.
/// Must be checked before [`Aabb::intersects`]: a landing also intersects.
pub fn landed_on_top(player: &Aabb, velocity_y: f32, obstacle: &Aabb, tolerance: f32) -> bool {
    let feet = player.bottom();
    let top = obstacle.top();
    player.overlaps_x(obstacle) && feet >= top && feet <= top + tolerance && velocity_y >= 0.0
}

/// Whether a candidate box comes within `buffer` of any obstacle
pub fn would_overlap_reserved_area<'a, I>(candidate: &Aabb, obstacles: I, buffer: f32) -> bool
where
    I: IntoIterator<Item = &'a Aabb>,
{
    obstacles
        .into_iter()
        .any(|obstacle| candidate.intersects(&obstacle.expand(buffer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_intersects_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&boxed(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&boxed(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.intersects(&boxed(-10.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_landed_on_top_within_tolerance() {
        let obstacle = boxed(100.0, 465.0, 35.0, 35.0);
        // Feet 5 units below the top edge, falling
        let player = boxed(90.0, 420.0, 50.0, 50.0);
        assert!(landed_on_top(&player, 3.0, &obstacle, 15.0));
        // A landing also intersects; callers must check landing first
        assert!(player.intersects(&obstacle));
    }

    #[test]
    fn test_landed_on_top_edges_of_band() {
        let obstacle = boxed(100.0, 465.0, 35.0, 35.0);
        // Feet exactly on the top edge
        assert!(landed_on_top(&boxed(100.0, 415.0, 50.0, 50.0), 0.0, &obstacle, 15.0));
        // Feet exactly at the bottom of the tolerance band
        assert!(landed_on_top(&boxed(100.0, 430.0, 50.0, 50.0), 0.0, &obstacle, 15.0));
        // Just past it
        assert!(!landed_on_top(&boxed(100.0, 430.5, 50.0, 50.0), 0.0, &obstacle, 15.0));
    }

    #[test]
    fn test_rising_player_does_not_land() {
        let obstacle = boxed(100.0, 465.0, 35.0, 35.0);
        let player = boxed(90.0, 420.0, 50.0, 50.0);
        assert!(!landed_on_top(&player, -4.0, &obstacle, 15.0));
    }

    #[test]
    fn test_landing_needs_horizontal_overlap() {
        let obstacle = boxed(100.0, 465.0, 35.0, 35.0);
        let player = boxed(135.0, 420.0, 50.0, 50.0);
        assert!(!landed_on_top(&player, 2.0, &obstacle, 15.0));
    }

    #[test]
    fn test_reserved_area_buffer() {
        let obstacles = [boxed(300.0, 465.0, 35.0, 35.0)];
        // 40 units left of the obstacle: clear of the box, inside the buffer
        let near = boxed(230.0, 440.0, 30.0, 30.0);
        assert!(!near.intersects(&obstacles[0]));
        assert!(would_overlap_reserved_area(&near, &obstacles, 50.0));

        let far = boxed(150.0, 440.0, 30.0, 30.0);
        assert!(!would_overlap_reserved_area(&far, &obstacles, 50.0));
    }

    #[test]
    fn test_reserved_area_empty() {
        let candidate = boxed(0.0, 0.0, 30.0, 30.0);
        let none: [Aabb; 0] = [];
        assert!(!would_overlap_reserved_area(&candidate, &none, 50.0));
    }
}
