//! Contact and clearance tests
//!
//! Everything in the game collides through the same axis-aligned proximity
//! test: both axes independently within a fixed radius. Not a rectangle
//! overlap; a Chebyshev-style box test on entity origins.

use glam::Vec2;

use crate::consts::{HIT_RADIUS, MIN_SPAWN_DISTANCE, SPAWN_CLEAR_X};

/// Box test used for every player/entity and projectile/obstacle contact.
pub fn box_hit(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < HIT_RADIUS && (a.y - b.y).abs() < HIT_RADIUS
}

/// A spawn candidate at `point` is clear iff no occupied position sits
/// within `SPAWN_CLEAR_X` horizontally while also closer than
/// `MIN_SPAWN_DISTANCE` vertically.
pub fn spawn_point_clear(point: Vec2, occupied: impl IntoIterator<Item = Vec2>) -> bool {
    occupied.into_iter().all(|p| {
        (p.x - point.x).abs() > SPAWN_CLEAR_X || (p.y - point.y).abs() >= MIN_SPAWN_DISTANCE
    })
}
