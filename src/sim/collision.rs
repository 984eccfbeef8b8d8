//! Collision detection for axis-aligned boxes
//!
//! Every entity in the world is an upright rectangle, so all checks reduce to
//! interval overlap on both axes. Touching edges do not count as contact.

use glam::Vec2;

use super::effects;
use super::particles;
use super::state::{GameEvent, GameState, Obstacle};
use crate::consts::*;

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        a_max.x > other.min.x && self.min.x < b_max.x && a_max.y > other.min.y && self.min.y < b_max.y
    }

    /// Strict overlap on the x axis only
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.max().x > left && self.min.x < right
    }
}

/// Check a box against both segments of an obstacle pair
pub fn hits_obstacle(bird: &Aabb, obstacle: &Obstacle) -> bool {
    if !bird.overlaps_x(obstacle.x, obstacle.right_edge()) {
        return false;
    }
    bird.min.y < obstacle.top_height || bird.max().y > obstacle.bottom_top()
}

/// Check if a box has left the world vertically
pub fn out_of_bounds(bird: &Aabb) -> bool {
    bird.min.y < 0.0 || bird.max().y > WORLD_HEIGHT
}

/// Check if a point lies outside the visible world
pub fn off_screen(pos: Vec2) -> bool {
    pos.x < 0.0 || pos.x > WORLD_WIDTH || pos.y < 0.0 || pos.y > WORLD_HEIGHT
}

/// Score every obstacle the bird has just cleared, ramping the base speed.
/// Must run before scrolled obstacles are culled.
pub fn mark_passed(state: &mut GameState) -> u32 {
    let bird_x = state.bird.pos.x;
    let mut passed = 0;
    for ob in state.obstacles.iter_mut().filter(|ob| !ob.passed) {
        if bird_x > ob.right_edge() {
            ob.passed = true;
            passed += 1;
        }
    }
    state.score += passed;
    state.base_speed += passed as f32 * SPEED_RAMP_PER_PASS;
    passed
}

/// Run the bird-vs-world checks for one tick.
///
/// Returns true when a terminal collision happened. Deflected arrows and
/// collected power-ups are resolved in place.
pub fn resolve(state: &mut GameState, now_ms: f64) -> bool {
    if !state.is_playing() {
        return false;
    }

    let bird = state.bird.bounds();
    let shielded = effects::is_active(&state.effects, super::state::PowerUpKind::Shield);

    // Obstacles (shield passes straight through)
    if !shielded && state.obstacles.iter().any(|ob| hits_obstacle(&bird, ob)) {
        log::debug!("Bird hit an obstacle at x={:.1}", bird.min.x);
        return true;
    }

    // Arrows
    let mut i = 0;
    while i < state.projectiles.len() {
        if !bird.overlaps(&state.projectiles[i].bounds()) {
            i += 1;
            continue;
        }
        let arrow = state.projectiles.remove(i);
        if shielded {
            particles::burst(state, arrow.center(), 0x00BFFF, DEFLECT_PARTICLES);
            state.emit(GameEvent::ArrowDeflected);
            log::debug!("Shield deflected arrow {}", arrow.id);
        } else {
            log::debug!("Bird hit by arrow {}", arrow.id);
            return true;
        }
    }

    // Power-ups
    let mut collected = Vec::new();
    state.power_ups.retain_mut(|p| {
        if !p.collected && bird.overlaps(&p.bounds()) {
            p.collected = true;
            collected.push(p.kind);
            false
        } else {
            true
        }
    });
    for kind in collected {
        effects::collect(state, kind, now_ms);
    }

    false
}
