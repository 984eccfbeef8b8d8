//! Pig behaviour and arrow flight

use glam::Vec2;

use super::collision::off_screen;
use super::physics;
use super::state::{GameEvent, GameState, Hazard, Projectile};
use crate::consts::*;

/// Velocity from `from` toward `to` at `speed`; zero when the points coincide
pub fn aim(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalize_or_zero() * speed
}

fn ready_to_fire(pig: &Hazard, now_ms: f64) -> bool {
    let on_screen = pig.pos.x > 0.0 && pig.pos.x < WORLD_WIDTH;
    let reloaded = match pig.last_fire_ms {
        Some(last) => now_ms - last > pig.fire_interval_ms,
        None => true,
    };
    on_screen && reloaded
}

/// Let every visible, reloaded pig shoot at the bird, then drop pigs that
/// have scrolled away. Pigs must already have been scrolled this tick.
pub fn update_hazards(state: &mut GameState, now_ms: f64) {
    let target = state.bird.pos;
    let speed = physics::projectile_speed(state);

    let mut shots = Vec::new();
    for pig in &mut state.hazards {
        if ready_to_fire(pig, now_ms) {
            pig.last_fire_ms = Some(now_ms);
            shots.push((pig.id, pig.pos));
        }
    }

    for (pig_id, origin) in shots {
        let vel = aim(origin, target, speed);
        let delta = target - origin;
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos: origin,
            vel,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            rotation: delta.y.atan2(delta.x),
        });
        state.emit(GameEvent::HazardFired);
        log::debug!("Pig {} fired arrow {}", pig_id, id);
    }

    state.hazards.retain(|pig| pig.pos.x >= -pig.size.x);
}

/// Move arrows along their fixed velocity and drop the ones that left the screen
pub fn update_projectiles(state: &mut GameState) {
    for arrow in &mut state.projectiles {
        arrow.pos += arrow.vel;
    }
    state.projectiles.retain(|arrow| !off_screen(arrow.pos));
}
