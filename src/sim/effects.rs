//! Timed power-up effects
//!
//! Each kind is an independent `(active, activated_at)` flag. Kinds stack; a
//! second pickup of the same kind restarts its timer.

use super::particles;
use super::state::{ActiveEffects, Effect, GameEvent, GameState, PowerUpKind};
use crate::consts::*;

fn effect(effects: &ActiveEffects, kind: PowerUpKind) -> &Effect {
    match kind {
        PowerUpKind::Shield => &effects.shield,
        PowerUpKind::Speed => &effects.speed,
        PowerUpKind::Slow => &effects.slow,
    }
}

fn effect_mut(effects: &mut ActiveEffects, kind: PowerUpKind) -> &mut Effect {
    match kind {
        PowerUpKind::Shield => &mut effects.shield,
        PowerUpKind::Speed => &mut effects.speed,
        PowerUpKind::Slow => &mut effects.slow,
    }
}

pub fn is_active(effects: &ActiveEffects, kind: PowerUpKind) -> bool {
    effect(effects, kind).active
}

/// Turn an effect on as of `now_ms`
pub fn activate(effects: &mut ActiveEffects, kind: PowerUpKind, now_ms: f64) {
    *effect_mut(effects, kind) = Effect {
        active: true,
        activated_at_ms: now_ms,
    };
}

/// Deactivate every effect whose window `[activated_at, activated_at + duration)`
/// no longer contains `now_ms`
pub fn expire(effects: &mut ActiveEffects, now_ms: f64) {
    for kind in PowerUpKind::ALL {
        let e = effect_mut(effects, kind);
        if e.active && now_ms - e.activated_at_ms >= kind.duration_ms() {
            e.active = false;
            log::debug!("{:?} expired", kind);
        }
    }
}

/// Remaining time of an active effect, for HUD timers
pub fn remaining_ms(effects: &ActiveEffects, kind: PowerUpKind, now_ms: f64) -> Option<f64> {
    let e = effect(effects, kind);
    e.active
        .then(|| (kind.duration_ms() - (now_ms - e.activated_at_ms)).max(0.0))
}

/// Scroll (or projectile) speed after speed boost, then slow motion
pub fn scaled_speed(effects: &ActiveEffects, base: f32) -> f32 {
    let boosted = if effects.speed.active {
        base * SPEED_BOOST_FACTOR
    } else {
        base
    };
    if effects.slow.active {
        boosted * SLOW_MOTION_FACTOR
    } else {
        boosted
    }
}

/// Apply a picked-up power-up: effect, points, particles and event
pub fn collect(state: &mut GameState, kind: PowerUpKind, now_ms: f64) {
    activate(&mut state.effects, kind, now_ms);
    state.score += kind.points();
    let center = state.bird.center();
    particles::burst(state, center, kind.color(), PICKUP_PARTICLES);
    state.emit(GameEvent::PowerUpCollected(kind));
    log::debug!("Collected {:?} (score {})", kind, state.score);
}
