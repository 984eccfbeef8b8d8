//! Bird integration and world scrolling
//!
//! All motion is per tick. The world moves left; nothing ever moves right.

use super::effects;
use super::state::{Bird, GameState, PowerUpKind};
use crate::consts::*;

/// Gravity after slow motion
pub fn effective_gravity(state: &GameState) -> f32 {
    if effects::is_active(&state.effects, PowerUpKind::Slow) {
        state.gravity * SLOW_MOTION_FACTOR
    } else {
        state.gravity
    }
}

/// Current world scroll speed
pub fn scroll_speed(state: &GameState) -> f32 {
    effects::scaled_speed(&state.effects, state.base_speed)
}

/// Current speed for newly fired arrows
pub fn projectile_speed(state: &GameState) -> f32 {
    effects::scaled_speed(&state.effects, PROJECTILE_SPEED)
}

/// Visual tilt in degrees for a vertical velocity
pub fn tilt_for(velocity: f32) -> f32 {
    (velocity * BIRD_TILT_FACTOR).clamp(-BIRD_MAX_TILT, BIRD_MAX_TILT)
}

/// Apply gravity then velocity to the bird
pub fn integrate_bird(bird: &mut Bird, gravity: f32) {
    bird.velocity += gravity;
    bird.pos.y += bird.velocity;
    bird.rotation = tilt_for(bird.velocity);
}

/// Move the background at half the world speed, wrapping every screen width
pub fn scroll_background(state: &mut GameState, speed: f32) {
    state.background_x -= speed * 0.5;
    if state.background_x <= -WORLD_WIDTH {
        state.background_x = 0.0;
    }
}

/// Shift every world-anchored entity left by `speed`
pub fn scroll_world(state: &mut GameState, speed: f32) {
    for ob in &mut state.obstacles {
        ob.x -= speed;
    }
    for pig in &mut state.hazards {
        pig.pos.x -= speed;
    }
    for p in &mut state.power_ups {
        p.pos.x -= speed;
    }
}

/// Drop obstacles and power-ups that have fully left the screen
pub fn cull_scrolled(state: &mut GameState) {
    state.obstacles.retain(|ob| ob.right_edge() >= 0.0);
    state.power_ups.retain(|p| p.pos.x + p.size.x >= 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integrate_bird() {
        let mut bird = Bird {
            velocity: 2.0,
            ..Default::default()
        };
        let y0 = bird.pos.y;
        integrate_bird(&mut bird, 0.1);
        assert!((bird.velocity - 2.1).abs() < 1e-6);
        assert_eq!(bird.pos.y, y0 + bird.velocity);
        assert!((bird.rotation - 6.3).abs() < 1e-5);
    }

    #[test]
    fn test_slow_motion_halves_gravity() {
        let mut state = GameState::new(1);
        let g = state.gravity;
        assert_eq!(effective_gravity(&state), g);
        effects::activate(&mut state.effects, PowerUpKind::Slow, 0.0);
        assert_eq!(effective_gravity(&state), g * 0.5);
    }

    #[test]
    fn test_projectile_speed_follows_effects() {
        let mut state = GameState::new(1);
        assert_eq!(projectile_speed(&state), 5.0);
        effects::activate(&mut state.effects, PowerUpKind::Speed, 0.0);
        assert_eq!(projectile_speed(&state), 7.5);
        effects::activate(&mut state.effects, PowerUpKind::Slow, 0.0);
        assert_eq!(projectile_speed(&state), 3.75);
    }

    #[test]
    fn test_background_wraps() {
        let mut state = GameState::new(1);
        state.background_x = -WORLD_WIDTH + 0.5;
        scroll_background(&mut state, 2.0);
        assert_eq!(state.background_x, 0.0);

        scroll_background(&mut state, 2.0);
        assert_eq!(state.background_x, -1.0);
    }

    #[test]
    fn test_cull_scrolled() {
        let mut state = GameState::new(1);
        crate::sim::spawner::spawn_obstacle(&mut state, -OBSTACLE_WIDTH - 1.0);
        crate::sim::spawner::spawn_obstacle(&mut state, -OBSTACLE_WIDTH + 1.0);
        cull_scrolled(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, -OBSTACLE_WIDTH + 1.0);
    }

    #[test]
    fn test_cull_scrolled_power_ups() {
        use crate::sim::state::PowerUp;
        use glam::Vec2;

        let mut state = GameState::new(1);
        for (id, x) in [(1, -POWER_UP_SIZE - 0.5), (2, -POWER_UP_SIZE)] {
            state.power_ups.push(PowerUp {
                id,
                kind: PowerUpKind::Speed,
                pos: Vec2::new(x, 300.0),
                size: Vec2::splat(POWER_UP_SIZE),
                collected: false,
            });
        }
        cull_scrolled(&mut state);
        assert_eq!(state.power_ups.len(), 1);
        assert_eq!(state.power_ups[0].id, 2);
    }

    proptest! {
        #[test]
        fn prop_tilt_clamped(v in -1000.0f32..1000.0) {
            let t = tilt_for(v);
            prop_assert!((-BIRD_MAX_TILT..=BIRD_MAX_TILT).contains(&t));
        }

        #[test]
        fn prop_world_never_moves_right(seed in any::<u64>(), speed in 0.0f32..20.0) {
            let mut state = GameState::new(seed);
            crate::sim::spawner::prepopulate(&mut state);
            let obstacles: Vec<f32> = state.obstacles.iter().map(|o| o.x).collect();
            let pigs: Vec<f32> = state.hazards.iter().map(|h| h.pos.x).collect();
            let power_ups: Vec<f32> = state.power_ups.iter().map(|p| p.pos.x).collect();
            scroll_world(&mut state, speed);
            for (b, ob) in obstacles.iter().zip(&state.obstacles) {
                prop_assert!(ob.x <= *b);
            }
            for (b, pig) in pigs.iter().zip(&state.hazards) {
                prop_assert!(pig.pos.x <= *b);
            }
            for (b, p) in power_ups.iter().zip(&state.power_ups) {
                prop_assert!(p.pos.x <= *b);
            }
        }
    }
}
