//! Procedural obstacle generation
//!
//! Keeps a rolling horizon of obstacle pairs one spacing apart. Each new pair
//! may carry a pig on its top segment and a power-up just past it.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Hazard, Obstacle, PowerUp, PowerUpKind};
use crate::consts::*;

/// Generate an obstacle pair with the left edge at `x`, plus its extras
pub fn spawn_obstacle(state: &mut GameState, x: f32) {
    let max_top = WORLD_HEIGHT - OBSTACLE_GAP - OBSTACLE_MIN_HEIGHT;
    let top_height = state.rng.random_range(OBSTACLE_MIN_HEIGHT..max_top);
    let bottom_height = WORLD_HEIGHT - top_height - OBSTACLE_GAP;

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        x,
        top_height,
        bottom_height,
        width: OBSTACLE_WIDTH,
        passed: false,
    });

    if state.rng.random_bool(HAZARD_CHANCE) {
        let fire_interval_ms = state
            .rng
            .random_range(HAZARD_MIN_INTERVAL_MS..HAZARD_MAX_INTERVAL_MS);
        let id = state.next_entity_id();
        state.hazards.push(Hazard {
            id,
            pos: Vec2::new(x + OBSTACLE_WIDTH / 2.0, top_height - HAZARD_PERCH_OFFSET),
            size: Vec2::splat(HAZARD_SIZE),
            last_fire_ms: None,
            fire_interval_ms,
        });
        log::debug!("Pig {} perched on obstacle at x={:.0}", id, x);
    }

    if state.rng.random_bool(POWER_UP_CHANCE) {
        let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
        let id = state.next_entity_id();
        state.power_ups.push(PowerUp {
            id,
            kind,
            pos: Vec2::new(
                x + OBSTACLE_WIDTH + POWER_UP_OFFSET,
                top_height + OBSTACLE_GAP / 2.0,
            ),
            size: Vec2::splat(POWER_UP_SIZE),
            collected: false,
        });
        log::debug!("{:?} power-up spawned at x={:.0}", kind, x);
    }
}

/// Fill the initial horizon at the start of a run
pub fn prepopulate(state: &mut GameState) {
    for i in 0..INITIAL_OBSTACLES {
        spawn_obstacle(state, WORLD_WIDTH + i as f32 * OBSTACLE_SPACING);
    }
}

/// Add one obstacle past the right-most one once it has scrolled far enough
pub fn extend_horizon(state: &mut GameState) {
    let Some(last_x) = state.obstacles.last().map(|ob| ob.x) else {
        return;
    };
    if last_x < WORLD_WIDTH - OBSTACLE_SPACING {
        spawn_obstacle(state, last_x + OBSTACLE_SPACING);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepopulate_positions() {
        let mut state = GameState::new(5);
        prepopulate(&mut state);
        let xs: Vec<f32> = state.obstacles.iter().map(|ob| ob.x).collect();
        assert_eq!(xs, vec![WORLD_WIDTH, WORLD_WIDTH + 400.0, WORLD_WIDTH + 800.0]);
    }

    #[test]
    fn test_obstacle_heights_in_range() {
        let mut state = GameState::new(77);
        for i in 0..500 {
            spawn_obstacle(&mut state, i as f32);
        }
        for ob in &state.obstacles {
            assert!(ob.top_height >= OBSTACLE_MIN_HEIGHT);
            assert!(ob.top_height < WORLD_HEIGHT - OBSTACLE_GAP - OBSTACLE_MIN_HEIGHT);
            let total = ob.top_height + ob.bottom_height + OBSTACLE_GAP;
            assert!((total - WORLD_HEIGHT).abs() < 1e-3);
        }
    }

    #[test]
    fn test_extras_placement_and_rates() {
        let mut state = GameState::new(2024);
        let n = 2000;
        for _ in 0..n {
            spawn_obstacle(&mut state, 0.0);
        }
        let hazard_rate = state.hazards.len() as f64 / n as f64;
        let power_rate = state.power_ups.len() as f64 / n as f64;
        assert!((hazard_rate - HAZARD_CHANCE).abs() < 0.05, "hazards {}", hazard_rate);
        assert!((power_rate - POWER_UP_CHANCE).abs() < 0.05, "power-ups {}", power_rate);

        for h in &state.hazards {
            assert_eq!(h.pos.x, OBSTACLE_WIDTH / 2.0);
            assert!(h.fire_interval_ms >= HAZARD_MIN_INTERVAL_MS);
            assert!(h.fire_interval_ms < HAZARD_MAX_INTERVAL_MS);
            assert!(h.last_fire_ms.is_none());
        }
        for p in &state.power_ups {
            assert_eq!(p.pos.x, OBSTACLE_WIDTH + POWER_UP_OFFSET);
        }
        for kind in PowerUpKind::ALL {
            assert!(state.power_ups.iter().any(|p| p.kind == kind));
        }
    }

    #[test]
    fn test_hazard_sits_above_gap() {
        let mut state = GameState::new(1);
        while state.hazards.is_empty() {
            spawn_obstacle(&mut state, 300.0);
        }
        let ob = state.obstacles.last().cloned().unwrap();
        let pig = &state.hazards[0];
        assert_eq!(pig.pos.y, ob.top_height - HAZARD_PERCH_OFFSET);
    }

    #[test]
    fn test_extend_horizon() {
        let mut state = GameState::new(5);
        prepopulate(&mut state);

        extend_horizon(&mut state);
        assert_eq!(state.obstacles.len(), 3);

        let last = state.obstacles.len() - 1;
        state.obstacles[last].x = WORLD_WIDTH - OBSTACLE_SPACING - 1.0;
        extend_horizon(&mut state);
        assert_eq!(state.obstacles.len(), 4);
        assert_eq!(state.obstacles[3].x, WORLD_WIDTH - 1.0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = GameState::new(31337);
        let mut b = GameState::new(31337);
        prepopulate(&mut a);
        prepopulate(&mut b);
        for (x, y) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(x.top_height, y.top_height);
        }
        assert_eq!(a.hazards.len(), b.hazards.len());
        assert_eq!(a.power_ups.len(), b.power_ups.len());
    }
}
