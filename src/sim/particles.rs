//! Cosmetic particle bursts
//!
//! Particles use their own RNG stream and never feed back into gameplay.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle};
use crate::consts::*;

/// Spawn a burst of `count` particles at `pos` (doubled for explosive birds)
pub fn burst(state: &mut GameState, pos: Vec2, color: u32, count: usize) {
    let count = count * state.character.particle_multiplier();
    for _ in 0..count {
        let vel = Vec2::new(
            state.fx_rng.random_range(-3.0..3.0),
            state.fx_rng.random_range(-3.0..3.0),
        );
        let particle = Particle {
            pos,
            vel,
            size: state.fx_rng.random_range(2.0..6.0),
            color,
            life: 1.0,
            decay: state.fx_rng.random_range(0.02..0.04),
        };
        push_capped(&mut state.particles, particle);
    }
}

/// Push a particle, evicting the oldest ones beyond the cap
fn push_capped(particles: &mut Vec<Particle>, particle: Particle) {
    particles.push(particle);
    trim(particles);
}

fn trim(particles: &mut Vec<Particle>) {
    if particles.len() > MAX_PARTICLES {
        let excess = particles.len() - MAX_PARTICLES;
        particles.drain(..excess);
    }
}

/// Advance all particles by one tick
pub fn update(particles: &mut Vec<Particle>) {
    trim(particles);
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.life -= p.decay;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CharacterKind;
    use proptest::prelude::*;
    use rand::Rng;

    fn particle(life: f32, decay: f32) -> Particle {
        Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -1.0),
            size: 3.0,
            color: 0xFFFFFF,
            life,
            decay,
        }
    }

    #[test]
    fn test_update_moves_and_decays() {
        let mut particles = vec![particle(1.0, 0.25)];
        update(&mut particles);
        let p = &particles[0];
        assert_eq!(p.pos, Vec2::new(1.0, -1.0));
        assert!((p.vel.y - (-1.0 + PARTICLE_GRAVITY)).abs() < 1e-6);
        assert_eq!(p.life, 0.75);
    }

    #[test]
    fn test_dead_particles_removed() {
        let mut particles = vec![particle(0.1, 0.2), particle(1.0, 0.2)];
        update(&mut particles);
        assert_eq!(particles.len(), 1);
        assert!((particles[0].life - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_oldest_evicted_first() {
        let mut particles: Vec<Particle> = (0..MAX_PARTICLES + 5)
            .map(|i| {
                let mut p = particle(1.0, 0.01);
                p.color = i as u32;
                p
            })
            .collect();
        update(&mut particles);
        assert_eq!(particles.len(), MAX_PARTICLES);
        assert_eq!(particles[0].color, 5);
    }

    #[test]
    fn test_explosive_bird_doubles_burst() {
        let mut state = GameState::new(9);
        burst(&mut state, Vec2::ZERO, 0xFF0000, 4);
        assert_eq!(state.particles.len(), 4);

        state.particles.clear();
        state.set_character(CharacterKind::Black);
        burst(&mut state, Vec2::ZERO, 0xFF0000, 4);
        assert_eq!(state.particles.len(), 8);
    }

    #[test]
    fn test_burst_respects_cap() {
        let mut state = GameState::new(9);
        burst(&mut state, Vec2::ZERO, 0xFF0000, MAX_PARTICLES * 2);
        assert_eq!(state.particles.len(), MAX_PARTICLES);
    }

    #[test]
    fn test_burst_does_not_touch_gameplay_rng() {
        let mut a = GameState::new(11);
        let b = GameState::new(11);
        burst(&mut a, Vec2::ZERO, 0, 20);
        let (mut ra, mut rb) = (a.rng.clone(), b.rng.clone());
        assert_eq!(ra.random::<u32>(), rb.random::<u32>());
    }

    proptest! {
        #[test]
        fn prop_population_capped(initial in 0usize..400, bursts in 0usize..10, seed in any::<u64>()) {
            let mut state = GameState::new(seed);
            state.particles = (0..initial).map(|_| particle(1.0, 0.03)).collect();
            for _ in 0..bursts {
                burst(&mut state, Vec2::ZERO, 0, 15);
                update(&mut state.particles);
                prop_assert!(state.particles.len() <= MAX_PARTICLES);
            }
            update(&mut state.particles);
            prop_assert!(state.particles.len() <= MAX_PARTICLES);
        }
    }
}
