//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, time supplied by the caller
//! - Seeded RNG only
//! - Insertion-ordered entity collections
//! - No rendering, audio or platform dependencies

pub mod character;
pub mod collision;
pub mod effects;
pub mod hazards;
pub mod particles;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use character::{CharacterKind, CharacterProfile};
pub use collision::Aabb;
pub use state::{
    ActiveEffects, Bird, Effect, GameEvent, GamePhase, GameState, Hazard, Obstacle, Particle,
    PowerUp, PowerUpKind, Projectile,
};
pub use tick::{TickInput, start_run, tick};
