//! Sky Siege - A side-scrolling bird vs. pigs arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `session`: Glue between the simulation and its collaborators
//! - `renderer`: Drawing of a read-only `GameState`
//! - `platform`: Browser/native platform abstraction (input translation)
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `audio`: Fire-and-forget sound cues

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
///
/// Distances are in world pixels, speeds in pixels per tick (one tick per
/// display frame) and times in milliseconds.
pub mod consts {
    /// Nominal frame duration, used by hosts without a display clock
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 600.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Bird defaults
    pub const BIRD_START_X: f32 = 150.0;
    pub const BIRD_SIZE: f32 = 50.0;
    /// Rotation clamp (degrees) and velocity-to-degrees factor
    pub const BIRD_MAX_TILT: f32 = 30.0;
    pub const BIRD_TILT_FACTOR: f32 = 3.0;

    /// Obstacle pairs
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const OBSTACLE_GAP: f32 = 300.0;
    pub const OBSTACLE_SPACING: f32 = 400.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 100.0;
    pub const INITIAL_OBSTACLES: usize = 3;

    /// World scroll
    pub const BASE_SCROLL_SPEED: f32 = 2.0;
    pub const SPEED_RAMP_PER_PASS: f32 = 0.02;
    pub const SPEED_BOOST_FACTOR: f32 = 1.5;
    pub const SLOW_MOTION_FACTOR: f32 = 0.5;

    /// Hazards (pigs) and their projectiles (arrows)
    pub const HAZARD_CHANCE: f64 = 0.7;
    pub const HAZARD_SIZE: f32 = 30.0;
    pub const HAZARD_PERCH_OFFSET: f32 = 40.0;
    pub const HAZARD_MIN_INTERVAL_MS: f64 = 2000.0;
    pub const HAZARD_MAX_INTERVAL_MS: f64 = 5000.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_WIDTH: f32 = 20.0;
    pub const PROJECTILE_HEIGHT: f32 = 5.0;

    /// Power-ups
    pub const POWER_UP_CHANCE: f64 = 0.3;
    pub const POWER_UP_SIZE: f32 = 25.0;
    pub const POWER_UP_OFFSET: f32 = 50.0;
    pub const SHIELD_DURATION_MS: f64 = 5000.0;
    pub const SPEED_DURATION_MS: f64 = 3000.0;
    pub const SLOW_DURATION_MS: f64 = 4000.0;

    /// Particles
    pub const MAX_PARTICLES: usize = 100;
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const CRASH_PARTICLES: usize = 10;
    pub const DEFLECT_PARTICLES: usize = 6;
    pub const PICKUP_PARTICLES: usize = 8;
}
