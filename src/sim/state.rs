//! Game state and core simulation types
//!
//! Everything the renderer reads and the tick mutates lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::character::CharacterKind;
use super::collision::Aabb;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first activate
    Menu,
    /// Character selector is open
    CharacterSelect,
    /// Active run
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    /// Visual tilt in degrees, derived from velocity
    pub rotation: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_START_X, WORLD_HEIGHT / 2.0),
            size: Vec2::splat(BIRD_SIZE),
            velocity: 0.0,
            rotation: 0.0,
        }
    }
}

impl Bird {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// A pair of blocking segments with a gap between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Height of the segment hanging from the top of the world
    pub top_height: f32,
    /// Height of the segment standing on the bottom of the world
    pub bottom_height: f32,
    pub width: f32,
    /// Set once the bird has cleared this obstacle
    pub passed: bool,
}

impl Obstacle {
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Upper edge of the bottom segment
    pub fn bottom_top(&self) -> f32 {
        WORLD_HEIGHT - self.bottom_height
    }

    /// Vertical centre of the gap
    pub fn gap_center(&self) -> f32 {
        (self.top_height + self.bottom_top()) / 2.0
    }
}

/// A pig perched above an obstacle that periodically fires arrows at the bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    /// Centre of the pig
    pub pos: Vec2,
    pub size: Vec2,
    /// Timestamp of the last shot (None until the first one)
    pub last_fire_ms: Option<f64>,
    pub fire_interval_ms: f64,
}

/// An arrow in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Fixed at fire time, never re-aimed
    pub vel: Vec2,
    pub size: Vec2,
    /// Radians
    pub rotation: f32,
}

impl Projectile {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Ignore obstacles and boundaries, deflect arrows
    Shield,
    /// World scrolls faster
    Speed,
    /// Halved gravity and world speed
    Slow,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Shield, PowerUpKind::Speed, PowerUpKind::Slow];

    pub fn duration_ms(&self) -> f64 {
        match self {
            PowerUpKind::Shield => SHIELD_DURATION_MS,
            PowerUpKind::Speed => SPEED_DURATION_MS,
            PowerUpKind::Slow => SLOW_DURATION_MS,
        }
    }

    /// Points awarded on pickup
    pub fn points(&self) -> u32 {
        match self {
            PowerUpKind::Shield => 10,
            PowerUpKind::Speed | PowerUpKind::Slow => 5,
        }
    }

    /// Pickup particle colour (0xRRGGBB)
    pub fn color(&self) -> u32 {
        match self {
            PowerUpKind::Shield => 0x00BFFF,
            PowerUpKind::Speed => 0x32CD32,
            PowerUpKind::Slow => 0xFF6347,
        }
    }
}

/// A collectible power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
}

impl PowerUp {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: u32,
    /// 0-1, decreases by `decay` every tick
    pub life: f32,
    pub decay: f32,
}

/// One timed effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub active: bool,
    pub activated_at_ms: f64,
}

/// Active power-up effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub shield: Effect,
    pub speed: Effect,
    pub slow: Effect,
}

/// Things the simulation reports to its host (audio, persistence, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Flapped,
    HazardFired,
    ArrowDeflected,
    PowerUpCollected(PowerUpKind),
    Crashed { score: u32 },
    NewHighScore(u32),
    CharacterSelected(CharacterKind),
}

/// Salt for the cosmetic RNG stream so particles never shift spawn rolls
const FX_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (obstacle heights, hazards, power-ups)
    pub rng: Pcg32,
    /// Cosmetic RNG (particles only)
    pub fx_rng: Pcg32,
    pub phase: GamePhase,
    /// Phase to return to when the selector is cancelled
    pub selector_return: GamePhase,
    /// Selected bird
    pub character: CharacterKind,
    /// Active flight constants, rewritten on selection
    pub gravity: f32,
    pub flap_impulse: f32,
    pub score: u32,
    /// Best score seen so far (loaded by the host)
    pub high_score: u32,
    /// Scroll speed before effects; ramps up as obstacles are passed
    pub base_speed: f32,
    /// Background offset in [-WORLD_WIDTH, 0]
    pub background_x: f32,
    /// Timestamp of the latest tick
    pub time_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub bird: Bird,
    /// Insertion ordered, oldest (left-most) first
    pub obstacles: Vec<Obstacle>,
    pub hazards: Vec<Hazard>,
    pub projectiles: Vec<Projectile>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub effects: ActiveEffects,
    /// Events raised since the host last drained them
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state in the menu with the given seed
    pub fn new(seed: u64) -> Self {
        let character = CharacterKind::default();
        let profile = character.profile();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            fx_rng: Pcg32::seed_from_u64(seed ^ FX_STREAM_SALT),
            phase: GamePhase::Menu,
            selector_return: GamePhase::Menu,
            character,
            gravity: profile.gravity,
            flap_impulse: profile.flap_impulse,
            score: 0,
            high_score: 0,
            base_speed: BASE_SCROLL_SPEED,
            background_x: 0.0,
            time_ms: 0.0,
            time_ticks: 0,
            bird: Bird::default(),
            obstacles: Vec::new(),
            hazards: Vec::new(),
            projectiles: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            effects: ActiveEffects::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Switch the selected bird and its flight constants
    pub fn set_character(&mut self, character: CharacterKind) {
        let profile = character.profile();
        self.character = character;
        self.gravity = profile.gravity;
        self.flap_impulse = profile.flap_impulse;
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_in_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.character, CharacterKind::Red);
        assert_eq!(state.base_speed, BASE_SCROLL_SPEED);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.bird.pos, Vec2::new(BIRD_START_X, WORLD_HEIGHT / 2.0));
    }

    #[test]
    fn test_set_character_rewrites_flight_constants() {
        let mut state = GameState::new(1);
        state.set_character(CharacterKind::Yellow);
        let profile = CharacterKind::Yellow.profile();
        assert_eq!(state.character, CharacterKind::Yellow);
        assert_eq!(state.gravity, profile.gravity);
        assert_eq!(state.flap_impulse, profile.flap_impulse);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(1);
        state.emit(GameEvent::Flapped);
        assert_eq!(state.drain_events(), vec![GameEvent::Flapped]);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_obstacle_geometry() {
        let ob = Obstacle {
            id: 1,
            x: 100.0,
            top_height: 200.0,
            bottom_height: WORLD_HEIGHT - 200.0 - OBSTACLE_GAP,
            width: OBSTACLE_WIDTH,
            passed: false,
        };
        assert_eq!(ob.right_edge(), 180.0);
        assert_eq!(ob.bottom_top(), 500.0);
        assert_eq!(ob.gap_center(), 350.0);
    }
}
