//! Per-frame simulation tick
//!
//! Consumes one frame of intents, runs the phase state machine, then advances
//! the world in a fixed order: effects, bird, scroll + scoring + spawning,
//! pigs, arrows, collisions. The background and particles animate in every
//! phase.

use super::character::CharacterKind;
use super::collision;
use super::effects;
use super::hazards;
use super::particles;
use super::physics;
use super::spawner;
use super::state::{ActiveEffects, Bird, GameEvent, GamePhase, GameState, PowerUpKind};
use crate::consts::*;

/// Input intents for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start/confirm/restart, or flap while playing (space/click/tap)
    pub activate: bool,
    /// Open the character selector (menu and game over only)
    pub open_selector: bool,
    /// Close the selector without starting a run
    pub cancel_selector: bool,
    /// Highlight a character while the selector is open
    pub select: Option<CharacterKind>,
    /// Demo mode - the simulation flaps on its own
    pub autopilot: bool,
}

/// Advance the game state by one frame at timestamp `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    state.time_ms = now_ms;
    state.time_ticks += 1;

    apply_input(state, input);

    if input.autopilot {
        match state.phase {
            GamePhase::Menu => start_run(state),
            GamePhase::Playing if autopilot_wants_flap(state) => flap(state),
            _ => {}
        }
    }

    if state.is_playing() {
        step_playing(state, now_ms);
    }

    // Background follows this tick's effects, after expiry
    let speed = physics::scroll_speed(state);
    physics::scroll_background(state, speed);

    // Keep particles animating in every phase (crash bursts play into game over)
    particles::update(&mut state.particles);
}

/// Run the state machine for this frame's intents
fn apply_input(state: &mut GameState, input: &TickInput) {
    if let Some(character) = input.select {
        if state.phase == GamePhase::CharacterSelect && character != state.character {
            state.set_character(character);
            state.emit(GameEvent::CharacterSelected(character));
            log::info!("Selected {}", character.profile().name);
        }
    }

    if input.cancel_selector && state.phase == GamePhase::CharacterSelect {
        state.phase = state.selector_return;
    }

    if input.open_selector && matches!(state.phase, GamePhase::Menu | GamePhase::GameOver) {
        state.selector_return = state.phase;
        state.phase = GamePhase::CharacterSelect;
    }

    if input.activate {
        match state.phase {
            GamePhase::Menu | GamePhase::CharacterSelect | GamePhase::GameOver => {
                start_run(state)
            }
            GamePhase::Playing => flap(state),
        }
    }
}

/// Reset everything run-scoped and pre-populate the horizon
pub fn start_run(state: &mut GameState) {
    // Re-apply in case a host changed the constants directly
    state.set_character(state.character);

    state.phase = GamePhase::Playing;
    state.score = 0;
    state.base_speed = BASE_SCROLL_SPEED;
    state.background_x = 0.0;
    state.effects = ActiveEffects::default();
    state.bird = Bird::default();
    state.obstacles.clear();
    state.hazards.clear();
    state.projectiles.clear();
    state.power_ups.clear();
    state.particles.clear();

    spawner::prepopulate(state);
    state.emit(GameEvent::RunStarted);
    log::info!("Run started as {}", state.character.profile().name);
}

fn flap(state: &mut GameState) {
    state.bird.velocity = state.flap_impulse;
    state.emit(GameEvent::Flapped);
}

fn step_playing(state: &mut GameState, now_ms: f64) {
    effects::expire(&mut state.effects, now_ms);
    let shielded = effects::is_active(&state.effects, PowerUpKind::Shield);

    let gravity = physics::effective_gravity(state);
    physics::integrate_bird(&mut state.bird, gravity);
    if !shielded && collision::out_of_bounds(&state.bird.bounds()) {
        crash(state);
        return;
    }

    let speed = physics::scroll_speed(state);
    physics::scroll_world(state, speed);
    collision::mark_passed(state);
    physics::cull_scrolled(state);
    spawner::extend_horizon(state);

    hazards::update_hazards(state, now_ms);
    hazards::update_projectiles(state);

    if collision::resolve(state, now_ms) {
        crash(state);
    }
}

/// End the run: crash burst, game over, high score bookkeeping
fn crash(state: &mut GameState) {
    let center = state.bird.center();
    particles::burst(state, center, 0xFF4444, CRASH_PARTICLES);
    state.phase = GamePhase::GameOver;
    state.emit(GameEvent::Crashed { score: state.score });
    log::info!("Game over with score {}", state.score);

    if state.score > state.high_score {
        state.high_score = state.score;
        state.emit(GameEvent::NewHighScore(state.score));
        log::info!("New high score: {}", state.score);
    }
}

/// Arrows further out than this many ticks are ignored by the autopilot
const DODGE_HORIZON_TICKS: f32 = 30.0;
/// How far the autopilot shifts its aim inside the gap to dodge
const DODGE_SHIFT: f32 = 50.0;

/// Predicted height of the soonest arrow that will cross the bird's column
/// close enough to hit it
fn incoming_arrow_y(state: &GameState) -> Option<f32> {
    let bird = state.bird.center();
    state
        .projectiles
        .iter()
        .filter_map(|arrow| {
            let c = arrow.center();
            let dx = bird.x - c.x;
            if arrow.vel.x == 0.0 || dx * arrow.vel.x <= 0.0 {
                return None;
            }
            let ticks = dx / arrow.vel.x;
            let y = c.y + arrow.vel.y * ticks;
            (ticks <= DODGE_HORIZON_TICKS && (y - bird.y).abs() < BIRD_SIZE).then_some((ticks, y))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, y)| y)
}

/// Flap once the bird sinks half a flap's rise below the next gap's centre,
/// so its bobbing stays centred on the gap. An incoming arrow shifts the aim
/// up or down within the gap, away from the arrow.
fn autopilot_wants_flap(state: &GameState) -> bool {
    let bird = &state.bird;
    let target = state
        .obstacles
        .iter()
        .find(|ob| ob.right_edge() > bird.pos.x)
        .map(|ob| ob.gap_center())
        .unwrap_or(WORLD_HEIGHT / 2.0);
    let center_y = bird.center().y;

    match incoming_arrow_y(state) {
        // Arrow level with or below the bird: climb
        Some(y) if y >= center_y => center_y > target - DODGE_SHIFT,
        // Arrow above: sink, flapping only near the bottom of the gap
        Some(_) => center_y > target + 2.0 * DODGE_SHIFT,
        None => {
            let gravity = physics::effective_gravity(state).max(f32::EPSILON);
            let rise = state.flap_impulse * state.flap_impulse / (2.0 * gravity);
            center_y > target + rise / 2.0
        }
    }
}
