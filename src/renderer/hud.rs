//! Heads-up display text derived from the game state

use crate::sim::effects::remaining_ms;
use crate::sim::{GamePhase, GameState, PowerUpKind};

/// Text the host shows on top of the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: String,
    pub high_score: String,
    /// Active effects with whole seconds remaining (rounded up)
    pub effects: Vec<(PowerUpKind, u32)>,
    /// Phase prompt, None while playing
    pub banner: Option<&'static str>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        // Effects only tick down while playing
        let effects = if state.is_playing() {
            PowerUpKind::ALL
                .iter()
                .filter_map(|&kind| {
                    remaining_ms(&state.effects, kind, state.time_ms)
                        .map(|ms| (kind, (ms / 1000.0).ceil() as u32))
                })
                .collect()
        } else {
            Vec::new()
        };

        let banner = match state.phase {
            GamePhase::Menu => Some("Press SPACE to fly, C to choose a bird"),
            GamePhase::CharacterSelect => Some("1-4 to choose, SPACE to fly, ESC to go back"),
            GamePhase::Playing => None,
            GamePhase::GameOver => Some("Game over! SPACE to retry, C to change bird"),
        };

        Self {
            score: format!("Score: {}", state.score),
            high_score: format!("High Score: {}", state.high_score),
            effects,
            banner,
        }
    }
}

/// Short label for an effect indicator
pub fn effect_label(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::Shield => "Shield",
        PowerUpKind::Speed => "Speed",
        PowerUpKind::Slow => "Slow-mo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::effects::activate;

    #[test]
    fn test_hud_menu() {
        let state = GameState::new(1);
        let hud = Hud::from_state(&state);
        assert_eq!(hud.score, "Score: 0");
        assert_eq!(hud.high_score, "High Score: 0");
        assert!(hud.effects.is_empty());
        assert!(hud.banner.is_some());
    }

    #[test]
    fn test_hud_effect_timers() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        activate(&mut state.effects, PowerUpKind::Shield, 0.0);
        activate(&mut state.effects, PowerUpKind::Slow, 0.0);
        state.time_ms = 1500.0;
        let hud = Hud::from_state(&state);
        assert_eq!(hud.effects, vec![(PowerUpKind::Shield, 4), (PowerUpKind::Slow, 3)]);
        assert_eq!(hud.banner, None);
    }

    #[test]
    fn test_hud_hides_timers_after_game_over() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        activate(&mut state.effects, PowerUpKind::Shield, 0.0);
        state.time_ms = 6000.0;
        let hud = Hud::from_state(&state);
        assert!(hud.effects.is_empty());
        assert!(hud.banner.is_some());
    }
}
