//! Game session
//!
//! Owns the simulation state together with its collaborators. Each frame the
//! queued intents become one `TickInput`, the state is ticked, and the events
//! it raised are forwarded to audio and persistence.

use crate::audio::{AudioSink, Cue};
use crate::highscores::HighScore;
use crate::persistence::{CHARACTER_KEY, KeyValueStore};
use crate::platform::input::{Intent, apply_intent, consume};
use crate::sim::{CharacterKind, GameEvent, GameState, TickInput, tick};

pub struct Session<S: KeyValueStore, A: AudioSink> {
    state: GameState,
    store: S,
    audio: A,
    high_score: HighScore,
    input: TickInput,
}

impl<S: KeyValueStore, A: AudioSink> Session<S, A> {
    /// Create a session, restoring the high score and last character
    pub fn new(seed: u64, store: S, audio: A) -> Self {
        let mut state = GameState::new(seed);
        let high_score = HighScore::load(&store);
        state.high_score = high_score.best;

        let character = load_character(&store);
        state.set_character(character);

        log::info!("Session ready (seed {}, {})", seed, character.profile().name);
        Self {
            state,
            store,
            audio,
            high_score,
            input: TickInput::default(),
        }
    }

    /// Queue an intent for the next step
    pub fn push(&mut self, intent: Intent) {
        apply_intent(&mut self.input, intent);
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.input.autopilot = on;
    }

    /// Advance one frame at `now_ms`
    pub fn step(&mut self, now_ms: f64) {
        tick(&mut self.state, &self.input, now_ms);
        consume(&mut self.input);

        for event in self.state.drain_events() {
            self.handle_event(&event);
        }
    }

    fn handle_event(&mut self, event: &GameEvent) {
        if let Some(cue) = Cue::for_event(event) {
            self.audio.play(cue);
        }

        match *event {
            GameEvent::NewHighScore(score) => {
                if self.high_score.record(score) {
                    self.high_score.save(&mut self.store);
                }
            }
            GameEvent::CharacterSelected(kind) => {
                self.store.set(CHARACTER_KEY, kind.as_str());
            }
            GameEvent::Crashed { score } => {
                log::debug!("Run over at tick {} with {}", self.state.time_ticks, score);
            }
            _ => {}
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}

fn load_character(store: &dyn KeyValueStore) -> CharacterKind {
    match store.get(CHARACTER_KEY) {
        Some(raw) => CharacterKind::from_str(&raw).unwrap_or_else(|| {
            log::warn!("Unknown character {:?}, using default", raw);
            CharacterKind::default()
        }),
        None => CharacterKind::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::persistence::{HIGH_SCORE_KEY, MemoryStore};
    use crate::sim::GamePhase;

    #[derive(Default)]
    struct Recorder {
        cues: Vec<Cue>,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, cue: Cue) {
            self.cues.push(cue);
        }
    }

    fn session_with(store: MemoryStore) -> Session<MemoryStore, Recorder> {
        Session::new(9, store, Recorder::default())
    }

    /// Start a run and send the bird straight into the floor
    fn crash_run(session: &mut Session<MemoryStore, Recorder>, now: &mut f64) {
        session.push(Intent::Activate);
        session.step(*now);
        while session.state().phase == GamePhase::Playing {
            *now += FRAME_MS;
            session.step(*now);
        }
    }

    #[test]
    fn test_restores_saved_values() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "12");
        store.set(CHARACTER_KEY, "black");
        let session = session_with(store);
        assert_eq!(session.state().high_score, 12);
        assert_eq!(session.state().character, CharacterKind::Black);
    }

    #[test]
    fn test_bad_saved_values_use_defaults() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "lots");
        store.set(CHARACTER_KEY, "purple");
        let session = session_with(store);
        assert_eq!(session.state().high_score, 0);
        assert_eq!(session.state().character, CharacterKind::Red);
    }

    #[test]
    fn test_high_score_persisted_only_if_beaten() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "1000");
        let mut session = session_with(store);
        let mut now = 0.0;
        crash_run(&mut session, &mut now);
        assert_eq!(session.state().phase, GamePhase::GameOver);
        assert_eq!(session.store().get(HIGH_SCORE_KEY).as_deref(), Some("1000"));
        assert!(!session.audio().cues.contains(&Cue::HighScore));
    }

    #[test]
    fn test_new_high_score_saved() {
        let mut session = session_with(MemoryStore::new());
        session.state.high_score = 0;
        session.push(Intent::Activate);
        session.step(0.0);
        session.state.score = 4;
        session.state.bird.pos.y = WORLD_HEIGHT;
        session.step(FRAME_MS);

        assert_eq!(session.state().phase, GamePhase::GameOver);
        assert_eq!(session.store().get(HIGH_SCORE_KEY).as_deref(), Some("4"));
        assert!(session.audio().cues.contains(&Cue::Crash));
        assert!(session.audio().cues.contains(&Cue::HighScore));
    }

    #[test]
    fn test_character_choice_persisted() {
        let mut session = session_with(MemoryStore::new());
        session.push(Intent::OpenSelector);
        session.step(0.0);
        session.push(Intent::Select(CharacterKind::Yellow));
        session.step(FRAME_MS);
        assert_eq!(session.state().character, CharacterKind::Yellow);
        assert_eq!(session.store().get(CHARACTER_KEY).as_deref(), Some("yellow"));

        // Intents are one-shot
        session.step(2.0 * FRAME_MS);
        assert_eq!(session.state().phase, GamePhase::CharacterSelect);
    }

    #[test]
    fn test_flap_cue() {
        let mut session = session_with(MemoryStore::new());
        session.push(Intent::Activate);
        session.step(0.0);
        session.push(Intent::Activate);
        session.step(FRAME_MS);
        assert_eq!(session.audio().cues, vec![Cue::Flap]);
    }
}
