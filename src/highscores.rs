//! Best-score tracking
//!
//! Persisted as a bare JSON integer; anything missing or unreadable counts as 0.

use serde::{Deserialize, Serialize};

use crate::persistence::{HIGH_SCORE_KEY, KeyValueStore, load_json, save_json};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would replace the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished run's score. Returns true if it is a new best.
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json::<u32>(store, HIGH_SCORE_KEY) {
            Some(best) => {
                log::info!("Loaded high score {}", best);
                Self { best }
            }
            None => {
                log::info!("No high score found, starting fresh");
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        save_json(store, HIGH_SCORE_KEY, &self.best);
        log::info!("High score saved ({})", self.best);
    }
}
