//! Game settings and preferences
//!
//! Persisted as JSON next to the high score. Missing fields take their
//! defaults so older saves keep loading.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, SETTINGS_KEY, load_json, save_json};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Gameplay ===
    /// Fixed run seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Let the bird fly itself
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Effective cue volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Seed for a new game, preferring the configured one
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json(store, SETTINGS_KEY) {
            Some(settings) => {
                log::info!("Loaded settings");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        save_json(store, SETTINGS_KEY, self);
        log::info!("Settings saved");
    }
}
