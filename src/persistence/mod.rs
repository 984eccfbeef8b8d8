//! Key-value persistence
//!
//! Features:
//! - `KeyValueStore` trait over string keys and values
//! - In-memory store for native runs and tests
//! - LocalStorage store on web
//! - JSON helpers that treat missing or corrupt values as absent

#[cfg(target_arch = "wasm32")]
mod local_storage;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the best score
pub const HIGH_SCORE_KEY: &str = "sky_siege_high_score";
/// Storage key for the selected character id
pub const CHARACTER_KEY: &str = "sky_siege_character";
/// Storage key for user settings
pub const SETTINGS_KEY: &str = "sky_siege_settings";

/// String key-value storage. Writes are best effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Read and decode a JSON value, None if missing or unreadable
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring unreadable value for {}: {}", key, e);
            None
        }
    }
}

/// Encode and write a JSON value
pub fn save_json<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => log::warn!("Failed to encode {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut store = MemoryStore::new();
        save_json(&mut store, HIGH_SCORE_KEY, &42u32);
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("42"));
        assert_eq!(load_json::<u32>(&store, HIGH_SCORE_KEY), Some(42));
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "not a number");
        assert_eq!(load_json::<u32>(&store, HIGH_SCORE_KEY), None);
        assert_eq!(load_json::<u32>(&store, "missing"), None);
    }
}
