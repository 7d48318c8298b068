//! Key-value persistence port.
//!
//! The tracker reads every key once at startup and writes all of them back
//! after each committed change. Values are JSON text.

use std::collections::HashMap;

use crate::error::Result;

/// Storage keys used by the tracker.
pub mod keys {
    pub const HABITS: &str = "habits";
    pub const TOTAL_POINTS: &str = "totalPoints";
    pub const LEVEL: &str = "level";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const USER: &str = "user";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const DARK_MODE: &str = "darkMode";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const SOUND_EFFECTS: &str = "soundEffects";
    pub const CURRENT_THEME: &str = "currentTheme";
    /// Ids of purchased rewards.
    pub const REWARDS: &str = "rewards";
    /// Ids of unlocked themes.
    pub const THEMES: &str = "themes";
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store, used for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert!(store.get("level").unwrap().is_none());
        store.set("level", "3").unwrap();
        assert_eq!(store.get("level").unwrap().as_deref(), Some("3"));
        store.set("level", "4").unwrap();
        assert_eq!(store.len(), 1);
        store.remove("level").unwrap();
        assert!(store.is_empty());
    }
}
