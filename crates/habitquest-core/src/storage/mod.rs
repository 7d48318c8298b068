mod config;
pub mod database;
pub mod kv;

pub use config::{Config, ScoringConfig, TrackerConfig};
pub use database::SqliteStore;
pub use kv::{keys, KeyValueStore, MemoryStore};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the data directory, creating it if needed.
///
/// `HABITQUEST_HOME` names the directory outright. Otherwise it is
/// `~/.config/habitquest/`, or `~/.config/habitquest-dev/` when
/// `HABITQUEST_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("HABITQUEST_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HABITQUEST_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("habitquest-dev")
            } else {
                base_dir.join("habitquest")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
