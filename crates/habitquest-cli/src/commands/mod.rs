//! CLI subcommands. Each one opens a [`Session`], runs a single tracker
//! operation and writes the state back if anything changed.

pub mod account;
pub mod achievements;
pub mod config;
pub mod export;
pub mod habit;
pub mod progress;
pub mod reward;
pub mod settings;
pub mod theme;

use chrono::Local;
use habitquest_core::{Config, Event, SqliteStore, Tracker};

/// Tracker loaded from the on-disk store.
pub struct Session {
    pub tracker: Tracker,
    store: SqliteStore,
}

impl Session {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load()?;
        let mut store = SqliteStore::open()?;
        let mut tracker = Tracker::hydrate(&store, config.scoring)?;

        if config.tracker.auto_rollover {
            let events = tracker.roll_over_day(Local::now().date_naive());
            if !events.is_empty() {
                tracker.save(&mut store)?;
                for event in &events {
                    tracing::info!("{}", event.message());
                }
            }
        }

        Ok(Self { tracker, store })
    }

    /// Print the feedback for `events` and persist if there were any.
    ///
    /// Returns false when the operation was rejected.
    pub fn commit(&mut self, events: &[Event]) -> Result<bool, Box<dyn std::error::Error>> {
        for event in events {
            println!("{}", event.message());
        }
        if events.is_empty() {
            return Ok(false);
        }
        self.tracker.save(&mut self.store)?;
        Ok(true)
    }
}
