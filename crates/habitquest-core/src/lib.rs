//! # HabitQuest Core Library
//!
//! This library provides the core logic for HabitQuest, a gamified habit
//! tracker. All operations are available through the standalone `habitquest`
//! CLI binary, which is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Tracker**: An explicitly owned state engine. Mutations return
//!   [`Event`]s; an empty result means the input was rejected and nothing
//!   changed
//! - **Gamification**: Points and levels, a fixed achievement catalog, and a
//!   points store whose theme rewards unlock themes by id
//! - **Storage**: A key-value persistence port with in-memory and SQLite
//!   stores, plus TOML-based configuration
//! - **Export**: A single JSON document with the whole tracked state
//!
//! ## Key Components
//!
//! - [`Tracker`]: Habit/progress state engine
//! - [`KeyValueStore`]: Persistence port injected into the tracker
//! - [`Config`]: Application configuration management

pub mod achievement;
pub mod error;
pub mod events;
pub mod export;
pub mod habit;
pub mod profile;
pub mod progress;
pub mod shop;
pub mod storage;
pub mod tracker;

pub use achievement::{Achievement, AchievementKind, HabitSummary};
pub use error::{ConfigError, CoreError, StoreError};
pub use events::Event;
pub use export::{ExportDocument, DEFAULT_EXPORT_FILE};
pub use habit::{Habit, HabitState};
pub use profile::UserProfile;
pub use progress::Progress;
pub use shop::{Reward, RewardCategory, Theme};
pub use storage::{Config, KeyValueStore, MemoryStore, ScoringConfig, SqliteStore};
pub use tracker::{Settings, Tracker};
