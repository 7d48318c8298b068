//! Habit/progress state engine.
//!
//! `Tracker` owns every piece of tracked state: habits, points and level,
//! achievements, rewards, themes, settings and the local profile. Each
//! operation either applies completely and returns the events describing
//! what changed, or returns an empty vector and leaves the state untouched.
//!
//! Persistence is injected: [`Tracker::hydrate`] reads a
//! [`KeyValueStore`] once and [`Tracker::save`] writes everything back,
//! except keys whose stored value could not be read.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = SqliteStore::open()?;
//! let mut tracker = Tracker::hydrate(&store, config.scoring)?;
//! let events = tracker.add_habit("Read");
//! if !events.is_empty() {
//!     tracker.save(&mut store)?;
//! }
//! ```

use chrono::{Local, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::achievement::{self, Achievement, HabitSummary};
use crate::error::Result;
use crate::events::Event;
use crate::export::ExportDocument;
use crate::habit::Habit;
use crate::profile::UserProfile;
use crate::progress::Progress;
use crate::shop::{rewards, themes, Reward, RewardCategory, Theme, DEFAULT_THEME_ID};
use crate::storage::{keys, KeyValueStore, ScoringConfig};

/// User preferences that travel with the tracked state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub sound_effects: bool,
    pub current_theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            sound_effects: true,
            current_theme: DEFAULT_THEME_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tracker {
    habits: Vec<Habit>,
    progress: Progress,
    achievements: Vec<Achievement>,
    rewards: Vec<Reward>,
    themes: Vec<Theme>,
    settings: Settings,
    profile: Option<UserProfile>,
    logged_in: bool,
    scoring: ScoringConfig,
    /// Keys whose stored value did not parse on hydrate.
    unreadable: Vec<&'static str>,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl Tracker {
    /// Fresh state: no habits, zero points, level 1, catalogs locked.
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            habits: Vec::new(),
            progress: Progress::default(),
            achievements: achievement::default_catalog(),
            rewards: rewards::default_catalog(),
            themes: themes::default_catalog(),
            settings: Settings::default(),
            profile: None,
            logged_in: false,
            scoring,
            unreadable: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn active_theme(&self) -> &Theme {
        self.themes
            .iter()
            .find(|t| t.id == self.settings.current_theme && t.unlocked)
            .or_else(|| self.themes.iter().find(|t| t.id == DEFAULT_THEME_ID))
            .unwrap_or(&self.themes[0])
    }

    pub fn summary(&self) -> HabitSummary {
        HabitSummary::from_habits(&self.habits)
    }

    pub fn points_to_next_level(&self) -> u32 {
        self.progress
            .points_to_next_level(self.scoring.points_per_level)
    }

    pub fn level_progress(&self) -> u32 {
        self.progress.level_progress(self.scoring.points_per_level)
    }

    pub fn completed_today_count(&self) -> usize {
        self.habits.iter().filter(|h| h.completed_today).count()
    }

    pub fn motivational_message(&self) -> &'static str {
        let total = self.habits.len();
        let done = self.completed_today_count();

        if total == 0 {
            "Add your first habit to start your journey! 🚀"
        } else if done == total {
            "Perfect day! You're on fire! 🔥"
        } else if done * 2 > total {
            "Great progress! Keep it up! ⭐"
        } else if done > 0 {
            "Good start! Every step counts! 💪"
        } else {
            "Ready to build some habits today? 🎯"
        }
    }

    // ── Habits ───────────────────────────────────────────────────────

    pub fn add_habit(&mut self, name: &str) -> Vec<Event> {
        let Some(habit) = Habit::new(name) else {
            tracing::debug!("rejected blank habit name");
            return Vec::new();
        };
        tracing::debug!(habit_id = %habit.id, name = %habit.name, "adding habit");

        let mut events = vec![Event::HabitAdded {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            at: Utc::now(),
        }];
        self.habits.push(habit);
        events.extend(self.recompute_achievements());
        events
    }

    /// Toggle a habit using the local calendar date.
    pub fn toggle_habit(&mut self, id: &str) -> Vec<Event> {
        self.toggle_habit_on(id, Local::now().date_naive())
    }

    /// Toggle a habit as if it were `today`.
    ///
    /// Pending habits are completed (earning points, maybe a level);
    /// completed ones are undone (losing points, never a level).
    pub fn toggle_habit_on(&mut self, id: &str, today: NaiveDate) -> Vec<Event> {
        let Some(idx) = self.habits.iter().position(|h| h.id == id) else {
            tracing::debug!(habit_id = id, "toggle on unknown habit");
            return Vec::new();
        };
        let at = Utc::now();
        let points = self.scoring.points_per_completion;
        let mut events = Vec::new();

        let habit = &mut self.habits[idx];
        if habit.completed_today {
            habit.mark_incomplete();
            let before = self.progress.total_points;
            self.progress.deduct(points);
            events.push(Event::HabitUndone {
                habit_id: habit.id.clone(),
                name: habit.name.clone(),
                points_lost: before - self.progress.total_points,
                at,
            });
        } else {
            habit.mark_complete(today);
            events.push(Event::HabitCompleted {
                habit_id: habit.id.clone(),
                name: habit.name.clone(),
                streak: habit.streak,
                points_earned: points,
                at,
            });
            if self.progress.award(points, self.scoring.points_per_level) {
                tracing::info!(level = self.progress.level, "level up");
                events.push(Event::LevelUp {
                    level: self.progress.level,
                    at,
                });
            }
        }

        events.extend(self.recompute_achievements());
        events
    }

    /// Remove a habit. Points it earned stay, and achievements are not
    /// re-evaluated since removal can never satisfy a new threshold.
    pub fn delete_habit(&mut self, id: &str) -> Vec<Event> {
        let Some(idx) = self.habits.iter().position(|h| h.id == id) else {
            return Vec::new();
        };
        let habit = self.habits.remove(idx);
        tracing::debug!(habit_id = %habit.id, "deleted habit");
        vec![Event::HabitDeleted {
            habit_id: habit.id,
            name: habit.name,
            at: Utc::now(),
        }]
    }

    /// Clear stale "completed today" flags left from an earlier day.
    pub fn roll_over_day(&mut self, today: NaiveDate) -> Vec<Event> {
        let habits_reset = self
            .habits
            .iter_mut()
            .map(|h| h.roll_over(today))
            .filter(|reset| *reset)
            .count();
        if habits_reset == 0 {
            return Vec::new();
        }
        tracing::debug!(habits_reset, %today, "rolled over to new day");
        vec![Event::DayRolledOver {
            habits_reset,
            at: Utc::now(),
        }]
    }

    pub fn recompute_achievements(&mut self) -> Vec<Event> {
        let summary = self.summary();
        let at = Utc::now();
        achievement::recompute(&mut self.achievements, &summary)
            .into_iter()
            .map(|a| {
                tracing::info!(achievement = %a.name, "achievement unlocked");
                Event::AchievementUnlocked {
                    achievement_id: a.id,
                    name: a.name,
                    description: a.description,
                    at,
                }
            })
            .collect()
    }

    // ── Store & themes ───────────────────────────────────────────────

    pub fn purchase_reward(&mut self, id: &str) -> Vec<Event> {
        let Some(reward) = self.rewards.iter_mut().find(|r| r.id == id) else {
            return Vec::new();
        };
        if reward.purchased || !self.progress.spend(reward.cost) {
            tracing::debug!(reward_id = id, "purchase rejected");
            return Vec::new();
        }
        reward.purchased = true;
        tracing::info!(reward = %reward.name, cost = reward.cost, "reward purchased");

        let at = Utc::now();
        let mut events = vec![Event::RewardPurchased {
            reward_id: reward.id.clone(),
            name: reward.name.clone(),
            cost: reward.cost,
            at,
        }];

        if reward.category == RewardCategory::Theme {
            let target = reward.unlocks_theme.as_deref();
            if let Some(theme) = self
                .themes
                .iter_mut()
                .find(|t| Some(t.id.as_str()) == target && !t.unlocked)
            {
                theme.unlocked = true;
                events.push(Event::ThemeUnlocked {
                    theme_id: theme.id.clone(),
                    name: theme.name.clone(),
                    at,
                });
            }
        }
        events
    }

    pub fn select_theme(&mut self, id: &str) -> Vec<Event> {
        let selectable = self.themes.iter().any(|t| t.id == id && t.unlocked);
        if !selectable || self.settings.current_theme == id {
            return Vec::new();
        }
        self.settings.current_theme = id.to_string();
        vec![Event::ThemeSelected {
            theme_id: id.to_string(),
            at: Utc::now(),
        }]
    }

    // ── Settings ─────────────────────────────────────────────────────

    pub fn set_dark_mode(&mut self, value: bool) -> Vec<Event> {
        Self::set_flag(&mut self.settings.dark_mode, keys::DARK_MODE, value)
    }

    pub fn set_notifications(&mut self, value: bool) -> Vec<Event> {
        Self::set_flag(&mut self.settings.notifications, keys::NOTIFICATIONS, value)
    }

    pub fn set_sound_effects(&mut self, value: bool) -> Vec<Event> {
        Self::set_flag(&mut self.settings.sound_effects, keys::SOUND_EFFECTS, value)
    }

    fn set_flag(flag: &mut bool, key: &str, value: bool) -> Vec<Event> {
        if *flag == value {
            return Vec::new();
        }
        *flag = value;
        vec![Event::SettingChanged {
            key: key.to_string(),
            value,
            at: Utc::now(),
        }]
    }

    // ── Account ──────────────────────────────────────────────────────

    pub fn login(&mut self, email: &str, password: &str) -> Vec<Event> {
        self.start_session(UserProfile::login(email, password))
    }

    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Vec<Event> {
        self.start_session(UserProfile::signup(name, email, password))
    }

    fn start_session(&mut self, profile: Option<UserProfile>) -> Vec<Event> {
        let Some(profile) = profile else {
            return Vec::new();
        };
        let event = Event::LoggedIn {
            user_id: profile.id.clone(),
            name: profile.name.clone(),
            at: Utc::now(),
        };
        self.profile = Some(profile);
        self.logged_in = true;
        vec![event]
    }

    pub fn logout(&mut self) -> Vec<Event> {
        if !self.logged_in && self.profile.is_none() {
            return Vec::new();
        }
        self.profile = None;
        self.logged_in = false;
        vec![Event::LoggedOut { at: Utc::now() }]
    }

    // ── Export ───────────────────────────────────────────────────────

    pub fn export(&self) -> ExportDocument {
        ExportDocument {
            habits: self.habits.clone(),
            total_points: self.progress.total_points,
            level: self.progress.level,
            achievements: self.achievements.clone(),
            user: self.profile.clone(),
            settings: self.settings.clone(),
        }
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Rebuild state from `store`. Missing keys keep their defaults. A
    /// stored value that does not parse is logged, skipped, and left as it is
    /// by later saves.
    ///
    /// # Errors
    /// Returns an error only if the store itself fails.
    pub fn hydrate(store: &dyn KeyValueStore, scoring: ScoringConfig) -> Result<Self> {
        let mut tracker = Self::new(scoring);
        let mut unreadable = Vec::new();

        if let Some(habits) = load_key::<Vec<Habit>>(store, keys::HABITS, &mut unreadable)? {
            tracker.habits = habits;
        }
        if let Some(points) = load_key::<u32>(store, keys::TOTAL_POINTS, &mut unreadable)? {
            tracker.progress.total_points = points;
        }
        if let Some(level) = load_key::<u32>(store, keys::LEVEL, &mut unreadable)? {
            tracker.progress.level = level.max(1);
        }
        if let Some(achievements) =
            load_key::<Vec<Achievement>>(store, keys::ACHIEVEMENTS, &mut unreadable)?
        {
            tracker.achievements = achievements;
        }
        if let Some(profile) = load_key::<UserProfile>(store, keys::USER, &mut unreadable)? {
            tracker.profile = Some(profile);
        }
        if let Some(logged_in) = load_key::<bool>(store, keys::IS_LOGGED_IN, &mut unreadable)? {
            tracker.logged_in = logged_in;
        }
        if let Some(dark_mode) = load_key::<bool>(store, keys::DARK_MODE, &mut unreadable)? {
            tracker.settings.dark_mode = dark_mode;
        }
        if let Some(notifications) =
            load_key::<bool>(store, keys::NOTIFICATIONS, &mut unreadable)?
        {
            tracker.settings.notifications = notifications;
        }
        if let Some(sound_effects) =
            load_key::<bool>(store, keys::SOUND_EFFECTS, &mut unreadable)?
        {
            tracker.settings.sound_effects = sound_effects;
        }
        if let Some(purchased) = load_key::<Vec<String>>(store, keys::REWARDS, &mut unreadable)? {
            for reward in &mut tracker.rewards {
                reward.purchased |= purchased.contains(&reward.id);
            }
        }
        if let Some(unlocked) = load_key::<Vec<String>>(store, keys::THEMES, &mut unreadable)? {
            for theme in &mut tracker.themes {
                theme.unlocked |= unlocked.contains(&theme.id);
            }
        }
        if let Some(theme) = load_theme_id(store)? {
            if tracker.themes.iter().any(|t| t.id == theme && t.unlocked) {
                tracker.settings.current_theme = theme;
            } else {
                tracing::warn!(theme = %theme, "stored theme is not unlocked, using default");
            }
        }

        tracker.unreadable = unreadable;

        tracing::debug!(
            habits = tracker.habits.len(),
            points = tracker.progress.total_points,
            level = tracker.progress.level,
            "hydrated tracker"
        );
        Ok(tracker)
    }

    /// Keys skipped on hydrate because their stored value did not parse.
    pub fn unreadable_keys(&self) -> &[&'static str] {
        &self.unreadable
    }

    /// Write the whole state to `store`. Keys listed in
    /// [`unreadable_keys`](Self::unreadable_keys) keep their stored value.
    ///
    /// # Errors
    /// Returns an error if serialization or the store fails.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        self.put(store, keys::HABITS, &serde_json::to_string(&self.habits)?)?;
        self.put(store, keys::TOTAL_POINTS, &self.progress.total_points.to_string())?;
        self.put(store, keys::LEVEL, &self.progress.level.to_string())?;
        self.put(store, keys::ACHIEVEMENTS, &serde_json::to_string(&self.achievements)?)?;
        self.put(store, keys::DARK_MODE, &self.settings.dark_mode.to_string())?;
        self.put(store, keys::NOTIFICATIONS, &self.settings.notifications.to_string())?;
        self.put(store, keys::SOUND_EFFECTS, &self.settings.sound_effects.to_string())?;
        self.put(
            store,
            keys::CURRENT_THEME,
            &serde_json::to_string(&self.settings.current_theme)?,
        )?;
        match &self.profile {
            Some(profile) => self.put(store, keys::USER, &serde_json::to_string(profile)?)?,
            None if !self.unreadable.contains(&keys::USER) => store.remove(keys::USER)?,
            None => {}
        }
        self.put(store, keys::IS_LOGGED_IN, &self.logged_in.to_string())?;

        let purchased: Vec<&str> = self
            .rewards
            .iter()
            .filter(|r| r.purchased)
            .map(|r| r.id.as_str())
            .collect();
        self.put(store, keys::REWARDS, &serde_json::to_string(&purchased)?)?;
        let unlocked: Vec<&str> = self
            .themes
            .iter()
            .filter(|t| t.unlocked)
            .map(|t| t.id.as_str())
            .collect();
        self.put(store, keys::THEMES, &serde_json::to_string(&unlocked)?)?;
        Ok(())
    }

    fn put(&self, store: &mut dyn KeyValueStore, key: &str, value: &str) -> Result<()> {
        if self.unreadable.iter().any(|k| *k == key) {
            tracing::warn!(key, "not overwriting unreadable stored value");
            return Ok(());
        }
        store.set(key, value)
    }
}

fn load_key<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &'static str,
    unreadable: &mut Vec<&'static str>,
) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable stored value");
            unreadable.push(key);
            Ok(None)
        }
    }
}

/// The theme id may be stored as JSON or as a bare string.
fn load_theme_id(store: &dyn KeyValueStore) -> Result<Option<String>> {
    let Some(raw) = store.get(keys::CURRENT_THEME)? else {
        return Ok(None);
    };
    Ok(Some(
        serde_json::from_str::<String>(&raw).unwrap_or_else(|_| raw.trim().to_string()),
    ))
}
