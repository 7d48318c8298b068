//! A single tracked habit and its daily completion cycle.
//!
//! ## State Transitions
//!
//! ```text
//! Pending --mark_complete--> CompletedToday --mark_incomplete--> Pending
//! ```
//!
//! Streak continuation is decided by the number of whole days between the
//! last completion and the day of the new completion, not by comparing
//! formatted date strings.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitState {
    Pending,
    CompletedToday,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub total_completed: u32,
    /// Calendar day of the most recent completion. Not reverted by an undo.
    #[serde(
        default,
        alias = "lastCompletedDate",
        deserialize_with = "deserialize_day"
    )]
    pub last_completed: Option<NaiveDate>,
    #[serde(default)]
    pub completed_today: bool,
}

impl Habit {
    /// Create a fresh habit. Returns `None` for blank names.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            streak: 0,
            total_completed: 0,
            last_completed: None,
            completed_today: false,
        })
    }

    pub fn state(&self) -> HabitState {
        if self.completed_today {
            HabitState::CompletedToday
        } else {
            HabitState::Pending
        }
    }

    /// Whole days elapsed since the last completion, if there was one.
    pub fn days_since_last(&self, today: NaiveDate) -> Option<i64> {
        self.last_completed
            .map(|last| today.signed_duration_since(last).num_days())
    }

    /// Pending -> CompletedToday. Returns false, changing nothing, if the
    /// habit is already completed today.
    ///
    /// A gap of one day extends the run. A gap of zero can only happen after
    /// an undo earlier the same day and also extends it, which restores the
    /// value the undo took away. Anything else starts a new run at 1.
    pub fn mark_complete(&mut self, today: NaiveDate) -> bool {
        if self.completed_today {
            return false;
        }
        self.streak = match self.days_since_last(today) {
            Some(0) | Some(1) => self.streak.saturating_add(1),
            _ => 1,
        };
        self.total_completed = self.total_completed.saturating_add(1);
        self.last_completed = Some(today);
        self.completed_today = true;
        true
    }

    /// CompletedToday -> Pending. Leaves `last_completed` untouched.
    /// Returns false, changing nothing, if the habit is still pending.
    pub fn mark_incomplete(&mut self) -> bool {
        if !self.completed_today {
            return false;
        }
        self.streak = self.streak.saturating_sub(1);
        self.total_completed = self.total_completed.saturating_sub(1);
        self.completed_today = false;
        true
    }

    /// Clear a stale `completed_today` flag left over from an earlier day.
    ///
    /// Returns true if the flag was cleared.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if self.completed_today && self.last_completed != Some(today) {
            self.completed_today = false;
            return true;
        }
        false
    }
}

/// Reads ISO dates as well as the `Tue Jan 09 2024` form produced by
/// JavaScript's `Date.toDateString()`.
fn deserialize_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%a %b %d %Y"))
        .map(Some)
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn new_rejects_blank_names() {
        assert!(Habit::new("").is_none());
        assert!(Habit::new("   \t").is_none());
    }

    #[test]
    fn new_trims_name_and_starts_pending() {
        let habit = Habit::new("  Read  ").unwrap();
        assert_eq!(habit.name, "Read");
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.total_completed, 0);
        assert_eq!(habit.last_completed, None);
        assert_eq!(habit.state(), HabitState::Pending);
    }

    #[test]
    fn new_habits_get_distinct_ids() {
        let a = Habit::new("a").unwrap();
        let b = Habit::new("b").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn first_completion_starts_streak_at_one() {
        let mut habit = Habit::new("Read").unwrap();
        habit.mark_complete(day(1));
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.total_completed, 1);
        assert_eq!(habit.last_completed, Some(day(1)));
        assert_eq!(habit.state(), HabitState::CompletedToday);
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let mut habit = Habit::new("Read").unwrap();
        habit.mark_complete(day(1));
        habit.roll_over(day(2));
        habit.mark_complete(day(2));
        assert_eq!(habit.streak, 2);
    }

    #[test]
    fn gap_of_two_days_resets_streak() {
        let mut habit = Habit::new("Read").unwrap();
        habit.mark_complete(day(1));
        habit.roll_over(day(2));
        habit.mark_complete(day(2));
        habit.roll_over(day(4));
        habit.mark_complete(day(4));
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.total_completed, 3);
    }

    #[test]
    fn undo_keeps_last_completed() {
        let mut habit = Habit::new("Read").unwrap();
        habit.mark_complete(day(1));
        habit.mark_incomplete();
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.total_completed, 0);
        assert_eq!(habit.last_completed, Some(day(1)));
        assert!(!habit.completed_today);
    }

    #[test]
    fn redo_after_undo_restores_streak() {
        let mut habit = Habit::new("Read").unwrap();
        habit.mark_complete(day(1));
        habit.roll_over(day(2));
        habit.mark_complete(day(2));
        habit.mark_incomplete();
        assert_eq!(habit.streak, 1);
        habit.mark_complete(day(2));
        assert_eq!(habit.streak, 2);
    }

    #[test]
    fn wrong_transitions_change_nothing() {
        let mut habit = Habit::new("Read").unwrap();
        assert!(!habit.mark_incomplete());
        assert_eq!(habit.state(), HabitState::Pending);

        assert!(habit.mark_complete(day(1)));
        let completed = habit.clone();
        assert!(!habit.mark_complete(day(1)));
        assert_eq!(habit, completed);
    }

    #[test]
    fn counters_never_go_below_zero() {
        let mut habit = Habit::new("Read").unwrap();
        habit.completed_today = true;
        habit.mark_incomplete();
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.total_completed, 0);
    }

    #[test]
    fn roll_over_only_clears_stale_flags() {
        let mut habit = Habit::new("Read").unwrap();
        habit.mark_complete(day(1));
        assert!(!habit.roll_over(day(1)));
        assert!(habit.completed_today);
        assert!(habit.roll_over(day(2)));
        assert!(!habit.completed_today);
    }

    #[test]
    fn deserializes_camel_case_and_alias() {
        let json = r#"{"id":"1","name":"Run","streak":3,"totalCompleted":9,"lastCompletedDate":"2024-03-01","completedToday":true}"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.total_completed, 9);
        assert_eq!(habit.last_completed, Some(day(1)));
        assert!(habit.completed_today);
    }

    #[test]
    fn deserializes_date_string_form() {
        let json = r#"{"id":"1","name":"Run","streak":2,"lastCompleted":"Sat Mar 09 2024","completedToday":false}"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.last_completed, Some(day(9)));

        let json = r#"{"id":"1","name":"Run","lastCompleted":null}"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.last_completed, None);
    }

    #[test]
    fn rejects_unknown_date_forms() {
        let json = r#"{"id":"1","name":"Run","lastCompleted":"yesterday"}"#;
        assert!(serde_json::from_str::<Habit>(json).is_err());
    }
}
