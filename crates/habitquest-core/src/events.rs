use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every committed state change in the tracker produces at least one Event.
/// An operation that returns no events left the state untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    HabitAdded {
        habit_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    HabitCompleted {
        habit_id: String,
        name: String,
        streak: u32,
        points_earned: u32,
        at: DateTime<Utc>,
    },
    /// A completion was taken back on the same day.
    HabitUndone {
        habit_id: String,
        name: String,
        points_lost: u32,
        at: DateTime<Utc>,
    },
    HabitDeleted {
        habit_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    LevelUp {
        level: u32,
        at: DateTime<Utc>,
    },
    AchievementUnlocked {
        achievement_id: String,
        name: String,
        description: String,
        at: DateTime<Utc>,
    },
    RewardPurchased {
        reward_id: String,
        name: String,
        cost: u32,
        at: DateTime<Utc>,
    },
    ThemeUnlocked {
        theme_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    ThemeSelected {
        theme_id: String,
        at: DateTime<Utc>,
    },
    LoggedIn {
        user_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    LoggedOut {
        at: DateTime<Utc>,
    },
    SettingChanged {
        key: String,
        value: bool,
        at: DateTime<Utc>,
    },
    /// Stale "completed today" flags were cleared at the start of a new day.
    DayRolledOver {
        habits_reset: usize,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short human-readable feedback line for this event.
    pub fn message(&self) -> String {
        match self {
            Event::HabitAdded { name, .. } => format!("New habit \"{name}\" added successfully!"),
            Event::HabitCompleted {
                name,
                streak,
                points_earned,
                ..
            } => format!(
                "{name} completed! Earned {points_earned} points. Current streak: {streak} days."
            ),
            Event::HabitUndone {
                name, points_lost, ..
            } => format!("{name} marked as incomplete. Lost {points_lost} points."),
            Event::HabitDeleted { name, .. } => format!("Habit \"{name}\" deleted."),
            Event::LevelUp { level, .. } => {
                format!("Congratulations! You've reached level {level}!")
            }
            Event::AchievementUnlocked {
                name, description, ..
            } => format!("Achievement unlocked: {name}! {description}"),
            Event::RewardPurchased { name, cost, .. } => {
                format!("Purchased {name} for {cost} points.")
            }
            Event::ThemeUnlocked { name, .. } => format!("Theme \"{name}\" unlocked."),
            Event::ThemeSelected { theme_id, .. } => format!("Theme switched to {theme_id}."),
            Event::LoggedIn { name, .. } => format!("Welcome, {name}!"),
            Event::LoggedOut { .. } => "Logged out.".to_string(),
            Event::SettingChanged { key, value, .. } => {
                format!("{key} {}.", if *value { "enabled" } else { "disabled" })
            }
            Event::DayRolledOver { habits_reset, .. } => {
                format!("New day: {habits_reset} habit(s) ready to check in again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::LevelUp {
            level: 2,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "LevelUp");
        assert_eq!(json["level"], 2);
    }

    #[test]
    fn completion_message_mentions_streak() {
        let event = Event::HabitCompleted {
            habit_id: "1".into(),
            name: "Read".into(),
            streak: 3,
            points_earned: 10,
            at: Utc::now(),
        };
        assert_eq!(
            event.message(),
            "Read completed! Earned 10 points. Current streak: 3 days."
        );
    }
}
