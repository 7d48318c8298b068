//! Achievement catalog and unlock evaluation.
//!
//! Achievements are a fixed catalog. Evaluation only ever flips `unlocked`
//! from false to true; an unlocked achievement is never looked at again.

use serde::{Deserialize, Serialize};

use crate::habit::Habit;

/// What an achievement's requirement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementKind {
    /// Longest current streak across all habits.
    #[serde(rename = "streak")]
    Streak,
    /// Lifetime completions summed over all habits.
    #[serde(rename = "total")]
    TotalCompletions,
    /// Number of habits being tracked.
    #[serde(rename = "habits")]
    HabitCount,
}

impl AchievementKind {
    pub fn is_met(&self, summary: &HabitSummary, requirement: u32) -> bool {
        let value = match self {
            AchievementKind::Streak => summary.max_streak,
            AchievementKind::TotalCompletions => summary.total_completed,
            AchievementKind::HabitCount => summary.habit_count,
        };
        value >= requirement
    }

    pub fn label(&self) -> &'static str {
        match self {
            AchievementKind::Streak => "streak",
            AchievementKind::TotalCompletions => "total",
            AchievementKind::HabitCount => "habits",
        }
    }
}

/// Aggregate figures the achievement thresholds are checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub max_streak: u32,
    pub total_completed: u32,
    pub habit_count: u32,
}

impl HabitSummary {
    pub fn from_habits(habits: &[Habit]) -> Self {
        Self {
            max_streak: habits.iter().map(|h| h.streak).max().unwrap_or(0),
            total_completed: habits
                .iter()
                .fold(0u32, |acc, h| acc.saturating_add(h.total_completed)),
            habit_count: u32::try_from(habits.len()).unwrap_or(u32::MAX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub unlocked: bool,
    pub requirement: u32,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
}

impl Achievement {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        requirement: u32,
        kind: AchievementKind,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: false,
            requirement,
            kind,
        }
    }
}

/// The built-in achievement catalog, all locked.
pub fn default_catalog() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "1",
            "First Step",
            "Complete your first habit",
            "🎯",
            1,
            AchievementKind::TotalCompletions,
        ),
        Achievement::new(
            "2",
            "Streak Master",
            "Maintain a 7-day streak",
            "🔥",
            7,
            AchievementKind::Streak,
        ),
        Achievement::new(
            "3",
            "Habit Builder",
            "Create 5 habits",
            "🏗️",
            5,
            AchievementKind::HabitCount,
        ),
        Achievement::new(
            "4",
            "Consistency King",
            "Complete 50 habits total",
            "👑",
            50,
            AchievementKind::TotalCompletions,
        ),
        Achievement::new(
            "5",
            "Fire Keeper",
            "Maintain a 30-day streak",
            "🌟",
            30,
            AchievementKind::Streak,
        ),
    ]
}

/// Unlock every locked achievement whose threshold `summary` meets.
///
/// Returns clones of the achievements unlocked by this call, in catalog order.
pub fn recompute(achievements: &mut [Achievement], summary: &HabitSummary) -> Vec<Achievement> {
    let mut newly_unlocked = Vec::new();
    for achievement in achievements.iter_mut().filter(|a| !a.unlocked) {
        if achievement.kind.is_met(summary, achievement.requirement) {
            achievement.unlocked = true;
            newly_unlocked.push(achievement.clone());
        }
    }
    newly_unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(max_streak: u32, total_completed: u32, habit_count: u32) -> HabitSummary {
        HabitSummary {
            max_streak,
            total_completed,
            habit_count,
        }
    }

    #[test]
    fn summary_of_no_habits_is_zero() {
        assert_eq!(HabitSummary::from_habits(&[]), HabitSummary::default());
    }

    #[test]
    fn summary_takes_max_streak_and_sums_completions() {
        let mut a = Habit::new("a").unwrap();
        a.streak = 4;
        a.total_completed = 10;
        let mut b = Habit::new("b").unwrap();
        b.streak = 9;
        b.total_completed = 2;
        let s = HabitSummary::from_habits(&[a, b]);
        assert_eq!(s, summary(9, 12, 2));
    }

    #[test]
    fn catalog_starts_locked() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.iter().all(|a| !a.unlocked));
    }

    #[test]
    fn streak_master_needs_seven() {
        let mut catalog = default_catalog();
        assert!(recompute(&mut catalog, &summary(6, 6, 1))
            .iter()
            .all(|a| a.name != "Streak Master"));
        let unlocked = recompute(&mut catalog, &summary(7, 7, 1));
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].name, "Streak Master");
    }

    #[test]
    fn recompute_is_monotonic() {
        let mut catalog = default_catalog();
        recompute(&mut catalog, &summary(30, 50, 5));
        assert!(catalog.iter().all(|a| a.unlocked));
        let again = recompute(&mut catalog, &HabitSummary::default());
        assert!(again.is_empty());
        assert!(catalog.iter().all(|a| a.unlocked));
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let json = serde_json::to_value(&default_catalog()[2]).unwrap();
        assert_eq!(json["type"], "habits");
    }
}
