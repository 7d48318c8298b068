//! Points and level bookkeeping.

use serde::{Deserialize, Serialize};

/// Point total and level. Points never go negative and the level never drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total_points: u32,
    pub level: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: 1,
        }
    }
}

impl Progress {
    /// Points needed to leave the current level.
    pub fn points_to_next_level(&self, points_per_level: u32) -> u32 {
        self.level.saturating_mul(points_per_level)
    }

    /// Position within the current hundred-point band.
    pub fn level_progress(&self, points_per_level: u32) -> u32 {
        if points_per_level == 0 {
            return 0;
        }
        self.total_points % points_per_level
    }

    /// Add points. Crossing the threshold raises the level by exactly one,
    /// however many thresholds the award spans. Returns true on level-up.
    pub fn award(&mut self, points: u32, points_per_level: u32) -> bool {
        self.total_points = self.total_points.saturating_add(points);
        if self.total_points >= self.points_to_next_level(points_per_level) {
            self.level = self.level.saturating_add(1);
            return true;
        }
        false
    }

    /// Remove points, clamping at zero.
    pub fn deduct(&mut self, points: u32) {
        self.total_points = self.total_points.saturating_sub(points);
    }

    /// Pay `cost` if affordable. Returns false and changes nothing otherwise.
    pub fn spend(&mut self, cost: u32) -> bool {
        if cost > self.total_points {
            return false;
        }
        self.total_points -= cost;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_level_one() {
        let p = Progress::default();
        assert_eq!(p.total_points, 0);
        assert_eq!(p.level, 1);
        assert_eq!(p.points_to_next_level(100), 100);
    }

    #[test]
    fn level_up_when_threshold_reached() {
        let mut p = Progress {
            total_points: 90,
            level: 1,
        };
        assert!(p.award(10, 100));
        assert_eq!(p.level, 2);
        assert_eq!(p.points_to_next_level(100), 200);
    }

    #[test]
    fn big_award_only_raises_one_level() {
        let mut p = Progress::default();
        assert!(p.award(350, 100));
        assert_eq!(p.level, 2);
    }

    #[test]
    fn deduct_clamps_at_zero_and_keeps_level() {
        let mut p = Progress {
            total_points: 5,
            level: 3,
        };
        p.deduct(10);
        assert_eq!(p.total_points, 0);
        assert_eq!(p.level, 3);
    }

    #[test]
    fn spend_rejects_unaffordable_cost() {
        let mut p = Progress {
            total_points: 40,
            level: 1,
        };
        assert!(!p.spend(50));
        assert_eq!(p.total_points, 40);
        assert!(p.spend(40));
        assert_eq!(p.total_points, 0);
    }

    #[test]
    fn level_progress_wraps_per_band() {
        let p = Progress {
            total_points: 230,
            level: 3,
        };
        assert_eq!(p.level_progress(100), 30);
        assert_eq!(p.level_progress(0), 0);
    }
}
