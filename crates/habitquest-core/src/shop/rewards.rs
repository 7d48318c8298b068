//! Rewards catalog.
//!
//! Theme rewards name the theme they unlock by id, so renaming either side
//! never breaks the link.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    #[serde(alias = "themes")]
    Theme,
    #[serde(alias = "features")]
    Feature,
    #[serde(alias = "cosmetics")]
    Cosmetic,
}

impl std::fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RewardCategory::Theme => "theme",
            RewardCategory::Feature => "feature",
            RewardCategory::Cosmetic => "cosmetic",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub cost: u32,
    pub category: RewardCategory,
    #[serde(default)]
    pub purchased: bool,
    /// Theme id unlocked on purchase. Only set for `RewardCategory::Theme`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocks_theme: Option<String>,
}

impl Reward {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        cost: u32,
        category: RewardCategory,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            cost,
            category,
            purchased: false,
            unlocks_theme: None,
        }
    }

    fn unlocking(mut self, theme_id: &str) -> Self {
        self.unlocks_theme = Some(theme_id.to_string());
        self
    }
}

pub fn default_catalog() -> Vec<Reward> {
    vec![
        Reward::new(
            "1",
            "Ocean Theme",
            "Unlock the calming ocean theme",
            "🌊",
            100,
            RewardCategory::Theme,
        )
        .unlocking("ocean"),
        Reward::new(
            "2",
            "Sunset Theme",
            "Unlock the warm sunset theme",
            "🌅",
            150,
            RewardCategory::Theme,
        )
        .unlocking("sunset"),
        Reward::new(
            "3",
            "Premium Stats",
            "Unlock detailed analytics and insights",
            "📊",
            200,
            RewardCategory::Feature,
        ),
        Reward::new(
            "4",
            "Custom Avatars",
            "Unlock custom avatar collection",
            "🎭",
            75,
            RewardCategory::Cosmetic,
        ),
        Reward::new(
            "5",
            "Sound Pack",
            "Unlock premium sound effects",
            "🎵",
            50,
            RewardCategory::Feature,
        ),
        Reward::new(
            "6",
            "Crown Badge",
            "Show off your dedication with a crown",
            "👑",
            300,
            RewardCategory::Cosmetic,
        ),
    ]
}
