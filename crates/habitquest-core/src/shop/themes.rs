//! Theme catalog. Only the default theme starts unlocked.

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub background: String,
    #[serde(default)]
    pub unlocked: bool,
}

impl Theme {
    fn new(id: &str, name: &str, primary: &str, secondary: &str, background: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            background: background.to_string(),
            unlocked: id == DEFAULT_THEME_ID,
        }
    }
}

pub fn default_catalog() -> Vec<Theme> {
    vec![
        Theme::new(DEFAULT_THEME_ID, "Default", "purple", "blue", "gradient"),
        Theme::new("ocean", "Ocean Breeze", "cyan", "blue", "ocean"),
        Theme::new("sunset", "Sunset Glow", "orange", "pink", "sunset"),
        Theme::new("forest", "Forest Green", "green", "emerald", "forest"),
        Theme::new("royal", "Royal Purple", "violet", "purple", "royal"),
        Theme::new("minimal", "Minimal Gray", "gray", "slate", "minimal"),
    ]
}
