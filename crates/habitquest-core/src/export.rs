//! Full-state export document.
//!
//! A single JSON object the user can keep as a backup. There is no import
//! side.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::achievement::Achievement;
use crate::error::Result;
use crate::habit::Habit;
use crate::profile::UserProfile;
use crate::tracker::Settings;

pub const DEFAULT_EXPORT_FILE: &str = "habit-tracker-data.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub habits: Vec<Habit>,
    pub total_points: u32,
    pub level: u32,
    pub achievements: Vec<Achievement>,
    pub user: Option<UserProfile>,
    pub settings: Settings,
}

impl ExportDocument {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        tracing::info!(path = %path.display(), habits = self.habits.len(), "exported data");
        Ok(())
    }
}
