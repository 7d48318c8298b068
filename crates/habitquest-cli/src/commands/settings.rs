use clap::{Subcommand, ValueEnum};

use super::Session;

#[derive(Clone, Copy, ValueEnum)]
pub enum SettingKey {
    DarkMode,
    Notifications,
    SoundEffects,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show,
    /// Change a setting
    Set {
        key: SettingKey,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    match action {
        SettingsAction::Show => {
            println!("{}", serde_json::to_string_pretty(session.tracker.settings())?);
        }
        SettingsAction::Set { key, value } => {
            let events = match key {
                SettingKey::DarkMode => session.tracker.set_dark_mode(value),
                SettingKey::Notifications => session.tracker.set_notifications(value),
                SettingKey::SoundEffects => session.tracker.set_sound_effects(value),
            };
            if !session.commit(&events)? {
                println!("unchanged");
            }
        }
    }
    Ok(())
}
