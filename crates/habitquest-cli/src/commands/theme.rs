use clap::Subcommand;

use super::Session;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// List themes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Switch to an unlocked theme
    Select {
        /// Theme ID
        id: String,
    },
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    match action {
        ThemeAction::List { json } => {
            let themes = session.tracker.themes();
            if json {
                println!("{}", serde_json::to_string_pretty(themes)?);
            } else {
                let active = &session.tracker.active_theme().id;
                for t in themes {
                    let marker = if &t.id == active { "*" } else { " " };
                    let status = if t.unlocked { "" } else { " (locked)" };
                    println!(
                        "{marker} {} - {} [{}/{}]{status}",
                        t.id, t.name, t.primary, t.secondary
                    );
                }
            }
        }
        ThemeAction::Select { id } => {
            let events = session.tracker.select_theme(&id);
            if !session.commit(&events)? {
                if session.tracker.active_theme().id == id {
                    println!("Theme {id} is already active");
                } else {
                    eprintln!("Theme {id} is unknown or still locked");
                }
            }
        }
    }
    Ok(())
}
