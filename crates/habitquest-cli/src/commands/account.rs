//! Local profile commands.
//!
//! These only record who is using the tracker. Credentials are never checked
//! or stored.

use clap::Subcommand;

use super::Session;

#[derive(Subcommand)]
pub enum AccountAction {
    /// Sign in with an email address
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a profile
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the profile
    Logout,
    /// Show the current profile
    Status,
}

pub fn run(action: AccountAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    match action {
        AccountAction::Login { email, password } => {
            let events = session.tracker.login(&email, &password);
            if !session.commit(&events)? {
                eprintln!("Email and password are required");
            }
        }
        AccountAction::Signup {
            name,
            email,
            password,
        } => {
            let events = session.tracker.signup(&name, &email, &password);
            if !session.commit(&events)? {
                eprintln!("Name, email and password are required");
            }
        }
        AccountAction::Logout => {
            let events = session.tracker.logout();
            if !session.commit(&events)? {
                println!("not logged in");
            }
        }
        AccountAction::Status => match session.tracker.profile() {
            Some(profile) if session.tracker.is_logged_in() => {
                println!("{}", serde_json::to_string_pretty(profile)?)
            }
            _ => println!("not logged in"),
        },
    }
    Ok(())
}
