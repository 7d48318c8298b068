//! Habit management commands.

use clap::Subcommand;

use super::Session;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Start tracking a new habit
    Add {
        /// Habit name
        name: String,
    },
    /// Mark a habit done for today, or undo today's completion
    Toggle {
        /// Habit ID
        id: String,
    },
    /// Stop tracking a habit (earned points are kept)
    Delete {
        /// Habit ID
        id: String,
    },
    /// List habits
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    match action {
        HabitAction::Add { name } => {
            let events = session.tracker.add_habit(&name);
            if session.commit(&events)? {
                if let Some(habit) = session.tracker.habits().last() {
                    println!("Habit created: {}", habit.id);
                }
            } else {
                eprintln!("Habit name must not be empty");
            }
        }
        HabitAction::Toggle { id } => {
            let events = session.tracker.toggle_habit(&id);
            if !session.commit(&events)? {
                eprintln!("Habit not found: {id}");
            }
        }
        HabitAction::Delete { id } => {
            let events = session.tracker.delete_habit(&id);
            if !session.commit(&events)? {
                eprintln!("Habit not found: {id}");
            }
        }
        HabitAction::List { json } => {
            let habits = session.tracker.habits();
            if json {
                println!("{}", serde_json::to_string_pretty(habits)?);
            } else if habits.is_empty() {
                println!("No habits yet.");
            } else {
                for habit in habits {
                    let mark = if habit.completed_today { "x" } else { " " };
                    println!(
                        "[{mark}] {}  {}  streak {}  total {}",
                        habit.id, habit.name, habit.streak, habit.total_completed
                    );
                }
                println!();
                println!("{}", session.tracker.motivational_message());
            }
        }
    }
    Ok(())
}
