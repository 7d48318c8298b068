//! Rewards store commands.

use clap::Subcommand;

use super::Session;

#[derive(Subcommand)]
pub enum RewardAction {
    /// List rewards and prices
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Spend points on a reward
    Buy {
        /// Reward ID
        id: String,
    },
}

pub fn run(action: RewardAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    match action {
        RewardAction::List { json } => {
            let rewards = session.tracker.rewards();
            if json {
                println!("{}", serde_json::to_string_pretty(rewards)?);
            } else {
                println!("Points: {}", session.tracker.progress().total_points);
                for r in rewards {
                    let status = if r.purchased {
                        "owned".to_string()
                    } else {
                        format!("{} pts", r.cost)
                    };
                    println!("  {} {} {} ({}) - {status}", r.id, r.icon, r.name, r.category);
                    println!("      {}", r.description);
                }
            }
        }
        RewardAction::Buy { id } => {
            let events = session.tracker.purchase_reward(&id);
            if !session.commit(&events)? {
                match session.tracker.rewards().iter().find(|r| r.id == id) {
                    None => eprintln!("Reward not found: {id}"),
                    Some(r) if r.purchased => eprintln!("{} is already owned", r.name),
                    Some(r) => eprintln!(
                        "Not enough points: {} costs {}, you have {}",
                        r.name,
                        r.cost,
                        session.tracker.progress().total_points
                    ),
                }
            }
        }
    }
    Ok(())
}
