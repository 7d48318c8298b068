use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitquest", version, about = "HabitQuest CLI")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Points and level
    Progress {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Achievement list
    Achievements {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rewards store
    Reward {
        #[command(subcommand)]
        action: commands::reward::RewardAction,
    },
    /// Theme selection
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// User preferences
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Local profile (no real authentication)
    Account {
        #[command(subcommand)]
        action: commands::account::AccountAction,
    },
    /// Export all data as JSON
    Export {
        /// Output file (default: ./habit-tracker-data.json)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Progress { json } => commands::progress::run(json),
        Commands::Achievements { json } => commands::achievements::run(json),
        Commands::Reward { action } => commands::reward::run(action),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Account { action } => commands::account::run(action),
        Commands::Export { output } => commands::export::run(output),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "habitquest", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
