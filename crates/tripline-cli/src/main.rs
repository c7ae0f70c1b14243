use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tripline-cli", version, about = "Tripline CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trip management
    Trip {
        #[command(subcommand)]
        action: commands::trip::TripAction,
    },
    /// Day-by-day schedule for a trip
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Map routes for a trip
    Routes {
        #[command(subcommand)]
        action: commands::routes::RoutesAction,
    },
    /// Parse bookings out of text, images or PDFs
    Parse {
        #[command(subcommand)]
        action: commands::parse::ParseAction,
    },
    /// Geocode event locations
    Geocode {
        #[command(subcommand)]
        action: commands::geocode::GeocodeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Trip { action } => commands::trip::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Routes { action } => commands::routes::run(action),
        Commands::Parse { action } => commands::parse::run(action),
        Commands::Geocode { action } => commands::geocode::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
