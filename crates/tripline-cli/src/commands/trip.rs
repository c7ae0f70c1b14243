use clap::Subcommand;
use tripline_core::{Trip, TripStore};

#[derive(Subcommand)]
pub enum TripAction {
    /// List all trips
    List,
    /// Create a new trip
    Add {
        /// Trip name
        name: String,
    },
    /// Show one trip as JSON
    Show {
        /// Trip id
        id: String,
    },
    /// Delete a trip
    Delete {
        /// Trip id
        id: String,
    },
    /// Export a trip to a JSON file
    Export {
        /// Trip id
        id: String,
        /// Output path (stdout if omitted)
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
    /// Import a trip from a JSON export file
    Import {
        /// Path to the export file
        file: std::path::PathBuf,
    },
}

pub fn run(action: TripAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TripStore::open_default()?;
    match action {
        TripAction::List => {
            for trip in store.trips() {
                let dates = match (&trip.start_date, &trip.end_date) {
                    (Some(start), Some(end)) => {
                        format!("  {} .. {}", start.date_naive(), end.date_naive())
                    }
                    _ => String::new(),
                };
                println!("{}  {} ({} events){}", trip.id, trip.name, trip.events.len(), dates);
            }
        }
        TripAction::Add { name } => {
            let trip = store.add_trip(Trip::new(name))?;
            println!("{}", trip.id);
        }
        TripAction::Show { id } => {
            let trip = store
                .get(&id)
                .ok_or_else(|| format!("trip not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(trip)?);
        }
        TripAction::Delete { id } => {
            store.delete_trip(&id)?;
            println!("deleted {id}");
        }
        TripAction::Export { id, out } => {
            let json = store.export_trip(&id)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("exported to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        TripAction::Import { file } => {
            let json = std::fs::read_to_string(&file)?;
            let trip = store.import_trip(&json)?;
            println!("{}", trip.id);
        }
    }
    Ok(())
}
