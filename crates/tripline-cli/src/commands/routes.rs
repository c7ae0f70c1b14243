use clap::Subcommand;
use tripline_core::{build_routes, TripStore};

#[derive(Subcommand)]
pub enum RoutesAction {
    /// Print the map polylines for a trip as JSON
    Show {
        /// Trip id
        trip_id: String,
    },
}

pub fn run(action: RoutesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RoutesAction::Show { trip_id } => {
            let store = TripStore::open_default()?;
            let trip = store
                .get(&trip_id)
                .ok_or_else(|| format!("trip not found: {trip_id}"))?;
            let routes = build_routes(&trip.events);
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
    }
    Ok(())
}
