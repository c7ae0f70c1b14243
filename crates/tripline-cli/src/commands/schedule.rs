use clap::Subcommand;
use tripline_core::{build_schedule, TripStore};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Print the day-by-day schedule for a trip as JSON
    Show {
        /// Trip id
        trip_id: String,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Show { trip_id } => {
            let store = TripStore::open_default()?;
            let trip = store
                .get(&trip_id)
                .ok_or_else(|| format!("trip not found: {trip_id}"))?;
            let days = build_schedule(&trip.events);
            println!("{}", serde_json::to_string_pretty(&days)?);
        }
    }
    Ok(())
}
