use clap::Subcommand;
use tripline_core::{geocode_events, Config, NominatimGeocoder, TripStore};

#[derive(Subcommand)]
pub enum GeocodeAction {
    /// Fill in missing coordinates for a trip's events
    Run {
        /// Trip id
        trip_id: String,
    },
    /// Look up a single location
    Lookup {
        /// Free-text query
        query: String,
    },
}

pub fn run(action: GeocodeAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let geocoder = NominatimGeocoder::from_config(&config.geocoder);
    let runtime = tokio::runtime::Runtime::new()?;

    match action {
        GeocodeAction::Run { trip_id } => {
            let mut store = TripStore::open_default()?;
            let mut trip = store
                .get(&trip_id)
                .ok_or_else(|| format!("trip not found: {trip_id}"))?
                .clone();

            runtime.block_on(geocode_events(&geocoder, &mut trip.events));

            let located = trip
                .events
                .iter()
                .filter(|e| e.origin_coordinates.is_some())
                .count();
            store.update_trip(trip)?;
            println!("geocoded trip {trip_id}: {located} events located");
        }
        GeocodeAction::Lookup { query } => {
            use tripline_core::Geocoder;
            match runtime.block_on(geocoder.lookup(&query)) {
                Ok(Some(point)) => println!("{} {}", point.lat, point.lng),
                Ok(None) => println!("no result"),
                Err(e) => return Err(format!("lookup failed: {e}").into()),
            }
        }
    }
    Ok(())
}
