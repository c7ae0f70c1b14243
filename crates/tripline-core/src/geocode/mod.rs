//! Geocoding collaborator.
//!
//! Lookups run strictly one at a time to respect external rate limits. A
//! failed lookup is non-fatal: the event's coordinates stay unset and the
//! route generator simply skips it.

pub mod nominatim;

use async_trait::async_trait;

use crate::model::{EventData, GeoPoint, TravelEvent};

pub use nominatim::NominatimGeocoder;

/// Free-text location query in, optional coordinates out.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Fill in missing coordinates for a batch of events, sequentially.
///
/// Each endpoint (origin, destination) is queried only when not already
/// set. Lookup errors are logged and skipped.
pub async fn geocode_events<G: Geocoder + ?Sized>(geocoder: &G, events: &mut [TravelEvent]) {
    for event in events.iter_mut() {
        if event.origin_coordinates.is_none() {
            if let Some(query) = origin_query(event) {
                event.origin_coordinates = run_lookup(geocoder, &query).await;
            }
        }
        if event.destination_coordinates.is_none() {
            if let Some(query) = destination_query(event) {
                event.destination_coordinates = run_lookup(geocoder, &query).await;
            }
        }
    }
}

async fn run_lookup<G: Geocoder + ?Sized>(geocoder: &G, query: &str) -> Option<GeoPoint> {
    match geocoder.lookup(query).await {
        Ok(Some(point)) => Some(point),
        Ok(None) => {
            log::debug!("no geocoding result for {query:?}");
            None
        }
        Err(err) => {
            log::warn!("geocoding failed for {query:?}: {err}");
            None
        }
    }
}

/// What to search for as the event's starting point.
pub fn origin_query(event: &TravelEvent) -> Option<String> {
    match &event.data {
        EventData::Flight(f) => Some(
            f.departure_city
                .clone()
                .unwrap_or_else(|| format!("{} Airport", f.departure_airport)),
        ),
        EventData::Hotel(h) => Some(if h.address.is_empty() {
            h.hotel_name.clone()
        } else {
            h.address.clone()
        }),
        EventData::Car(c) => Some(c.origin.clone()),
        EventData::Train(t) => Some(format!("{} Train Station", t.departure_station)),
        EventData::Other(o) => o.location.clone(),
    }
}

/// What to search for as the event's end point. Hotels and plain events
/// have no distinct destination.
pub fn destination_query(event: &TravelEvent) -> Option<String> {
    match &event.data {
        EventData::Flight(f) => Some(
            f.arrival_city
                .clone()
                .unwrap_or_else(|| format!("{} Airport", f.arrival_airport)),
        ),
        EventData::Train(t) => Some(format!("{} Train Station", t.arrival_station)),
        EventData::Car(c) => c.destination.clone(),
        _ => None,
    }
}
