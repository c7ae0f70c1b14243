//! JSON-document trip store.
//!
//! All trips live in one JSON file: full-document read on open,
//! full-document overwrite on every mutation. No partial writes.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::model::Trip;

/// Owner of the persisted trip list.
pub struct TripStore {
    path: PathBuf,
    trips: Vec<Trip>,
}

impl TripStore {
    /// Open the store at the default location (`trips.json` in the data
    /// directory).
    pub fn open_default() -> Result<Self, Box<dyn std::error::Error>> {
        let path = super::data_dir()?.join("trips.json");
        Ok(Self::open(path)?)
    }

    /// Open a store file, creating an empty store if the file does not
    /// exist yet. Events inside loaded trips are kept sorted by start
    /// time.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let trips = match std::fs::read_to_string(&path) {
            Ok(content) => {
                let mut trips: Vec<Trip> = serde_json::from_str(&content)?;
                for trip in &mut trips {
                    trip.sort_events();
                }
                trips
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(StoreError::Io {
                    path,
                    source: err,
                })
            }
        };
        Ok(Self { path, trips })
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn get(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    /// Add a trip, assigning a fresh id when the given one is empty.
    /// Trip dates are refreshed from the events before saving.
    pub fn add_trip(&mut self, mut trip: Trip) -> Result<&Trip, StoreError> {
        if trip.id.is_empty() {
            trip.id = uuid::Uuid::new_v4().to_string();
        }
        trip.update_dates_from_events();
        self.trips.push(trip);
        self.save()?;
        Ok(self.trips.last().expect("just pushed"))
    }

    /// Replace an existing trip wholesale.
    ///
    /// # Errors
    /// Returns [`StoreError::TripNotFound`] when no trip has the given id.
    pub fn update_trip(&mut self, trip: Trip) -> Result<(), StoreError> {
        let Some(slot) = self.trips.iter_mut().find(|t| t.id == trip.id) else {
            return Err(StoreError::TripNotFound(trip.id));
        };
        let mut trip = trip;
        trip.update_dates_from_events();
        trip.sort_events();
        *slot = trip;
        self.save()
    }

    /// Delete a trip by id.
    ///
    /// # Errors
    /// Returns [`StoreError::TripNotFound`] when no trip has the given id.
    pub fn delete_trip(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.trips.len();
        self.trips.retain(|t| t.id != id);
        if self.trips.len() == before {
            return Err(StoreError::TripNotFound(id.to_string()));
        }
        self.save()
    }

    /// Serialize one trip as a standalone export document.
    pub fn export_trip(&self, id: &str) -> Result<String, StoreError> {
        let trip = self
            .get(id)
            .ok_or_else(|| StoreError::TripNotFound(id.to_string()))?;
        Ok(serde_json::to_string_pretty(trip)?)
    }

    /// Import a trip from an export document.
    ///
    /// The trip gets a fresh id to avoid collisions with existing local
    /// trips; embedded event ids are preserved.
    pub fn import_trip(&mut self, json: &str) -> Result<&Trip, StoreError> {
        let mut trip: Trip = serde_json::from_str(json)?;
        trip.id = uuid::Uuid::new_v4().to_string();
        trip.sort_events();
        self.add_trip(trip)
    }

    /// Full-document overwrite.
    fn save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.trips)?;
        std::fs::write(&self.path, content).map_err(|err| StoreError::Io {
            path: self.path.clone(),
            source: err,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventData, EventType, OtherData, TravelEvent};
    use chrono::TimeZone;

    fn store() -> (tempfile::TempDir, TripStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TripStore::open(dir.path().join("trips.json")).unwrap();
        (dir, store)
    }

    fn event(day: u32) -> TravelEvent {
        TravelEvent::new(
            EventType::Other,
            chrono::Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
            EventData::Other(OtherData {
                title: "thing".to_string(),
                description: None,
                location: None,
                time: None,
                fare: None,
                booking_source: None,
            }),
        )
    }

    #[test]
    fn add_and_reload() {
        let (dir, mut store) = store();
        let mut trip = Trip::new("Japan");
        trip.events.push(event(12));
        trip.events.push(event(10));
        let id = store.add_trip(trip).unwrap().id.clone();

        let reloaded = TripStore::open(dir.path().join("trips.json")).unwrap();
        let trip = reloaded.get(&id).unwrap();
        assert_eq!(trip.name, "Japan");
        // Dates inferred, events sorted on load
        assert_eq!(
            trip.start_date,
            Some(chrono::Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap())
        );
        assert!(trip.events[0].start_time < trip.events[1].start_time);
    }

    #[test]
    fn empty_trip_id_gets_assigned() {
        let (_dir, mut store) = store();
        let mut trip = Trip::new("x");
        trip.id = String::new();
        let id = store.add_trip(trip).unwrap().id.clone();
        assert!(!id.is_empty());
    }

    #[test]
    fn update_missing_trip_fails() {
        let (_dir, mut store) = store();
        let err = store.update_trip(Trip::new("ghost")).unwrap_err();
        assert!(matches!(err, StoreError::TripNotFound(_)));
    }

    #[test]
    fn delete_missing_trip_fails() {
        let (_dir, mut store) = store();
        let err = store.delete_trip("nope").unwrap_err();
        assert!(matches!(err, StoreError::TripNotFound(_)));
    }

    #[test]
    fn export_import_assigns_fresh_trip_id_keeps_event_ids() {
        let (_dir, mut store) = store();
        let mut trip = Trip::new("Korea");
        trip.events.push(event(5));
        let original_event_id = trip.events[0].id.clone();
        let original_trip_id = store.add_trip(trip).unwrap().id.clone();

        let exported = store.export_trip(&original_trip_id).unwrap();
        let imported = store.import_trip(&exported).unwrap();

        assert_ne!(imported.id, original_trip_id);
        assert_eq!(imported.events[0].id, original_event_id);
    }

    #[test]
    fn corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            TripStore::open(path),
            Err(StoreError::Corrupt(_))
        ));
    }
}
