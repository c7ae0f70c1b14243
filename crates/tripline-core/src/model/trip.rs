//! Trips: named, ordered collections of travel events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::datetime::ts_opt;
use crate::model::event::TravelEvent;

/// A named trip owning its events exclusively.
///
/// `start_date`/`end_date` are inferred from the contained events rather
/// than edited directly; call [`update_dates_from_events`](Self::update_dates_from_events)
/// after any event mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    #[serde(with = "ts_opt", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(with = "ts_opt", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub events: Vec<TravelEvent>,
}

impl Trip {
    /// Create an empty trip with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            start_date: None,
            end_date: None,
            events: Vec::new(),
        }
    }

    /// Recompute `start_date`/`end_date` as the min/max of event times.
    ///
    /// An event's end time counts toward the trip end when present, so a
    /// hotel stay reaching past the last departure extends the trip.
    pub fn update_dates_from_events(&mut self) {
        self.start_date = self.events.iter().map(|e| e.start_time).min();
        self.end_date = self
            .events
            .iter()
            .map(|e| e.end_time.unwrap_or(e.start_time))
            .max();
    }

    /// Keep events ordered by start time. Stable, so same-instant events
    /// retain their insertion order.
    pub fn sort_events(&mut self) {
        self.events.sort_by_key(|e| e.start_time);
    }
}
