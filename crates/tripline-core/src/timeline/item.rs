//! Render-ready timeline items.
//!
//! These are pure view-model output: recomputed from the live event list
//! on every render, never persisted, never mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::TravelEvent;

/// One entry in a day's schedule.
///
/// Either a real event or a synthetic item derived from the event set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineItem {
    /// A travel event, placed on the day of its start time.
    Event { event: TravelEvent },
    /// Gap between two transport-class events, under 24 hours.
    Connection {
        duration_label: String,
        location_label: String,
    },
    /// Hotel includes breakfast this morning.
    Breakfast { hotel_name: String },
    /// Night spent at a hotel checked into on an earlier day.
    Staying { title: String },
    /// Check-out due today.
    CheckoutHint { title: String },
}

/// One calendar day plus its ordered items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub items: Vec<TimelineItem>,
}
