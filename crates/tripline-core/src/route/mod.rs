//! Map route generation.
//!
//! Turns events carrying origin/destination coordinates into polylines,
//! deduplicating repeated routes: a journey traveled once draws as a
//! straight line, a journey traveled N times fans out into N Bézier
//! curves offset symmetrically around the straight path.

pub mod curve;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{EventType, GeoPoint, TravelEvent};

/// Two endpoints closer than this (in degrees, per axis) are treated as
/// the same place, e.g. a ride that starts and ends at one point.
const COINCIDENT_TOLERANCE: f64 = 0.001;

/// Perpendicular displacement per duplicate-index step, as a fraction of
/// chord length.
const OFFSET_STEP: f64 = 0.2;

/// Display color for a route, keyed by event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteColor {
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    Yellow,
    Teal,
    Gray,
}

impl RouteColor {
    /// The display layer's palette, one color per event type.
    pub fn for_event_type(event_type: EventType) -> Self {
        match event_type {
            EventType::Flight => Self::Blue,
            EventType::Hotel => Self::Green,
            EventType::Train => Self::Orange,
            EventType::Car => Self::Purple,
            EventType::Dining => Self::Red,
            EventType::Activity => Self::Yellow,
            EventType::Transport => Self::Teal,
            EventType::Other => Self::Gray,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Teal => "teal",
            Self::Gray => "gray",
        }
    }
}

/// An ordered point sequence plus display color, ready for map rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedPolyline {
    pub points: Vec<GeoPoint>,
    pub color: RouteColor,
}

/// Build one polyline per event that carries both endpoints.
///
/// Pure: recomputed from the live event list on every render.
pub fn build_routes(events: &[TravelEvent]) -> Vec<RoutedPolyline> {
    let journeys: Vec<(&TravelEvent, GeoPoint, GeoPoint)> = events
        .iter()
        .filter_map(|e| {
            let origin = e.origin_coordinates?;
            let destination = e.destination_coordinates?;
            if is_coincident(origin, destination) {
                return None;
            }
            Some((e, origin, destination))
        })
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for (_, origin, destination) in &journeys {
        *counts.entry(route_key(*origin, *destination)).or_default() += 1;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    journeys
        .into_iter()
        .map(|(event, origin, destination)| {
            let key = route_key(origin, destination);
            let count = counts[&key];
            let index = seen.entry(key).or_default();
            let occurrence = *index;
            *index += 1;

            let points = if count == 1 {
                vec![origin, destination]
            } else {
                // Center the duplicate indices so offsets sum to zero
                let centered = occurrence as f64 - (count - 1) as f64 / 2.0;
                let control = curve::offset_control_point(
                    origin,
                    destination,
                    centered * OFFSET_STEP,
                );
                curve::sample_quadratic(origin, control, destination)
            };

            RoutedPolyline {
                points,
                color: RouteColor::for_event_type(event.event_type),
            }
        })
        .collect()
}

fn is_coincident(a: GeoPoint, b: GeoPoint) -> bool {
    (a.lat - b.lat).abs() < COINCIDENT_TOLERANCE && (a.lng - b.lng).abs() < COINCIDENT_TOLERANCE
}

/// Direction-independent identity for an origin/destination pair.
///
/// Endpoints are rounded to 4 decimals and the two coordinate strings
/// ordered lexicographically, so A→B and B→A share a key.
fn route_key(a: GeoPoint, b: GeoPoint) -> String {
    let ka = format!("{:.4},{:.4}", a.lat, a.lng);
    let kb = format!("{:.4},{:.4}", b.lat, b.lng);
    if ka <= kb {
        format!("{ka}|{kb}")
    } else {
        format!("{kb}|{ka}")
    }
}
