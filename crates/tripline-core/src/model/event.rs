//! The travel event type and its closed tag set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::datetime::{ts, ts_opt};
use crate::model::data::EventData;

/// Closed set of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Flight,
    Hotel,
    Train,
    Car,
    Transport,
    Activity,
    Dining,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "FLIGHT",
            Self::Hotel => "HOTEL",
            Self::Train => "TRAIN",
            Self::Car => "CAR",
            Self::Transport => "TRANSPORT",
            Self::Activity => "ACTIVITY",
            Self::Dining => "DINING",
            Self::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Flight => "Flight",
            Self::Hotel => "Hotel",
            Self::Train => "Train",
            Self::Car => "Car Rental",
            Self::Transport => "Transport",
            Self::Activity => "Activity",
            Self::Dining => "Dining",
            Self::Other => "Other",
        }
    }

    /// Transport-class events are eligible for layover connection
    /// synthesis on the timeline.
    pub fn is_transport_class(&self) -> bool {
        matches!(self, Self::Flight | Self::Train | Self::Transport)
    }
}

/// A geographic point, WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One timestamped travel occurrence.
///
/// `event_type` and the `data` variant always agree; the decoder in
/// [`crate::parse`] rejects events where they do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(with = "ts")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "ts_opt", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_coordinates: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_coordinates: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
    pub data: EventData,
}

impl TravelEvent {
    /// Create an event with a fresh id and no optional fields set.
    pub fn new(event_type: EventType, start_time: DateTime<Utc>, data: EventData) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            start_time,
            end_time: None,
            origin_coordinates: None,
            destination_coordinates: None,
            detected_language: None,
            data,
        }
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_origin(mut self, point: GeoPoint) -> Self {
        self.origin_coordinates = Some(point);
        self
    }

    pub fn with_destination(mut self, point: GeoPoint) -> Self {
        self.destination_coordinates = Some(point);
        self
    }

    /// Short human-readable title, derived from the payload.
    pub fn display_title(&self) -> String {
        match &self.data {
            EventData::Flight(f) => match &f.airline_code {
                Some(code) => format!("{code}{}", f.flight_number),
                None => format!("{} {}", f.airline, f.flight_number),
            },
            EventData::Hotel(h) => h.hotel_name.clone(),
            EventData::Train(t) => format!(
                "{} {}",
                t.service_provider.as_deref().unwrap_or("Train"),
                t.train_number.as_deref().unwrap_or("")
            )
            .trim_end()
            .to_string(),
            EventData::Car(c) => c.car_brand.clone().unwrap_or_else(|| "Ride".to_string()),
            EventData::Other(o) => o.title.clone(),
        }
    }

    /// Human-readable location line, derived from the payload.
    pub fn display_location(&self) -> String {
        match &self.data {
            EventData::Flight(f) => {
                let start = f.departure_city.as_deref().unwrap_or(&f.departure_airport);
                let end = f.arrival_city.as_deref().unwrap_or(&f.arrival_airport);
                format!("{start} to {end}")
            }
            EventData::Hotel(h) => h.address.clone(),
            EventData::Train(t) => format!("{} to {}", t.departure_station, t.arrival_station),
            EventData::Car(c) => match &c.destination {
                Some(dest) => format!("{} to {}", c.origin, dest),
                None => c.origin.clone(),
            },
            EventData::Other(o) => o.location.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::data::{FlightData, OtherData};
    use chrono::TimeZone;

    fn flight_data() -> FlightData {
        FlightData {
            airline: "AirSwift".to_string(),
            brand_domain: None,
            airline_code: Some("AS".to_string()),
            flight_number: "123".to_string(),
            confirmation_code: "ABC123".to_string(),
            passenger: None,
            travel_class: None,
            departure_city: Some("Tokyo".to_string()),
            arrival_city: None,
            departure_airport: "HND".to_string(),
            departure_country: None,
            departure_country_code: None,
            departure_terminal: None,
            departure_gate: None,
            check_in_desk: None,
            seat: None,
            aircraft: None,
            aircraft_registration: None,
            departure_time: Utc.with_ymd_and_hms(2026, 1, 20, 5, 30, 0).unwrap(),
            arrival_airport: "SIN".to_string(),
            arrival_country: None,
            arrival_country_code: None,
            arrival_terminal: None,
            arrival_time: Utc.with_ymd_and_hms(2026, 1, 20, 12, 30, 0).unwrap(),
            etkt: None,
            fare: None,
            booking_source: None,
            baggage: None,
        }
    }

    #[test]
    fn transport_class_membership() {
        assert!(EventType::Flight.is_transport_class());
        assert!(EventType::Train.is_transport_class());
        assert!(EventType::Transport.is_transport_class());
        assert!(!EventType::Hotel.is_transport_class());
        assert!(!EventType::Car.is_transport_class());
        assert!(!EventType::Dining.is_transport_class());
    }

    #[test]
    fn flight_display_helpers() {
        let data = flight_data();
        let event = TravelEvent::new(
            EventType::Flight,
            data.departure_time,
            EventData::Flight(data),
        );
        assert_eq!(event.display_title(), "AS123");
        assert_eq!(event.display_location(), "Tokyo to SIN");
    }

    #[test]
    fn event_type_wire_names_are_screaming() {
        let json = serde_json::to_string(&EventType::Flight).unwrap();
        assert_eq!(json, "\"FLIGHT\"");
        let back: EventType = serde_json::from_str("\"DINING\"").unwrap();
        assert_eq!(back, EventType::Dining);
    }

    #[test]
    fn event_round_trips_with_camel_case_fields() {
        let event = TravelEvent::new(
            EventType::Activity,
            Utc.with_ymd_and_hms(2026, 1, 21, 9, 0, 0).unwrap(),
            EventData::Other(OtherData {
                title: "Walking tour".to_string(),
                description: None,
                location: Some("Kyoto".to_string()),
                time: None,
                fare: None,
                booking_source: None,
            }),
        )
        .with_origin(GeoPoint::new(35.0116, 135.7681));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ACTIVITY");
        assert!(json["startTime"].is_string());
        assert!(json["originCoordinates"]["lat"].is_number());
        assert!(json.get("endTime").is_none());

        let back: TravelEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
