//! Mode-specific event payloads and the tagged `data` union.
//!
//! On the wire the union is a single-key object whose key is the lowercase
//! variant name: `{"flight": {...}}`, `{"hotel": {...}}` and so on. Serde's
//! externally-tagged enum representation produces exactly that shape, so no
//! hand-rolled container dance is needed. Every timestamp field is a string
//! decoded through the tolerant normalizer in [`crate::datetime`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::datetime::{ts, ts_opt};
use crate::model::event::EventType;

/// Agency or website a booking was made through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "isOTA", default, skip_serializing_if = "Option::is_none")]
    pub is_ota: Option<bool>,
}

/// Price paid for a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fare {
    pub currency: String,
    pub amount: f64,
}

/// Cabin vs. checked baggage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaggageType {
    #[serde(rename = "Carry-on")]
    CarryOn,
    Checked,
}

/// One piece of baggage on a flight booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaggageItem {
    pub id: String,
    #[serde(rename = "type")]
    pub baggage_type: BaggageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "isLCCMode", default)]
    pub is_lcc_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    pub airline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_code: Option<String>,
    pub flight_number: String,
    pub confirmation_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_city: Option<String>,
    pub departure_airport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_desk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_registration: Option<String>,
    #[serde(with = "ts")]
    pub departure_time: DateTime<Utc>,
    pub arrival_airport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_terminal: Option<String>,
    #[serde(with = "ts")]
    pub arrival_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etkt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_source: Option<BookingSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baggage: Option<Vec<BaggageItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_class: Option<String>,
    pub departure_station: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_country_code: Option<String>,
    #[serde(with = "ts")]
    pub departure_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    pub arrival_station: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_country_code: Option<String>,
    #[serde(with = "ts")]
    pub arrival_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_source: Option<BookingSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_domain: Option<String>,
    pub origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_country_code: Option<String>,
    #[serde(with = "ts")]
    pub pickup_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_source: Option<BookingSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelData {
    pub hotel_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_domain: Option<String>,
    pub address: String,
    #[serde(with = "ts_opt", default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(with = "ts_opt", default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    pub number_of_nights: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_breakfast_included: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_included: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_source: Option<BookingSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_source: Option<BookingSource>,
}

/// Mode-specific payload of a [`TravelEvent`](crate::model::TravelEvent).
///
/// Wire shape: `{"<variant>": {...}}` with variant one of
/// `flight|train|car|hotel|other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventData {
    Flight(FlightData),
    Train(TrainData),
    Car(CarData),
    Hotel(HotelData),
    Other(OtherData),
}

impl EventData {
    /// The wire key of this variant.
    pub fn variant_key(&self) -> &'static str {
        match self {
            Self::Flight(_) => "flight",
            Self::Train(_) => "train",
            Self::Car(_) => "car",
            Self::Hotel(_) => "hotel",
            Self::Other(_) => "other",
        }
    }

    /// The event type this variant naturally corresponds to.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Flight(_) => EventType::Flight,
            Self::Train(_) => EventType::Train,
            Self::Car(_) => EventType::Car,
            Self::Hotel(_) => EventType::Hotel,
            Self::Other(_) => EventType::Other,
        }
    }

    /// Whether this payload variant is valid for the given event type.
    ///
    /// The dedicated variants must match exactly; the `other` payload also
    /// covers the types without a dedicated schema (Transport, Activity,
    /// Dining).
    pub fn compatible_with(&self, event_type: EventType) -> bool {
        match self {
            Self::Other(_) => matches!(
                event_type,
                EventType::Other | EventType::Transport | EventType::Activity | EventType::Dining
            ),
            _ => self.event_type() == event_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_wire_shape_is_single_key() {
        let data = EventData::Other(OtherData {
            title: "Museum visit".to_string(),
            description: None,
            location: Some("Ueno".to_string()),
            time: None,
            fare: None,
            booking_source: None,
        });

        let json = serde_json::to_value(&data).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("other"));
    }

    #[test]
    fn hotel_round_trips_through_wire_form() {
        let json = serde_json::json!({
            "hotel": {
                "hotelName": "Park Hyatt",
                "address": "3-7-1-2 Nishi-Shinjuku, Tokyo",
                "checkInTime": "2026-01-10T14:00:00+09:00",
                "checkOutTime": "2026-01-13T11:00:00+09:00",
                "numberOfNights": "3",
                "isBreakfastIncluded": true
            }
        });

        let data: EventData = serde_json::from_value(json).unwrap();
        let EventData::Hotel(hotel) = &data else {
            panic!("expected hotel variant");
        };
        assert_eq!(hotel.hotel_name, "Park Hyatt");
        assert_eq!(hotel.is_breakfast_included, Some(true));
        assert!(hotel.check_in_time.unwrap() < hotel.check_out_time.unwrap());

        let back = serde_json::to_value(&data).unwrap();
        assert!(back.as_object().unwrap().contains_key("hotel"));
    }

    #[test]
    fn other_payload_covers_undedicated_types() {
        let data = EventData::Other(OtherData {
            title: "Dinner".to_string(),
            description: None,
            location: None,
            time: None,
            fare: None,
            booking_source: None,
        });
        assert!(data.compatible_with(EventType::Dining));
        assert!(data.compatible_with(EventType::Activity));
        assert!(!data.compatible_with(EventType::Flight));
    }
}
