//! Domain model: travel events, mode-specific payloads, trips.

pub mod data;
pub mod event;
pub mod trip;

pub use data::{
    BaggageItem, BaggageType, BookingSource, CarData, EventData, Fare, FlightData, HotelData,
    OtherData, TrainData,
};
pub use event::{EventType, GeoPoint, TravelEvent};
pub use trip::Trip;
