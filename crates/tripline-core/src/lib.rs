//! # Tripline Core Library
//!
//! This library provides the core logic for Tripline, an itinerary
//! organizer: it turns a traveler's discrete bookings (flights, trains,
//! cars, hotels, miscellaneous events) into day-by-day schedules and
//! renders travel legs as non-overlapping curved map paths. All
//! operations are available via a standalone CLI binary; any GUI is a
//! thin layer over the same core.
//!
//! ## Architecture
//!
//! - **Timeline Engine**: pure transformation from an unordered event set
//!   to ordered per-day schedules with synthetic layover/hotel items
//! - **Route Generator**: deduplicates repeated travel legs and fans them
//!   out as offset Bézier curves
//! - **Parsing**: tolerant decoding of AI-sourced event batches, with
//!   per-item failure isolation
//! - **Storage**: single-JSON-document trip store and TOML configuration
//!
//! ## Key Components
//!
//! - [`build_schedule`]: events in, day schedules out
//! - [`build_routes`]: events in, map polylines out
//! - [`TripStore`]: trip persistence
//! - [`ItineraryParser`] / [`Geocoder`]: external collaborator traits

pub mod datetime;
pub mod error;
pub mod geocode;
pub mod model;
pub mod parse;
pub mod route;
pub mod storage;
pub mod timeline;

pub use error::{ConfigError, DecodeError, ParseError, StoreError};
pub use geocode::{geocode_events, Geocoder, NominatimGeocoder};
pub use model::{EventData, EventType, GeoPoint, TravelEvent, Trip};
pub use parse::{GeminiParser, ImportReport, ItineraryParser};
pub use route::{build_routes, RouteColor, RoutedPolyline};
pub use storage::{Config, TripStore};
pub use timeline::{build_schedule, DaySchedule, TimelineItem};
