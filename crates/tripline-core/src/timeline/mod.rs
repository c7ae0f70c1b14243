//! Timeline engine: turns an unordered set of events into ordered
//! per-day schedules enriched with synthetic items (layover connections,
//! breakfast/checkout/staying hints).

pub mod builder;
pub mod item;

pub use builder::build_schedule;
pub use item::{DaySchedule, TimelineItem};
