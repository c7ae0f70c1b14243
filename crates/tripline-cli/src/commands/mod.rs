pub mod config;
pub mod geocode;
pub mod parse;
pub mod routes;
pub mod schedule;
pub mod trip;
