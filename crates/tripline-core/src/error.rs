//! Core error types for tripline-core.
//!
//! This module defines the error hierarchy using thiserror. Decode errors
//! are per-record: a batch of externally-sourced events isolates failures
//! to the offending item instead of aborting the whole import.

use thiserror::Error;

/// Errors raised while decoding a single wire-format event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A timestamp string matched none of the supported formats.
    #[error("Invalid timestamp: {0:?} matched no supported format")]
    InvalidTimestamp(String),

    /// The event's `data` object carried none of the known variant keys.
    #[error("Unknown event variant: expected one of flight|train|car|hotel|other, found keys {found:?}")]
    UnknownVariant { found: Vec<String> },

    /// The event's declared `type` disagrees with its `data` variant.
    #[error("Event type {event_type} does not match data variant {variant}")]
    TypeMismatch {
        event_type: String,
        variant: String,
    },

    /// Structural decode failure (missing field, wrong shape).
    #[error("Malformed event: {0}")]
    Malformed(String),
}

/// Trip store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Update/delete referenced a trip id that does not exist.
    #[error("Trip not found: {0}")]
    TripNotFound(String),

    /// Failed to read or write the trips document.
    #[error("Failed to access trip store at {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The trips document is not valid JSON.
    #[error("Corrupt trips document: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Itinerary parsing service errors.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Network-level failure talking to the service.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Parsing service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service response carried no usable text.
    #[error("Empty response from parsing service")]
    EmptyResponse,

    /// The response text contained no JSON array.
    #[error("No JSON array found in parsing service response")]
    NoJsonArray,

    /// The extracted array was not valid JSON.
    #[error("Parsing service returned invalid JSON: {0}")]
    InvalidJson(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be resolved or created.
    #[error("Failed to resolve config directory: {0}")]
    DataDir(String),

    /// Failed to read or parse the configuration file.
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed {
        path: std::path::PathBuf,
        message: String,
    },

    /// Failed to serialize or write the configuration file.
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed {
        path: std::path::PathBuf,
        message: String,
    },
}
