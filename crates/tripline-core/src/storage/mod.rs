//! Persistence: TOML application config and the JSON trip document.

mod config;
mod trips;

pub use config::{Config, GeocoderConfig, ParserConfig};
pub use trips::TripStore;

use std::path::PathBuf;

/// Returns `~/.config/tripline[-dev]/` based on TRIPLINE_ENV.
///
/// Set TRIPLINE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TRIPLINE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tripline-dev")
    } else {
        base_dir.join("tripline")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
