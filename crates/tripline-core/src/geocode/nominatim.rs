//! Nominatim-style search client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::geocode::Geocoder;
use crate::model::GeoPoint;
use crate::storage::GeocoderConfig;

/// Geocoder backed by a Nominatim-compatible search endpoint.
///
/// Nominatim's usage policy requires an identifying User-Agent and at
/// most one request at a time; [`geocode_events`](crate::geocode::geocode_events)
/// already serializes calls.
pub struct NominatimGeocoder {
    endpoint: String,
    user_agent: String,
    client: Client,
}

#[derive(Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &GeocoderConfig) -> Self {
        Self::new(&config.endpoint, &config.user_agent)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn lookup(
        &self,
        query: &str,
    ) -> Result<Option<GeoPoint>, Box<dyn std::error::Error + Send + Sync>> {
        if query.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/search", self.endpoint.trim_end_matches('/'));
        let hits: Vec<SearchHit> = self
            .client
            .get(url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(hit) = hits.first() else {
            return Ok(None);
        };
        let lat: f64 = hit.lat.parse()?;
        let lng: f64 = hit.lon.parse()?;
        Ok(Some(GeoPoint::new(lat, lng)))
    }
}
