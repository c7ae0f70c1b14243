//! Gemini-backed itinerary parser.
//!
//! Posts free text, an image, or a PDF to a generateContent endpoint and
//! decodes the returned JSON array of event candidates. The endpoint is
//! configurable so tests can point it at a local mock server.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::ParseError;
use crate::parse::{decode_response_text, ImportReport, ItineraryParser};
use crate::storage::ParserConfig;

/// HTTP client for the generative parsing service.
pub struct GeminiParser {
    endpoint: String,
    model: String,
    api_key: String,
    client: Client,
}

impl GeminiParser {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Build a parser from config, reading the API key from the
    /// configured environment variable. A missing variable leaves the key
    /// empty; the service will reject the call and the error surfaces as
    /// [`ParseError::Api`].
    pub fn from_config(config: &ParserConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).unwrap_or_default();
        Self::new(&config.endpoint, &config.model, api_key)
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    async fn generate(&self, parts: Vec<Value>) -> Result<ImportReport, ParseError> {
        let body = json!({ "contents": [{ "parts": parts }] });

        let response = self.client.post(self.url()).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ParseError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = response.json().await?;
        let text = response_text(&payload).ok_or(ParseError::EmptyResponse)?;
        decode_response_text(&text)
    }
}

/// Concatenate the text parts of the first candidate.
fn response_text(payload: &Value) -> Option<String> {
    let parts = payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// The extraction prompt. Spells out the wire schema and the timezone
/// rule: offsets inferred from location, never defaulted to UTC.
fn prompt(content: &str) -> String {
    format!(
        r#"You are an itinerary parsing assistant. Extract travel event information from the provided content and return it as a JSON array of event objects. Return the JSON array only, no prose.

Each event object has these fields:
- "id": a new UUID string
- "type": one of "FLIGHT", "HOTEL", "TRAIN", "CAR", "TRANSPORT", "ACTIVITY", "DINING", "OTHER"
- "startTime": ISO-8601 timestamp string
- "endTime": ISO-8601 timestamp string, optional
- "data": an object with exactly one key naming the payload variant: "flight", "train", "car", "hotel" or "other"

Payload schemas (all timestamps are ISO-8601 strings; optional fields may be omitted):
- flight: airline, airlineCode?, flightNumber, confirmationCode, passenger?, travelClass?, departureCity?, arrivalCity?, departureAirport, departureTerminal?, departureGate?, seat?, departureTime, arrivalAirport, arrivalTerminal?, arrivalTime, etkt?, fare?, bookingSource?
- train: serviceProvider?, trainNumber?, passenger?, departureStation, departureTime, seat?, arrivalStation, arrivalTime, fare?, bookingSource?
- car: serviceProvider?, origin, destination?, pickupTime, driver?, passenger?, carPlate?, carColor?, carBrand?, fare?, bookingSource?
- hotel: hotelName, address, checkInTime?, checkOutTime?, bookingNumber?, confirmationNumber?, guestName?, roomType?, numberOfNights, fare?, isBreakfastIncluded?, extraIncluded?, bookingSource?
- other: title, description?, location?, time?, fare?, bookingSource?

fare is {{"currency": "...", "amount": 0.0}}. bookingSource is {{"name": "...", "domain"?: "..."}} and names the agency, not the operator.

CRITICAL - dates and timezones:
- Do NOT default to "Z" (UTC) unless the time is explicitly stated as UTC.
- Infer the timezone offset from the location (Tokyo is +09:00, New York is -05:00).
- Example for 2:30 PM in Tokyo: "2026-01-20T14:30:00+09:00" is correct, "2026-01-20T14:30:00Z" is wrong.

Content:
{content}"#
    )
}

#[async_trait]
impl ItineraryParser for GeminiParser {
    async fn parse_text(&self, text: &str) -> Result<ImportReport, ParseError> {
        self.generate(vec![json!({ "text": prompt(text) })]).await
    }

    async fn parse_image(&self, bytes: &[u8], mime_type: &str) -> Result<ImportReport, ParseError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        let parts = vec![
            json!({ "inline_data": { "mime_type": mime_type, "data": encoded } }),
            json!({ "text": format!("This is an image of a travel itinerary. {}", prompt("")) }),
        ];
        self.generate(parts).await
    }

    async fn parse_pdf(&self, bytes: &[u8]) -> Result<ImportReport, ParseError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        let parts = vec![
            json!({ "inline_data": { "mime_type": "application/pdf", "data": encoded } }),
            json!({ "text": format!("This is a PDF document of a travel itinerary. {}", prompt("")) }),
        ];
        self.generate(parts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_concatenates_parts() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [ { "text": "[{\"a\":" }, { "text": " 1}]" } ] }
            }]
        });
        assert_eq!(response_text(&payload).unwrap(), "[{\"a\": 1}]");
    }

    #[test]
    fn empty_candidates_give_none() {
        assert!(response_text(&json!({ "candidates": [] })).is_none());
    }

    #[tokio::test]
    async fn parse_text_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "```json\n[{\"id\": \"e1\", \"type\": \"CAR\", \"startTime\": \"2026-01-20T14:30:00+09:00\", \"data\": {\"car\": {\"origin\": \"Haneda\", \"pickupTime\": \"2026-01-20T14:30:00+09:00\"}}}]\n```" }] }
            }]
        });
        let mock = server
            .mock("POST", "/v1beta/models/test-model:generateContent?key=k")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let parser = GeminiParser::new(server.url(), "test-model", "k");
        let report = parser.parse_text("taxi from Haneda").await.unwrap();

        mock.assert_async().await;
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].id, "e1");
    }

    #[tokio::test]
    async fn api_error_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/test-model:generateContent?key=k")
            .with_status(429)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let parser = GeminiParser::new(server.url(), "test-model", "k");
        let err = parser.parse_text("anything").await.unwrap_err();
        assert!(matches!(err, ParseError::Api { status: 429, .. }));
    }
}
