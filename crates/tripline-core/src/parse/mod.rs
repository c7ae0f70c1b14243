//! Itinerary parsing: decoding AI-sourced event batches.
//!
//! Batches from the parsing service are inherently noisy, so decoding is
//! best-effort per item: a malformed timestamp or unknown variant drops
//! that one event and records why, instead of aborting the whole import.

pub mod gemini;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{DecodeError, ParseError};
use crate::model::TravelEvent;

pub use gemini::GeminiParser;

/// Result of decoding one batch of raw event candidates.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Successfully decoded events.
    pub events: Vec<TravelEvent>,
    /// Per-item failures, by index into the raw batch.
    pub failures: Vec<(usize, DecodeError)>,
    /// Total items in the raw batch.
    pub total: usize,
}

impl ImportReport {
    /// User-facing summary line, e.g. "could not parse 2 of 7 items".
    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            format!("parsed {} items", self.events.len())
        } else {
            format!("could not parse {} of {} items", self.failures.len(), self.total)
        }
    }
}

/// External AI parsing service: free text, an image, or a PDF in; a batch
/// of decoded events out. One outstanding call at a time; the caller
/// appends results to the trip as a single atomic update.
#[async_trait]
pub trait ItineraryParser: Send + Sync {
    async fn parse_text(&self, text: &str) -> Result<ImportReport, ParseError>;
    async fn parse_image(&self, bytes: &[u8], mime_type: &str) -> Result<ImportReport, ParseError>;
    async fn parse_pdf(&self, bytes: &[u8]) -> Result<ImportReport, ParseError>;
}

const VARIANT_KEYS: [&str; 5] = ["flight", "train", "car", "hotel", "other"];

/// Decode a single wire-format event.
///
/// The `data` object must carry exactly one of the five variant keys;
/// every timestamp inside is run through the tolerant normalizer. The
/// decoded event's `type` must agree with its `data` variant.
pub fn decode_event(value: &Value) -> Result<TravelEvent, DecodeError> {
    let data = value
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| DecodeError::Malformed("missing or non-object `data` field".to_string()))?;

    if !VARIANT_KEYS.iter().any(|k| data.contains_key(*k)) {
        return Err(DecodeError::UnknownVariant {
            found: data.keys().cloned().collect(),
        });
    }

    let event: TravelEvent =
        serde_json::from_value(value.clone()).map_err(classify_serde_error)?;

    if !event.data.compatible_with(event.event_type) {
        return Err(DecodeError::TypeMismatch {
            event_type: event.event_type.as_str().to_string(),
            variant: event.data.variant_key().to_string(),
        });
    }

    Ok(event)
}

/// Decode a batch, isolating failures to the offending items.
pub fn decode_events(values: &[Value]) -> ImportReport {
    let mut report = ImportReport {
        total: values.len(),
        ..Default::default()
    };
    for (index, value) in values.iter().enumerate() {
        match decode_event(value) {
            Ok(event) => report.events.push(event),
            Err(err) => {
                log::warn!("dropping event {index} from batch: {err}");
                report.failures.push((index, err));
            }
        }
    }
    report
}

/// Recover the taxonomy error from a serde message where possible.
fn classify_serde_error(err: serde_json::Error) -> DecodeError {
    let msg = err.to_string();
    if let Some(start) = msg.find("Invalid timestamp: \"") {
        let rest = &msg[start + "Invalid timestamp: \"".len()..];
        if let Some(end) = rest.find("\" matched no supported format") {
            return DecodeError::InvalidTimestamp(rest[..end].to_string());
        }
    }
    DecodeError::Malformed(msg)
}

/// Pull the JSON array out of a model response.
///
/// Strips Markdown code fences and slices from the first `[` to the last
/// `]`, since models routinely wrap their output in prose.
pub fn extract_json_array(text: &str) -> Result<&str, ParseError> {
    let cleaned = text.trim();
    let start = cleaned.find('[').ok_or(ParseError::NoJsonArray)?;
    let end = cleaned.rfind(']').ok_or(ParseError::NoJsonArray)?;
    if start >= end {
        return Err(ParseError::NoJsonArray);
    }
    Ok(&cleaned[start..=end])
}

/// Full post-processing of a model response: extract, parse, batch-decode.
pub fn decode_response_text(text: &str) -> Result<ImportReport, ParseError> {
    let array = extract_json_array(text)?;
    let values: Vec<Value> =
        serde_json::from_str(array).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    Ok(decode_events(&values))
}
