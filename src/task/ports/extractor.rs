//! Field extraction port: structured fields from free text.

use crate::task::domain::ExtractedFields;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Structured-field extraction contract.
///
/// Infallible at the trait boundary: implementations absorb every failure
/// (transport errors, unparsable model output, malformed JSON), log the
/// anomaly, and degrade to
/// [`ExtractedFields::fallback_for`](crate::task::domain::ExtractedFields::fallback_for).
/// Extraction trouble must never abort task creation on its own.
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    /// Derives candidate structured fields from raw task text.
    ///
    /// `reference_time` anchors relative deadline expressions such as
    /// "tomorrow" or "end of week".
    async fn infer(&self, raw_text: &str, reference_time: DateTime<Utc>) -> ExtractedFields;
}
