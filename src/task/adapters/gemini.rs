//! Gemini-backed field extraction adapter.
//!
//! Calls the `generateContent` endpoint of the Generative Language API and
//! parses the model's JSON reply into [`ExtractedFields`]. Every failure
//! mode (transport error, non-success status, empty or unparsable reply)
//! degrades to the fallback fields; this adapter never surfaces an error to
//! the pipeline.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::task::{
    domain::{parse_utc, ExtractedFields, Priority},
    ports::FieldExtractor,
};

/// Field extractor backed by a Gemini model.
#[derive(Debug, Clone)]
pub struct GeminiExtractor {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiExtractor {
    /// Creates an extractor for the given API base, model name, and key.
    #[must_use]
    pub fn new(
        api_base: impl AsRef<str>,
        model: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Self {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            api_base.as_ref().trim_end_matches('/'),
            model.as_ref()
        );
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key: api_key.into(),
        }
    }

    async fn request_extraction(
        &self,
        raw_text: &str,
        reference_time: DateTime<Utc>,
    ) -> Result<ExtractedFields, ExtractionFailure> {
        let request = GenerateRequest::for_prompt(build_prompt(raw_text, reference_time));
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionFailure::Status(status.as_u16()));
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply
            .first_text()
            .ok_or(ExtractionFailure::EmptyReply)?
            .to_owned();
        parse_reply(&text).ok_or(ExtractionFailure::MalformedReply(text))
    }
}

#[async_trait]
impl FieldExtractor for GeminiExtractor {
    async fn infer(&self, raw_text: &str, reference_time: DateTime<Utc>) -> ExtractedFields {
        match self.request_extraction(raw_text, reference_time).await {
            Ok(fields) => fields,
            Err(reason) => {
                warn!(%reason, "field extraction degraded to fallback");
                ExtractedFields::fallback_for(raw_text)
            }
        }
    }
}

/// Reasons extraction fell back; absorbed inside the adapter.
#[derive(Debug, Error)]
enum ExtractionFailure {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("inference API returned status {0}")]
    Status(u16),
    #[error("inference API returned no text candidates")]
    EmptyReply,
    #[error("model reply was not the expected JSON object: {0}")]
    MalformedReply(String),
}

fn build_prompt(raw_text: &str, reference_time: DateTime<Utc>) -> String {
    let now = reference_time.to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        r#"Analyze the following raw task input and structure it for a task management system.

Raw Input: "{raw_text}"
Current Time: {now}

Instructions:
1. Extract the core action and rephrase it clearly and concisely as a task description.
2. Look for any mention of dates, times, or relative deadlines ("Monday", "by 5 pm", "end of week"). Resolve them against the current time and express the result as an ISO-8601 UTC timestamp, or null if none is mentioned.
3. Suggest 1-3 relevant tags from common categories like 'work', 'personal', 'meeting', 'call', 'email', 'errands', 'urgent', 'writing', 'research', 'planning', 'review'. Use an empty list if unsure.
4. Based only on keywords in the raw input (like 'urgent', 'asap', 'important', 'critical', 'deadline', 'low priority', 'later'), suggest a priority of 'High', 'Medium', or 'Low'. Default to 'Medium'.
5. Return ONLY a JSON object with these keys:
   - "description": the extracted core action (string)
   - "deadline": the resolved deadline (ISO-8601 string or null)
   - "tags": suggested tags (list of strings)
   - "priority": 'High', 'Medium', or 'Low' (string)

Example:
Raw Input: "Need to prepare the urgent presentation slides for the client meeting on Friday morning"
Output:
```json
{{
  "description": "Prepare presentation slides for Friday client meeting",
  "deadline": "2025-01-10T09:00:00Z",
  "tags": ["work", "meeting", "urgent"],
  "priority": "High"
}}
```

Now process the provided Raw Input. Return ONLY the JSON object."#
    )
}

/// Drops a surrounding markdown code fence, if present.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let opened = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let closed = opened.strip_suffix("```").unwrap_or(opened);
    closed.trim()
}

/// Parses the model reply into extracted fields.
///
/// Returns `None` when the reply is not a JSON object of the expected
/// shape. Unparsable deadline or priority values are dropped individually
/// rather than rejecting the whole reply.
fn parse_reply(text: &str) -> Option<ExtractedFields> {
    let body = strip_code_fences(text);
    if !body.starts_with('{') {
        return None;
    }
    let payload: ExtractionPayload = serde_json::from_str(body).ok()?;

    let deadline = payload.deadline.as_deref().and_then(|value| {
        let parsed = parse_utc(value);
        if parsed.is_none() {
            warn!(value, "ignoring unparsable extracted deadline");
        }
        parsed
    });
    let priority_hint = payload.priority.as_deref().and_then(|value| {
        let parsed = Priority::try_from(value).ok();
        if parsed.is_none() {
            warn!(value, "ignoring unrecognized extracted priority");
        }
        parsed
    });

    Some(ExtractedFields {
        description: payload
            .description
            .filter(|description| !description.trim().is_empty()),
        deadline,
        tags: payload.tags,
        priority_hint,
    })
}

/// Wire shape of the JSON object the prompt asks the model to return.
#[derive(Debug, Deserialize)]
struct ExtractionPayload {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    priority: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    fn for_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

/// Generation parameters pinned low for deterministic output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 512,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::{parse_reply, strip_code_fences};
    use crate::task::domain::Priority;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    #[rstest]
    #[case("```json\n{\"a\": 1}\n```", "{\"a\": 1}")]
    #[case("```\n{\"a\": 1}\n```", "{\"a\": 1}")]
    #[case("  {\"a\": 1}  ", "{\"a\": 1}")]
    fn strip_code_fences_unwraps_markdown(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_code_fences(input), expected);
    }

    #[rstest]
    fn parse_reply_accepts_full_payload() {
        let reply = r#"```json
{
  "description": "Buy milk",
  "deadline": "2025-01-10T09:00:00Z",
  "tags": ["errands"],
  "priority": "Low"
}
```"#;
        let fields = parse_reply(reply).expect("payload should parse");
        assert_eq!(fields.description.as_deref(), Some("Buy milk"));
        assert_eq!(
            fields.deadline,
            Some(Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).single().expect("valid timestamp"))
        );
        assert_eq!(fields.tags, vec!["errands".to_owned()]);
        assert_eq!(fields.priority_hint, Some(Priority::Low));
    }

    #[rstest]
    #[case("not json at all")]
    #[case("")]
    #[case("[1, 2, 3]")]
    fn parse_reply_rejects_non_objects(#[case] reply: &str) {
        assert!(parse_reply(reply).is_none());
    }

    #[rstest]
    fn parse_reply_drops_unparsable_fields_individually() {
        let reply = r#"{"description": "Plan trip", "deadline": "someday", "tags": [], "priority": "Urgent"}"#;
        let fields = parse_reply(reply).expect("payload should parse");
        assert_eq!(fields.description.as_deref(), Some("Plan trip"));
        assert!(fields.deadline.is_none());
        assert!(fields.priority_hint.is_none());
    }

    #[rstest]
    fn parse_reply_treats_blank_description_as_absent() {
        let reply = r#"{"description": "   ", "deadline": null, "tags": [], "priority": "Medium"}"#;
        let fields = parse_reply(reply).expect("payload should parse");
        assert!(fields.description.is_none());
        assert_eq!(fields.priority_hint, Some(Priority::Medium));
    }
}
