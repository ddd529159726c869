//! Priority levels and the keyword override rule.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};

/// Task priority level.
///
/// Serialized with capitalized labels (`"High"`, `"Medium"`, `"Low"`) to
/// match the wire format consumed by clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Must be dealt with first.
    High,
    /// Ordinary priority; the default when no hint is available.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Returns the sort weight used by the ranking engine. Lower sorts
    /// first: High=1, Medium=2, Low=3.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Configured trigger words that force [`Priority::High`].
///
/// Matching is a case-insensitive substring check against the raw task
/// text. The override is unconditional: it replaces whatever the extractor
/// suggested, including an explicit Low.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighPriorityKeywords(Vec<String>);

impl HighPriorityKeywords {
    /// Creates a keyword set, lower-casing entries and dropping blanks.
    #[must_use]
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        let normalized = keywords
            .into_iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self(normalized)
    }

    /// Returns `true` when the text contains any configured keyword.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.0.iter().any(|keyword| lowered.contains(keyword))
    }

    /// Returns `true` when no keywords are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
