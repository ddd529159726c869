//! Normalization engine: merges user input with extracted fields.

use super::{
    ExtractedFields, HighPriorityKeywords, NewTask, Priority, RawTaskInput, TaskDomainError, UserId,
};
use chrono::{DateTime, Utc};

/// Merges raw input and extracted fields into a persistable candidate.
///
/// Resolution policy, in order:
///
/// - **Deadline**: the explicit user deadline wins; otherwise the extracted
///   deadline; otherwise the operation fails. A deadline is never defaulted.
/// - **Description**: the extracted description when non-empty, else the raw
///   text verbatim.
/// - **Priority**: the extractor hint (Medium when absent), then the keyword
///   override forces High whenever the raw text contains a configured
///   keyword. The override is unconditional and replaces an extractor Low.
/// - **Tags**: taken verbatim, duplicates included.
///
/// Pure: persistence is the caller's concern.
///
/// # Errors
///
/// Returns [`TaskDomainError::MissingDeadline`] when neither source supplied
/// a deadline.
pub fn normalize(
    owner_id: UserId,
    raw: &RawTaskInput,
    extracted: ExtractedFields,
    keywords: &HighPriorityKeywords,
    now: DateTime<Utc>,
) -> Result<NewTask, TaskDomainError> {
    let deadline = raw
        .explicit_deadline()
        .or(extracted.deadline)
        .ok_or(TaskDomainError::MissingDeadline)?;

    let description = extracted
        .description
        .filter(|description| !description.trim().is_empty())
        .unwrap_or_else(|| raw.text().to_owned());

    let base_priority = extracted.priority_hint.unwrap_or_default();
    let priority = if keywords.matches(raw.text()) {
        Priority::High
    } else {
        base_priority
    };

    Ok(NewTask {
        owner_id,
        original_text: raw.text().to_owned(),
        description,
        priority,
        tags: extracted.tags,
        deadline,
        created_at: now,
        updated_at: now,
    })
}
