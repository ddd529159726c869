//! Normalization engine tests: deadline precedence, priority override,
//! description fallback.

use crate::task::domain::{
    normalize, ExtractedFields, HighPriorityKeywords, Priority, RawTaskInput, Task,
    TaskDomainError, TaskId, UserId,
};
use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn keywords() -> HighPriorityKeywords {
    HighPriorityKeywords::new(["urgent".to_owned(), "asap".to_owned()])
}

#[fixture]
fn owner() -> UserId {
    UserId::new("user-1").expect("valid user id")
}

#[rstest]
fn normalize_fails_without_any_deadline(keywords: HighPriorityKeywords, owner: UserId) {
    let raw = RawTaskInput::new("water the plants", None).expect("valid input");
    let result = normalize(owner, &raw, ExtractedFields::default(), &keywords, utc(2025, 1, 1, 0));
    assert_eq!(result, Err(TaskDomainError::MissingDeadline));
}

#[rstest]
fn explicit_deadline_wins_over_extracted(keywords: HighPriorityKeywords, owner: UserId) {
    let user_deadline = utc(2025, 3, 1, 0);
    let raw = RawTaskInput::new("plan trip", Some(user_deadline)).expect("valid input");
    let extracted = ExtractedFields {
        deadline: Some(utc(2025, 6, 1, 0)),
        ..ExtractedFields::default()
    };

    let candidate =
        normalize(owner, &raw, extracted, &keywords, utc(2025, 1, 1, 0)).expect("normalizable");
    assert_eq!(candidate.deadline, user_deadline);
}

#[rstest]
fn extracted_deadline_used_when_user_supplied_none(keywords: HighPriorityKeywords, owner: UserId) {
    let raw = RawTaskInput::new("plan trip", None).expect("valid input");
    let extracted = ExtractedFields {
        deadline: Some(utc(2025, 3, 1, 0)),
        ..ExtractedFields::default()
    };

    let candidate =
        normalize(owner, &raw, extracted, &keywords, utc(2025, 1, 1, 0)).expect("normalizable");
    assert_eq!(candidate.deadline, utc(2025, 3, 1, 0));
}

#[rstest]
#[case(Some(Priority::Low))]
#[case(Some(Priority::Medium))]
#[case(Some(Priority::High))]
#[case(None)]
fn keyword_match_forces_high_regardless_of_hint(
    keywords: HighPriorityKeywords,
    owner: UserId,
    #[case] hint: Option<Priority>,
) {
    let raw = RawTaskInput::new("URGENT: file the report", Some(utc(2025, 2, 1, 0)))
        .expect("valid input");
    let extracted = ExtractedFields {
        priority_hint: hint,
        ..ExtractedFields::default()
    };

    let candidate =
        normalize(owner, &raw, extracted, &keywords, utc(2025, 1, 1, 0)).expect("normalizable");
    assert_eq!(candidate.priority, Priority::High);
}

#[rstest]
fn priority_defaults_to_medium_without_hint_or_keyword(
    keywords: HighPriorityKeywords,
    owner: UserId,
) {
    let raw = RawTaskInput::new("water the plants", Some(utc(2025, 2, 1, 0)))
        .expect("valid input");

    let candidate = normalize(
        owner,
        &raw,
        ExtractedFields::default(),
        &keywords,
        utc(2025, 1, 1, 0),
    )
    .expect("normalizable");
    assert_eq!(candidate.priority, Priority::Medium);
}

#[rstest]
fn description_falls_back_to_raw_text(keywords: HighPriorityKeywords, owner: UserId) {
    let raw = RawTaskInput::new("call the dentist", Some(utc(2025, 2, 1, 0)))
        .expect("valid input");
    let extracted = ExtractedFields {
        description: Some("   ".to_owned()),
        ..ExtractedFields::default()
    };

    let candidate =
        normalize(owner, &raw, extracted, &keywords, utc(2025, 1, 1, 0)).expect("normalizable");
    assert_eq!(candidate.description, "call the dentist");
}

#[rstest]
fn tags_pass_through_verbatim_including_duplicates(
    keywords: HighPriorityKeywords,
    owner: UserId,
) {
    let raw = RawTaskInput::new("email the team", Some(utc(2025, 2, 1, 0)))
        .expect("valid input");
    let extracted = ExtractedFields {
        tags: vec!["work".to_owned(), "email".to_owned(), "work".to_owned()],
        ..ExtractedFields::default()
    };

    let candidate =
        normalize(owner, &raw, extracted, &keywords, utc(2025, 1, 1, 0)).expect("normalizable");
    assert_eq!(
        candidate.tags,
        vec!["work".to_owned(), "email".to_owned(), "work".to_owned()]
    );
}

#[rstest]
fn urgent_buy_milk_scenario(owner: UserId) {
    let keyword_list = HighPriorityKeywords::new(["urgent".to_owned()]);
    let raw = RawTaskInput::new("urgent: buy milk", None).expect("valid input");
    let extracted = ExtractedFields {
        description: Some("Buy milk".to_owned()),
        deadline: Some(utc(2025, 1, 10, 9)),
        tags: vec!["errands".to_owned()],
        priority_hint: Some(Priority::Low),
    };

    let candidate = normalize(owner, &raw, extracted, &keyword_list, utc(2025, 1, 1, 0))
        .expect("normalizable");
    assert_eq!(candidate.priority, Priority::High);
    assert_eq!(candidate.deadline, utc(2025, 1, 10, 9));
    assert_eq!(candidate.description, "Buy milk");
    assert_eq!(candidate.original_text, "urgent: buy milk");
}

#[rstest]
fn assembled_task_starts_incomplete_with_matching_timestamps(
    keywords: HighPriorityKeywords,
    owner: UserId,
) {
    let now = utc(2025, 1, 1, 12);
    let raw = RawTaskInput::new("water the plants", Some(utc(2025, 2, 1, 0)))
        .expect("valid input");
    let candidate = normalize(owner, &raw, ExtractedFields::default(), &keywords, now)
        .expect("normalizable");

    let task = Task::assemble(TaskId::generate(), candidate);
    assert!(!task.completed());
    assert_eq!(task.created_at(), now);
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn raw_input_rejects_empty_text() {
    let result = RawTaskInput::new("   ", None);
    assert_eq!(result.err(), Some(TaskDomainError::EmptyText));
}
