//! Pipeline orchestration tests over in-memory adapters and port mocks.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

use crate::task::{
    adapters::memory::{InMemoryTaskStore, StaticTokenAuthenticator},
    domain::{
        CompletionUpdate, ExtractedFields, HighPriorityKeywords, NewTask, Priority, RawTaskInput,
        Task, TaskId, UserId,
    },
    ports::{FieldExtractor, TaskStore, TaskStoreError, TaskStoreResult},
    services::{PipelineError, TaskPipeline},
};

const ALICE_TOKEN: &str = "token-alice";
const BOB_TOKEN: &str = "token-bob";

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn user(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

/// Extractor stub returning a fixed result for every input.
#[derive(Clone)]
struct StubExtractor(ExtractedFields);

#[async_trait]
impl FieldExtractor for StubExtractor {
    async fn infer(&self, _raw_text: &str, _reference_time: DateTime<Utc>) -> ExtractedFields {
        self.0.clone()
    }
}

/// Extractor stub simulating total extraction failure: always degrades to
/// the fallback fields, as real adapters must.
struct DegradedExtractor;

#[async_trait]
impl FieldExtractor for DegradedExtractor {
    async fn infer(&self, raw_text: &str, _reference_time: DateTime<Utc>) -> ExtractedFields {
        ExtractedFields::fallback_for(raw_text)
    }
}

fn authenticator() -> Arc<StaticTokenAuthenticator> {
    Arc::new(StaticTokenAuthenticator::new([
        (ALICE_TOKEN.to_owned(), user("alice")),
        (BOB_TOKEN.to_owned(), user("bob")),
    ]))
}

fn pipeline_with(extractor: Arc<dyn FieldExtractor>, store: Arc<dyn TaskStore>) -> TaskPipeline {
    TaskPipeline::new(
        authenticator(),
        extractor,
        store,
        Arc::new(DefaultClock),
        HighPriorityKeywords::new(["urgent".to_owned(), "asap".to_owned()]),
    )
}

#[fixture]
fn pipeline() -> TaskPipeline {
    pipeline_with(
        Arc::new(StubExtractor(ExtractedFields {
            description: Some("Buy milk".to_owned()),
            deadline: Some(utc(2025, 1, 10, 9)),
            tags: vec!["errands".to_owned()],
            priority_hint: Some(Priority::Low),
        })),
        Arc::new(InMemoryTaskStore::new()),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_persists_and_is_listed(pipeline: TaskPipeline) {
    let raw = RawTaskInput::new("urgent: buy milk", None).expect("valid input");
    let created = pipeline
        .create_task(ALICE_TOKEN, &raw)
        .await
        .expect("creation should succeed");

    assert_eq!(created.priority(), Priority::High);
    assert_eq!(created.description(), "Buy milk");
    assert_eq!(created.deadline(), utc(2025, 1, 10, 9));
    assert_eq!(created.owner_id(), &user("alice"));

    let listed = pipeline
        .list_tasks(ALICE_TOKEN)
        .await
        .expect("listing should succeed");
    assert_eq!(listed, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_unknown_token(pipeline: TaskPipeline) {
    let raw = RawTaskInput::new("buy milk", None).expect("valid input");
    let result = pipeline.create_task("wrong-token", &raw).await;
    assert!(matches!(result, Err(PipelineError::Unauthenticated)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_does_not_leak_other_users(pipeline: TaskPipeline) {
    let raw = RawTaskInput::new("buy milk", None).expect("valid input");
    pipeline
        .create_task(ALICE_TOKEN, &raw)
        .await
        .expect("creation should succeed");

    let bobs = pipeline
        .list_tasks(BOB_TOKEN)
        .await
        .expect("listing should succeed");
    assert!(bobs.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn degraded_extraction_still_creates_with_explicit_deadline() {
    let pipeline = pipeline_with(
        Arc::new(DegradedExtractor),
        Arc::new(InMemoryTaskStore::new()),
    );
    let deadline = utc(2025, 3, 1, 0);
    let raw = RawTaskInput::new("plan trip", Some(deadline)).expect("valid input");

    let created = pipeline
        .create_task(ALICE_TOKEN, &raw)
        .await
        .expect("creation should succeed despite extraction failure");
    assert_eq!(created.deadline(), deadline);
    assert_eq!(created.description(), "plan trip");
    assert_eq!(created.priority(), Priority::Medium);
    assert!(created.tags().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn degraded_extraction_without_explicit_deadline_is_validation_error() {
    let pipeline = pipeline_with(
        Arc::new(DegradedExtractor),
        Arc::new(InMemoryTaskStore::new()),
    );
    let raw = RawTaskInput::new("plan trip", None).expect("valid input");

    let result = pipeline.create_task(ALICE_TOKEN, &raw).await;
    assert!(matches!(result, Err(PipelineError::Validation(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_task_flips_the_flag_and_touches_updated_at(pipeline: TaskPipeline) {
    let raw = RawTaskInput::new("buy milk", None).expect("valid input");
    let created = pipeline
        .create_task(ALICE_TOKEN, &raw)
        .await
        .expect("creation should succeed");

    let updated = pipeline
        .complete_task(
            ALICE_TOKEN,
            created.id().clone(),
            CompletionUpdate { completed: true },
        )
        .await
        .expect("completion should succeed");

    assert!(updated.completed());
    assert!(updated.updated_at() >= created.updated_at());
    assert_eq!(updated.created_at(), created.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_task_by_non_owner_is_forbidden_without_mutation(pipeline: TaskPipeline) {
    let raw = RawTaskInput::new("buy milk", None).expect("valid input");
    let created = pipeline
        .create_task(ALICE_TOKEN, &raw)
        .await
        .expect("creation should succeed");

    let result = pipeline
        .complete_task(
            BOB_TOKEN,
            created.id().clone(),
            CompletionUpdate { completed: true },
        )
        .await;
    assert!(matches!(result, Err(PipelineError::Forbidden(_))));

    let listed = pipeline
        .list_tasks(ALICE_TOKEN)
        .await
        .expect("listing should succeed");
    assert_eq!(listed, vec![created], "task must be untouched");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_task_on_unknown_id_is_not_found_for_any_caller(pipeline: TaskPipeline) {
    let missing = TaskId::generate();
    for token in [ALICE_TOKEN, BOB_TOKEN] {
        let result = pipeline
            .complete_task(token, missing.clone(), CompletionUpdate { completed: true })
            .await;
        assert!(matches!(result, Err(PipelineError::NotFound(_))));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listed_tasks_come_back_ranked(pipeline: TaskPipeline) {
    // The stub extractor suggests Low with a fixed deadline; keyword-bearing
    // inputs are forced High and must sort first.
    let plain = RawTaskInput::new("buy milk", None).expect("valid input");
    let pressing = RawTaskInput::new("asap: send invite", None).expect("valid input");
    pipeline
        .create_task(ALICE_TOKEN, &plain)
        .await
        .expect("creation should succeed");
    pipeline
        .create_task(ALICE_TOKEN, &pressing)
        .await
        .expect("creation should succeed");

    let listed = pipeline
        .list_tasks(ALICE_TOKEN)
        .await
        .expect("listing should succeed");
    let priorities: Vec<Priority> = listed.iter().map(Task::priority).collect();
    assert_eq!(priorities, vec![Priority::High, Priority::Low]);
}

mockall::mock! {
    Store {}

    #[async_trait]
    impl TaskStore for Store {
        async fn insert(&self, candidate: NewTask) -> TaskStoreResult<Task>;
        async fn get(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;
        async fn query_owner(&self, owner_id: &UserId) -> TaskStoreResult<Vec<Task>>;
        async fn update_completion(
            &self,
            id: &TaskId,
            update: CompletionUpdate,
            updated_at: DateTime<Utc>,
        ) -> TaskStoreResult<Task>;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_maps_store_outage_to_unavailable() {
    let mut store = MockStore::new();
    store
        .expect_insert()
        .returning(|_| Err(TaskStoreError::Unavailable("connection refused".to_owned())));

    let pipeline = pipeline_with(Arc::new(DegradedExtractor), Arc::new(store));
    let raw = RawTaskInput::new("buy milk", Some(utc(2025, 2, 1, 0))).expect("valid input");

    let result = pipeline.create_task(ALICE_TOKEN, &raw).await;
    assert!(matches!(result, Err(PipelineError::Unavailable(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_maps_store_outage_to_unavailable() {
    let mut store = MockStore::new();
    store
        .expect_query_owner()
        .returning(|_| Err(TaskStoreError::Unavailable("connection refused".to_owned())));

    let pipeline = pipeline_with(Arc::new(DegradedExtractor), Arc::new(store));
    let result = pipeline.list_tasks(ALICE_TOKEN).await;
    assert!(matches!(result, Err(PipelineError::Unavailable(_))));
}
