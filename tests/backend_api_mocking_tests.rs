//! Backend API mocking tests
//!
//! These tests use wiremock to create deterministic HTTP mocking for the
//! exception-tracking backend, eliminating network dependencies and making
//! tests fast and reliable.

use recon_desk::backend::{BackendClient, BackendError, TaskQuery};
use recon_desk::reports::ReportKind;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Backend mock server for deterministic testing
pub struct BackendApiMock {
    pub server: MockServer,
}

impl BackendApiMock {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn client(&self) -> BackendClient {
        BackendClient::with_base_url(self.server.uri(), None)
    }

    /// Mock one report's task listing
    pub async fn mock_report_tasks(&self, kind: ReportKind, tasks: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/report/{}/tasks", kind.id())))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tasks": tasks })))
            .mount(&self.server)
            .await;
    }
}

#[tokio::test]
async fn fetches_and_deserializes_report_tasks() {
    let mock = BackendApiMock::new().await;
    mock.mock_report_tasks(
        ReportKind::MultiTrade,
        json!([
            {
                "id": "t-1",
                "imported_at": "2024-01-01T00:00:00Z",
                "assignee_id": "u-7",
                "assigned_at": "2024-01-03T00:00:00Z",
                "resolved": false,
                "data_row": {"Number": "TX-100", "ErrorType": "sum"},
                "notes": []
            },
            {
                "id": "t-2",
                "imported_at": "2024-01-02T00:00:00Z",
                "resolved": true,
                "resolved_at": "2024-01-05T00:00:00Z",
                "notes": "Auto-resolved due to reimport"
            }
        ]),
    )
    .await;

    let tasks = mock
        .client()
        .tasks()
        .fetch_report_tasks(ReportKind::MultiTrade)
        .await
        .unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].assignee_id.as_deref(), Some("u-7"));
    assert_eq!(tasks[1].notes.len(), 1);
    assert!(tasks[1].resolved);
}

#[tokio::test]
async fn status_filters_become_repeated_query_params() {
    let mock = BackendApiMock::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/report/{}/tasks", ReportKind::MissingTrx.id())))
        .and(query_param("status", "open"))
        .and(query_param("assignee_id", "u-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tasks": [] })))
        .mount(&mock.server)
        .await;

    let query = TaskQuery {
        statuses: vec!["open".to_string()],
        assignee_id: Some("u-3".to_string()),
    };
    let tasks = mock
        .client()
        .tasks()
        .fetch_report_tasks_filtered(ReportKind::MissingTrx, &query)
        .await
        .unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn assign_posts_the_user_id() {
    let mock = BackendApiMock::new().await;
    Mock::given(method("POST"))
        .and(path("/task/t-9/assign"))
        .and(body_json(json!({ "assignee_id": "u-2" })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock.server)
        .await;

    mock.client()
        .tasks()
        .assign("t-9", Some("u-2"))
        .await
        .unwrap();
}

#[tokio::test]
async fn unassign_posts_an_explicit_null() {
    let mock = BackendApiMock::new().await;
    Mock::given(method("POST"))
        .and(path("/task/t-9/assign"))
        .and(body_json(json!({ "assignee_id": null })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock.server)
        .await;

    mock.client().tasks().assign("t-9", None).await.unwrap();
}

#[tokio::test]
async fn resolve_and_note_are_confirmed_round_trips() {
    let mock = BackendApiMock::new().await;
    Mock::given(method("POST"))
        .and(path("/task/t-4/resolve"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/task/t-4/note"))
        .and(body_json(json!({ "message": "checked with accounting" })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock.server)
        .await;

    let client = mock.client();
    client.tasks().resolve("t-4").await.unwrap();
    client
        .tasks()
        .append_note("t-4", "checked with accounting")
        .await
        .unwrap();
}

#[tokio::test]
async fn mutation_failures_surface_the_http_status() {
    let mock = BackendApiMock::new().await;
    Mock::given(method("POST"))
        .and(path("/task/t-4/resolve"))
        .respond_with(ResponseTemplate::new(409).set_body_string("already resolved"))
        .mount(&mock.server)
        .await;

    let err = mock.client().tasks().resolve("t-4").await.unwrap_err();
    match err {
        BackendError::ApiError { status, message } => {
            assert_eq!(status.as_u16(), 409);
            assert_eq!(message, "already resolved");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn import_trigger_returns_the_summary() {
    let mock = BackendApiMock::new().await;
    Mock::given(method("POST"))
        .and(path("/import"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"file": "deal_sums_mismatch_2024-06-03.xlsx", "imported_rows": 12, "auto_resolved": 3},
                {"file": "bw_ses_report_2024-06-03.xlsx", "imported_rows": 4, "auto_resolved": 0}
            ],
            "last_import": "2024-06-03T04:00:00Z"
        })))
        .mount(&mock.server)
        .await;

    let summary = mock.client().import().trigger().await.unwrap();
    assert_eq!(summary.results.len(), 2);
    assert_eq!(summary.results[0].imported_rows, 12);
    assert_eq!(summary.results[0].auto_resolved, 3);
    assert!(summary.last_import.is_some());
}

#[tokio::test]
async fn user_listing_and_approval() {
    let mock = BackendApiMock::new().await;
    Mock::given(method("GET"))
        .and(path("/users/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "u-1", "email": "a@example.com", "approved": true, "created_at": "2024-02-01T00:00:00Z"},
            {"id": "u-2", "email": "b@example.com", "approved": false}
        ])))
        .mount(&mock.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/approve"))
        .and(body_json(json!({ "email": "b@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock.server)
        .await;

    let client = mock.client();
    let users = client.users().fetch_all().await.unwrap();
    assert_eq!(users.len(), 2);
    assert!(!users[1].approved);

    client.users().approve("b@example.com").await.unwrap();
}
