use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::TaskApiClient;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::render::TaskListView;
use crate::types::TaskInput;

fn sample_task() -> TaskInput {
    TaskInput {
        name: "Write report".to_string(),
        deadline: "2025-06-01".to_string(),
        urgency_score: 7,
        normalized_urgency: 0.7,
        dependencies: vec![1, 2],
    }
}

#[tokio::test]
async fn test_create_task_posts_exact_body_once() {
    let server = MockServer::start().await;
    let task = sample_task();

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({
            "name": "Write report",
            "deadline": "2025-06-01",
            "urgency_score": 7,
            "normalized_urgency": 0.7,
            "dependencies": [1, 2]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Task created",
            "id": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    let response = client.create_task(&task).await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.id, Some(42));
}

#[tokio::test]
async fn test_create_task_without_message_is_silent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    let response = client.create_task(&sample_task()).await.unwrap();

    assert!(!response.is_success());
}

#[tokio::test]
async fn test_prioritize_sends_empty_completed_ids_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/prioritize"))
        .and(body_json(json!({ "completed_ids": [] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    let call = client.prioritize(&[]).await.unwrap();

    assert!(call.tasks.is_empty());
}

#[tokio::test]
async fn test_prioritize_preserves_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/prioritize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "c", "score": 9.1, "status": "Ready" },
            { "name": "a", "score": 3.0, "status": "Blocked" },
            { "name": "b", "score": 7.5, "status": "Ready" }
        ])))
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    let call = client.prioritize(&[1, 2]).await.unwrap();

    let names: Vec<&str> = call.tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_prioritize_epochs_increase_per_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/prioritize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    let first = client.prioritize(&[]).await.unwrap();
    let second = client.prioritize(&[]).await.unwrap();

    assert!(second.epoch > first.epoch);
}

#[tokio::test]
async fn test_prioritize_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/prioritize"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "ML model not loaded"
        })))
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    let result = client.prioritize(&[]).await;

    match result {
        Err(Error::Status { code, body }) => {
            assert_eq!(code, 500);
            assert!(body.contains("ML model not loaded"));
        }
        other => panic!("Expected status error, got {:?}", other.map(|c| c.tasks)),
    }
}

#[tokio::test]
async fn test_overlapping_calls_resolve_last_issued_wins() {
    let server = MockServer::start().await;

    // the earlier call's response is held back so it arrives second
    Mock::given(method("POST"))
        .and(path("/tasks/prioritize"))
        .and(body_json(json!({ "completed_ids": [1] })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(200))
                .set_body_json(json!([{ "name": "stale", "score": 1.0, "status": "Blocked" }])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tasks/prioritize"))
        .and(body_json(json!({ "completed_ids": [2] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "fresh", "score": 9.0, "status": "Ready" }
        ])))
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    let (first, second) = tokio::join!(client.prioritize(&[1]), client.prioritize(&[2]));
    let (first, second) = (first.unwrap(), second.unwrap());

    let mut view = TaskListView::new();
    // fast response lands first, slow one afterwards
    assert!(view.apply(&second));
    assert!(!view.apply(&first));

    assert_eq!(view.cards().len(), 1);
    assert!(view.cards()[0].contains("fresh"));
}

#[tokio::test]
async fn test_get_tasks_parses_stored_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "Write report",
                "deadline": "2025-06-01",
                "urgency_score": 7,
                "normalized_urgency": 0.7,
                "status": "Pending",
                "dependencies": []
            }
        ])))
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    let tasks = client.get_tasks().await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, 1);
    assert_eq!(tasks[0].status, "Pending");
}

#[tokio::test]
async fn test_update_and_delete_round() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/tasks/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Task updated" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Task deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TaskApiClient::new(ClientConfig::new(server.uri()));
    assert!(client.update_task(5, &sample_task()).await.unwrap().is_success());
    assert!(client.delete_task(5).await.unwrap().is_success());
}
