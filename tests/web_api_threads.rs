//! Web API Thread Tests
//!
//! Integration tests for the thread and reply endpoints.

use anonboard::web::handlers::AppState;
use anonboard::web::router::{create_health_router, create_router};
use anonboard::Database;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a test server with an in-memory database.
async fn create_test_server() -> TestServer {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let app_state = Arc::new(AppState::new(Arc::new(db)));

    let router = create_router(app_state, &[]).merge(create_health_router());

    TestServer::new(router).expect("Failed to create test server")
}

/// Start a thread on the `test` board and return its JSON view.
async fn create_thread(server: &TestServer, text: &str, password: &str) -> Value {
    let response = server
        .post("/api/threads/test")
        .json(&json!({ "text": text, "delete_password": password }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// Reply to a thread on the `test` board and return the thread's JSON view.
async fn create_reply(server: &TestServer, thread_id: i64, text: &str, password: &str) -> Value {
    let response = server
        .post("/api/replies/test")
        .json(&json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password
        }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn test_health() {
    let server = create_test_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_create_thread() {
    let server = create_test_server().await;

    let thread = create_thread(&server, "test", "test").await;
    assert!(thread["id"].is_i64());
    assert_eq!(thread["board"], "test");
    assert_eq!(thread["text"], "test");
    assert_eq!(thread["reported"], false);
    assert_eq!(thread["replies"].as_array().unwrap().len(), 0);
    assert!(thread["created_on"].is_string());
    assert_eq!(thread["created_on"], thread["bumped_on"]);
    assert!(thread.get("delete_password").is_none());
}

#[tokio::test]
async fn test_create_thread_validation() {
    let server = create_test_server().await;

    let response = server
        .post("/api/threads/test")
        .json(&json!({ "text": "   ", "delete_password": "pw" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"]["fields"]["text"].is_array());

    let response = server
        .post("/api/threads/test")
        .json(&json!({ "text": "hello" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "MALFORMED_REQUEST");
}

#[tokio::test]
async fn test_malformed_report_and_query_get_json_errors() {
    let server = create_test_server().await;

    let response = server
        .put("/api/threads/test")
        .json(&json!({ "thread_id": "abc" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "MALFORMED_REQUEST");

    let response = server
        .put("/api/replies/test")
        .json(&json!({ "thread_id": 1 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "MALFORMED_REQUEST");

    let response = server
        .get("/api/replies/test")
        .add_query_param("thread_id", "abc")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "MALFORMED_REQUEST");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_list_recent_threads() {
    let server = create_test_server().await;

    for i in 0..12 {
        create_thread(&server, &format!("thread {i}"), "pw").await;
    }
    let thread = create_thread(&server, "busy", "pw").await;
    let thread_id = thread["id"].as_i64().unwrap();
    for i in 0..4 {
        create_reply(&server, thread_id, &format!("reply {i}"), "pw").await;
    }

    let response = server.get("/api/threads/test").await;
    response.assert_status_ok();
    let threads = response.json::<Value>();
    let threads = threads.as_array().unwrap();
    assert_eq!(threads.len(), 10);

    let first = &threads[0];
    assert_eq!(first["id"], thread_id);
    assert_eq!(first["reply_count"], 4);
    let replies = first["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["text"], "reply 1");
    assert_eq!(replies[2]["text"], "reply 3");

    for thread in threads {
        assert!(thread["text"].is_string());
        assert!(thread["created_on"].is_string());
        assert!(thread["bumped_on"].is_string());
        assert!(thread.get("delete_password").is_none());
        assert!(thread["replies"].as_array().unwrap().len() <= 3);
    }
}

#[tokio::test]
async fn test_delete_thread_with_incorrect_password() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;

    let response = server
        .delete("/api/threads/test")
        .json(&json!({ "thread_id": thread["id"], "delete_password": "wrong" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "incorrect password");

    let response = server
        .get("/api/replies/test")
        .add_query_param("thread_id", thread["id"].as_i64().unwrap())
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_delete_thread_with_correct_password() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;

    let response = server
        .delete("/api/threads/test")
        .json(&json!({ "thread_id": thread["id"], "delete_password": "test" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "success");

    let response = server
        .get("/api/replies/test")
        .add_query_param("thread_id", thread["id"].as_i64().unwrap())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_report_thread() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;

    for _ in 0..2 {
        let response = server
            .put("/api/threads/test")
            .json(&json!({ "thread_id": thread["id"] }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.text(), "reported");
    }

    let response = server
        .put("/api/threads/test")
        .json(&json!({ "thread_id": 9999 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_reply() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;
    let thread_id = thread["id"].as_i64().unwrap();

    let updated = create_reply(&server, thread_id, "test", "test").await;
    assert_eq!(updated["id"], thread_id);
    let replies = updated["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["text"], "test");
    assert!(replies[0]["id"].is_i64());
    assert!(replies[0].get("delete_password").is_none());
    assert_eq!(updated["bumped_on"], replies[0]["created_on"]);
}

#[tokio::test]
async fn test_create_reply_errors() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;

    let response = server
        .post("/api/replies/test")
        .json(&json!({
            "thread_id": thread["id"],
            "text": "x".repeat(501),
            "delete_password": "pw"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"]["code"], "INVALID_INPUT");

    let response = server
        .post("/api/replies/test")
        .json(&json!({ "thread_id": 9999, "text": "hi", "delete_password": "pw" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .post("/api/replies/other")
        .json(&json!({ "thread_id": thread["id"], "text": "hi", "delete_password": "pw" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_thread_with_all_replies() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;
    let thread_id = thread["id"].as_i64().unwrap();
    for i in 0..5 {
        create_reply(&server, thread_id, &format!("reply {i}"), "pw").await;
    }

    let response = server
        .get("/api/replies/test")
        .add_query_param("thread_id", thread_id)
        .await;
    response.assert_status_ok();
    let thread = response.json::<Value>();
    assert_eq!(thread["text"], "test");
    assert!(thread["created_on"].is_string());
    assert!(thread["bumped_on"].is_string());
    assert_eq!(thread["replies"].as_array().unwrap().len(), 5);
    assert!(thread.get("delete_password").is_none());
}

#[tokio::test]
async fn test_delete_reply() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;
    let thread_id = thread["id"].as_i64().unwrap();
    let updated = create_reply(&server, thread_id, "test", "test").await;
    let reply_id = updated["replies"][0]["id"].as_i64().unwrap();

    let response = server
        .delete("/api/replies/test")
        .json(&json!({
            "thread_id": thread_id,
            "reply_id": reply_id,
            "delete_password": "wrong"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "incorrect password");

    let response = server
        .delete("/api/replies/test")
        .json(&json!({
            "thread_id": thread_id,
            "reply_id": reply_id,
            "delete_password": "test"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "success");

    let response = server
        .get("/api/replies/test")
        .add_query_param("thread_id", thread_id)
        .await;
    let thread = response.json::<Value>();
    assert_eq!(thread["replies"][0]["text"], "[deleted]");
    assert_eq!(thread["bumped_on"], updated["bumped_on"]);
}

#[tokio::test]
async fn test_report_reply() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;
    let thread_id = thread["id"].as_i64().unwrap();
    let updated = create_reply(&server, thread_id, "test", "test").await;
    let reply_id = updated["replies"][0]["id"].as_i64().unwrap();

    let response = server
        .put("/api/replies/test")
        .json(&json!({ "thread_id": thread_id, "reply_id": reply_id }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "reported");

    let response = server
        .get("/api/replies/test")
        .add_query_param("thread_id", thread_id)
        .await;
    assert_eq!(response.json::<Value>()["replies"][0]["reported"], true);

    let response = server
        .put("/api/replies/test")
        .json(&json!({ "thread_id": thread_id, "reply_id": 9999 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reply_length_is_measured_after_trimming() {
    let server = create_test_server().await;
    let thread = create_thread(&server, "test", "test").await;
    let thread_id = thread["id"].as_i64().unwrap();

    let body = "x".repeat(500);
    let updated = create_reply(&server, thread_id, &format!("  {body}  "), "pw").await;
    assert_eq!(updated["replies"][0]["text"], body.as_str());
}
