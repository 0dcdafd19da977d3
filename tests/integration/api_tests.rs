//! HTTP adapter tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::app;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/books"].is_object());
    assert!(body["paths"]["/loans/{id}/return"].is_object());
}

#[tokio::test]
async fn test_create_and_delete_book() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({ "title": "Dune", "author": "Herbert", "total_copies": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["available_copies"], 2);
    let book_id = body["id"].as_i64().expect("No book ID");

    let (status, body) = send(&app, Method::GET, "/api/v1/books?search=DUN", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &format!("/api/v1/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_create_book_validation_error() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({ "title": " ", "author": "Herbert", "total_copies": -3 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("Title is required"));
    assert!(message.contains("Total copies must be >= 0"));
}

#[tokio::test]
async fn test_update_member_not_found() {
    let app = app().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/members/99",
        Some(json!({ "name": "Nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_loan_lifecycle() {
    let app = app().await;

    let (_, book) = send(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({ "title": "Dune", "author": "Herbert", "total_copies": 1 })),
    )
    .await;
    let (status, member) = send(
        &app,
        Method::POST,
        "/api/v1/members",
        Some(json!({ "name": "Alice", "phone": "555-0100" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let request = json!({ "book_id": book["id"], "member_id": member["id"], "duration_days": 7 });
    let (status, loan) = send(&app, Method::POST, "/api/v1/loans", Some(request.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(loan["status"], "open");
    assert_eq!(loan["is_overdue"], false);
    let loan_id = loan["id"].as_i64().expect("No loan ID");

    let (status, body) = send(&app, Method::POST, "/api/v1/loans", Some(request)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let (status, open) = send(&app, Method::GET, "/api/v1/loans", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(open[0]["book_title"], "Dune");
    assert_eq!(open[0]["member_name"], "Alice");

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/members/{}", member["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let uri = format!("/api/v1/loans/{}/return", loan_id);
    let (status, returned) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["status"], "returned");

    let (status, _) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, book) = send(&app, Method::GET, &format!("/api/v1/books/{}", book["id"]), None).await;
    assert_eq!(book["available_copies"], 1);

    let (_, open) = send(&app, Method::GET, "/api/v1/loans", None).await;
    assert_eq!(open.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_non_numeric_id_is_validation_error() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/books/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].is_string());

    let (status, body) = send(&app, Method::POST, "/api/v1/loans/abc/return", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_non_numeric_counts_are_validation_errors() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({ "title": "Dune", "author": "Herbert", "total_copies": "two" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/loans",
        Some(json!({ "book_id": 1, "member_id": 1, "duration_days": "a week" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, books) = send(&app, Method::GET, "/api/v1/books", None).await;
    assert_eq!(books.as_array().map(Vec::len), Some(0));
}
