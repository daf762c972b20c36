//! Comment submission against a mock comment endpoint.

use headless_blog::config::Endpoint;
use headless_blog::content::{CommentSubmission, CommentsApi, ContentError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> CommentsApi {
    let url = Endpoint::parse("COMMENTS_API_URL", &format!("{}/api/comments", server.uri()))
        .expect("mock server URI is valid");
    CommentsApi::with_http(reqwest::Client::new(), url)
}

fn submission() -> CommentSubmission {
    serde_json::from_value(json!({
        "postSlug": "post-a",
        "name": "Jane",
        "comment": "Nice!"
    }))
    .expect("valid submission")
}

#[tokio::test]
async fn test_submit_comment_returns_parsed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .and(body_json(json!({ "slug": "post-a", "name": "Jane", "comment": "Nice!" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "createComment": { "id": "c1" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server).submit_comment(&submission()).await.unwrap();
    assert_eq!(response, json!({ "createComment": { "id": "c1" } }));
}

#[tokio::test]
async fn test_submit_comment_includes_email_when_given() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "slug": "post-a",
            "name": "Jane",
            "email": "jane@example.com",
            "comment": "Nice!"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let mut submission = submission();
    submission.email = Some("jane@example.com".to_string());
    let response = api_for(&server).submit_comment(&submission).await.unwrap();
    assert_eq!(response["ok"], true);
}

#[tokio::test]
async fn test_submit_comment_empty_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = api_for(&server).submit_comment(&submission()).await.unwrap();
    assert!(response.is_null());
}

#[tokio::test]
async fn test_submit_comment_propagates_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let err = api_for(&server).submit_comment(&submission()).await.unwrap_err();
    match err {
        ContentError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "database down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_submit_comment_rejects_non_json_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).submit_comment(&submission()).await.unwrap_err();
    assert!(matches!(err, ContentError::Decode(_)));
}

#[tokio::test]
async fn test_submit_comment_missing_fields_sends_nothing() {
    let server = MockServer::start().await;

    let mut submission = submission();
    submission.comment = "   ".to_string();
    let err = api_for(&server).submit_comment(&submission).await.unwrap_err();

    assert!(matches!(err, ContentError::MissingFields(ref f) if f == &["comment"]));
    assert!(err.is_client_error());
    assert!(server.received_requests().await.unwrap().is_empty());
}
