//! Integration tests for web routes backed by a mock content API.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use headless_blog::config::{Config, Endpoint};
use headless_blog::content::{CommentsApi, ContentClient};
use headless_blog::web::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test app whose content and comment endpoints live on `server`.
fn create_test_app(server: &MockServer) -> Router {
    let graphql = Endpoint::parse("GRAPHCMS_ENDPOINT", &format!("{}/graphql", server.uri()))
        .expect("mock server URI is valid");
    let comments = Endpoint::parse("COMMENTS_API_URL", &format!("{}/api/comments", server.uri()))
        .expect("mock server URI is valid");

    let state = AppState {
        config: Arc::new(Config::for_testing()),
        content: ContentClient::with_http(reqwest::Client::new(), graphql, None),
        comments: CommentsApi::with_http(reqwest::Client::new(), comments),
    };
    create_app(state)
}

async fn mount_graphql(server: &MockServer, operation: &str, data: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains(operation))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .mount(server)
        .await;
}

fn post_json(slug: &str, created_at: &str) -> Value {
    json!({
        "slug": slug,
        "title": format!("Title {slug}"),
        "createdAt": created_at,
        "excerpt": format!("Excerpt {slug}"),
        "author": { "name": "Jane", "bio": "Writes things", "photo": { "url": "https://media.graphassets.com/jane" } },
        "categories": [{ "name": "Tech", "slug": "tech" }]
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let (status, body) = get(create_test_app(&server), "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_home_page_lists_posts() {
    let server = MockServer::start().await;
    mount_graphql(
        &server,
        "GetPosts",
        json!({ "postsConnection": { "edges": [
            { "cursor": "c2", "node": post_json("second", "2024-03-02T00:00:00Z") },
            { "cursor": "c1", "node": post_json("first", "2024-03-01T00:00:00Z") }
        ] } }),
    )
    .await;
    mount_graphql(
        &server,
        "GetCategories",
        json!({ "categories": [{ "name": "Tech", "slug": "tech" }] }),
    )
    .await;
    mount_graphql(
        &server,
        "GetRecentPosts",
        json!({ "posts": [post_json("second", "2024-03-02T00:00:00Z")] }),
    )
    .await;

    let (status, body) = get(create_test_app(&server), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Title second"));
    assert!(body.contains("Title first"));
    assert!(body.find("Title second") < body.find("Title first"));
    assert!(body.contains(r#"href="/category/tech""#));
    assert!(body.contains("Recent Posts"));
}

#[tokio::test]
async fn test_home_page_renders_when_content_api_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, body) = get(create_test_app(&server), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No posts yet."));
    assert!(!body.contains("Recent Posts"));
}

#[tokio::test]
async fn test_post_detail_page() {
    let server = MockServer::start().await;
    let mut post = post_json("middle", "2024-03-02T00:00:00Z");
    post["content"] = json!({ "raw": { "children": [
        { "type": "paragraph", "children": [{ "text": "Hello body", "bold": true }] }
    ] } });
    mount_graphql(&server, "GetPostDetails", json!({ "post": post })).await;
    mount_graphql(
        &server,
        "GetAdjacentPosts",
        json!({
            "next": [post_json("later", "2024-03-03T00:00:00Z")],
            "previous": []
        }),
    )
    .await;
    mount_graphql(
        &server,
        "GetComments",
        json!({ "comments": [
            { "name": "Sam", "comment": "Great read", "createdAt": "2024-03-04T00:00:00Z" }
        ] }),
    )
    .await;
    mount_graphql(
        &server,
        "GetSimilarPosts",
        json!({ "posts": [post_json("cousin", "2024-02-01T00:00:00Z")] }),
    )
    .await;

    let (status, body) = get(create_test_app(&server), "/post/middle").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Title middle</h1>"));
    assert!(body.contains("<strong>Hello body</strong>"));
    assert!(body.contains("Next Post"));
    assert!(!body.contains("Previous Post"));
    assert!(body.contains("Great read"));
    assert!(body.contains("Related Posts"));
    assert!(body.contains(r#"href="/post/cousin""#));
    assert!(body.contains(r#"action="/post/middle/comments""#));
}

#[tokio::test]
async fn test_post_detail_not_found() {
    let server = MockServer::start().await;
    mount_graphql(&server, "GetPostDetails", json!({ "post": null })).await;

    let (status, body) = get(create_test_app(&server), "/post/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Post not found"));
}

#[tokio::test]
async fn test_post_detail_unavailable_renders_page_without_post() {
    let server = MockServer::start().await;
    mount_graphql(
        &server,
        "GetCategories",
        json!({ "categories": [{ "name": "Tech", "slug": "tech" }] }),
    )
    .await;
    Mock::given(method("POST"))
        .and(body_string_contains("GetPostDetails"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, body) = get(create_test_app(&server), "/post/anything").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("could not be loaded right now"));
    assert!(body.contains(r#"href="/category/tech""#));
    assert!(!body.contains("Post unavailable"));
    assert!(!body.contains("comment-form"));
}

#[tokio::test]
async fn test_post_detail_shows_comment_notice() {
    let server = MockServer::start().await;
    mount_graphql(
        &server,
        "GetPostDetails",
        json!({ "post": post_json("p", "2024-03-02T00:00:00Z") }),
    )
    .await;

    let (_, body) = get(create_test_app(&server), "/post/p?commented=1").await;
    assert!(body.contains("Comment submitted for review"));
}

#[tokio::test]
async fn test_category_page() {
    let server = MockServer::start().await;
    mount_graphql(
        &server,
        "GetCategoryPost",
        json!({ "postsConnection": { "edges": [
            { "cursor": "c1", "node": post_json("in-tech", "2024-03-01T00:00:00Z") }
        ] } }),
    )
    .await;
    mount_graphql(
        &server,
        "GetCategories",
        json!({ "categories": [{ "name": "Tech", "slug": "tech" }] }),
    )
    .await;

    let (status, body) = get(create_test_app(&server), "/category/tech").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Tech</h1>"));
    assert!(body.contains("Title in-tech"));
}

#[tokio::test]
async fn test_api_create_comment() {
    let server = MockServer::start().await;
    mount_graphql(
        &server,
        "mutation CreateComment",
        json!({ "createComment": { "id": "new-id" } }),
    )
    .await;

    let response = create_test_app(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/comments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "postSlug": "post-a", "name": "Jane", "comment": "Nice!" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "createComment": { "id": "new-id" } }));
}

#[tokio::test]
async fn test_api_create_comment_rejects_missing_fields() {
    let server = MockServer::start().await;

    let response = create_test_app(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/comments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "slug": "post-a", "name": "", "comment": "Nice!" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_form_redirects_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "createComment": { "id": "x" } })))
        .expect(1)
        .mount(&server)
        .await;

    let response = create_test_app(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/post/post-a/comments")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Jane&email=&comment=Nice%21"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/post/post-a?commented=1#comment-form"
    );
}

#[tokio::test]
async fn test_comment_form_error_keeps_reader_input() {
    let server = MockServer::start().await;
    mount_graphql(
        &server,
        "GetPostDetails",
        json!({ "post": post_json("post-a", "2024-03-02T00:00:00Z") }),
    )
    .await;

    let response = create_test_app(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/post/post-a/comments")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=&email=jane%40example.com&comment=Nice%21"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Please fill in: name"));
    assert!(body.contains("Nice!</textarea>"));
    assert!(body.contains(r#"value="jane@example.com""#));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() != "/api/comments"));
}

#[tokio::test]
async fn test_api_create_comment_missing_key_answers_json() {
    let server = MockServer::start().await;

    let response = create_test_app(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/comments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "postSlug": "post-a", "comment": "Nice!" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("name"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_api_create_comment_malformed_body_answers_json() {
    let server = MockServer::start().await;

    let response = create_test_app(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/comments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].is_string());
}
