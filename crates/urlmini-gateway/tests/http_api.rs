use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use urlmini_core::{ShortenerSettings, FRAGMENT_LENGTH};
use urlmini_gateway::{App, AppState};
use urlmini_generator::RandomFragments;
use urlmini_shortener::UrlShortener;
use urlmini_storage::InMemoryStore;

fn router() -> Router {
    let shortener = UrlShortener::new(
        InMemoryStore::new(),
        RandomFragments::new(),
        ShortenerSettings::default(),
    );
    App::router(AppState::new(Arc::new(shortener)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn minify(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/minify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn expand(app: &Router, query: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(format!("/v1/expand{}", query))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn health() {
    let app = router();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn minify_returns_insecure_alias() {
    let app = router();

    let (status, body) = minify(&app, json!({ "url": "https://www.google.com" })).await;

    assert_eq!(status, StatusCode::OK);
    let mini_url = body["mini_url"].as_str().unwrap();
    let fragment = mini_url.strip_prefix("http://url.mini/").unwrap();
    assert_eq!(fragment.len(), FRAGMENT_LENGTH);
    assert!(fragment.bytes().all(|b| b.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn minify_with_secure_flag() {
    let app = router();

    let (status, body) = minify(
        &app,
        json!({ "url": "https://example.com/docs", "use_secure": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["mini_url"]
        .as_str()
        .unwrap()
        .starts_with("https://www.url.mini/"));
}

#[tokio::test]
async fn minify_is_idempotent() {
    let app = router();

    let (_, first) = minify(&app, json!({ "url": "https://www.google.com" })).await;
    let (_, second) = minify(&app, json!({ "url": "https://www.google.com/" })).await;

    assert_eq!(first["mini_url"], second["mini_url"]);
}

#[tokio::test]
async fn expand_round_trip() {
    let app = router();

    let (_, minified) = minify(&app, json!({ "url": "https://example.com/a?b=c" })).await;
    let mini_url = minified["mini_url"].as_str().unwrap();

    let (status, body) = expand(&app, &format!("?mini_url={}", mini_url)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_url"], "https://example.com/a?b=c");
}

#[tokio::test]
async fn expand_unknown_alias_is_not_found() {
    let app = router();

    let (status, body) = expand(&app, "?mini_url=http://url.mini/abcd1234").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("abcd1234"));
}

#[tokio::test]
async fn malformed_url_is_bad_request() {
    let app = router();

    let (status, body) = minify(&app, json!({ "url": "not a url" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = minify(&app, json!({ "url": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = minify(&app, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_mini_url_is_bad_request() {
    let app = router();

    let (status, body) = expand(&app, "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

async fn minify_raw(app: &Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/minify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn unparseable_body_is_bad_request_with_json_error() {
    let app = router();

    let (status, body) = minify_raw(&app, "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = minify_raw(&app, r#"{"url": 5}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let app = router();
    let request = Request::builder()
        .method("POST")
        .uri("/v1/minify")
        .body(Body::from(r#"{"url": "https://example.com"}"#))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
