//! Counter endpoint backed by the Upstash REST store, against a mock store.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header as header_eq, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use visitor_gateway::app_state::AppState;
use visitor_gateway::config::{self, GatewayConfig};
use visitor_gateway::router::build_router;
use visitor_gateway::store::{FixedCredentials, UpstashStore};

const INCR_PATH: &str = "/incr/portfolio:visits";

fn app(url: Option<&str>, token: Option<&str>, timeout: Duration) -> Router {
    app_with(GatewayConfig::default(), url, token, timeout)
}

fn app_with(
    cfg: GatewayConfig,
    url: Option<&str>,
    token: Option<&str>,
    timeout: Duration,
) -> Router {
    let creds = Arc::new(FixedCredentials::new(url, token));
    let store = UpstashStore::new(creds, timeout).unwrap();
    build_router(AppState::with_store(cfg, Arc::new(store)))
}

async fn call(app: Router) -> (StatusCode, Value, axum::http::HeaderMap) {
    let req = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap(), headers)
}

#[tokio::test]
async fn quoted_credentials_reach_store_unquoted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INCR_PATH))
        .and(header_eq("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("\"{}\"", server.uri());
    let app = app(Some(&url), Some("\"abc123\""), Duration::from_secs(5));

    let (status, body, headers) = call(app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "count": 42 }));
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn missing_credentials_never_contact_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 1 })))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    for (url, token) in [(Some(uri.as_str()), None), (None, Some("abc123")), (None, None)] {
        let (status, body, headers) = call(app(url, token, Duration::from_secs(5))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Redis configuration missing" }));
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}

#[tokio::test]
async fn store_rejection_is_not_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INCR_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "WRONGPASS invalid password" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = app(Some(&server.uri()), Some("bad"), Duration::from_secs(5));
    let (status, body, headers) = call(app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to increment counter" }));
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn slow_store_times_out_as_store_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INCR_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": 5 }))
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&server)
        .await;

    let app = app(Some(&server.uri()), Some("abc123"), Duration::from_millis(200));
    let (status, body, _) = call(app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to increment counter" }));
}

#[tokio::test]
async fn malformed_reply_reports_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INCR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let app = app(Some(&server.uri()), Some("abc123"), Duration::from_secs(5));
    let (status, body, _) = call(app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let msg = body["error"].as_str().unwrap();
    assert!(msg.starts_with("invalid store reply"), "{msg}");
}

#[tokio::test]
async fn unreachable_store_reports_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{addr}");
    let app = app(Some(&url), Some("abc123"), Duration::from_secs(5));
    let (status, body, _) = call(app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let msg = body["error"].as_str().unwrap();
    assert!(!msg.is_empty());
    assert_ne!(msg, "Failed to increment counter");
}

#[tokio::test]
async fn reserved_characters_in_key_stay_in_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let cfg = config::load_from_str("version: 1\ncounter:\n  key: \"blog?visits#1%\"\n")
        .unwrap();
    let app = app_with(cfg, Some(&server.uri()), Some("abc123"), Duration::from_secs(5));

    let (status, body, _) = call(app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "count": 3 }));

    let seen = server.received_requests().await.unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url.path(), "/incr/blog%3Fvisits%231%25");
    assert_eq!(seen[0].url.query(), None);
    assert_eq!(seen[0].url.fragment(), None);
}

#[tokio::test]
async fn default_key_path_is_unescaped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INCR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 9 })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(Some(&server.uri()), Some("abc123"), Duration::from_secs(5));
    let (status, _, _) = call(app).await;
    assert_eq!(status, StatusCode::OK);

    let seen = server.received_requests().await.unwrap();
    assert_eq!(seen[0].url.path(), "/incr/portfolio:visits");
}
