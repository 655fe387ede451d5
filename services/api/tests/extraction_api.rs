//! Integration tests for the extraction store HTTP surface.

use api_lib::adapters::MemoryExtractionStore;
use api_lib::config::{Config, ServiceKind};
use api_lib::web::{extraction_router, state::ExtractionState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Helper to create a test app with an empty in-memory store
fn create_test_app() -> Router {
    let config = Config::from_lookup(ServiceKind::Extraction, |_| None).unwrap();
    let state = Arc::new(ExtractionState {
        store: Arc::new(MemoryExtractionStore::new()),
        config: Arc::new(config),
    });
    extraction_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn analyze_request(body: String) -> Request<Body> {
    Request::builder()
        .uri("/api/analyze")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}

async fn analyze(app: &Router, url: &str) -> Value {
    let (status, json) = send(app, analyze_request(json!({ "url": url }).to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    json["data"].clone()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, json) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "extraction-api");
}

#[tokio::test]
async fn test_analyze_returns_wrapped_extraction() {
    let app = create_test_app();
    let data = analyze(&app, "https://example.com").await;

    assert_eq!(data["url"], "https://example.com");
    assert_eq!(data["title"], "Website Analysis - example.com");
    for key in ["htmlAssets", "cssAssets", "jsAssets", "imageAssets", "fontAssets"] {
        let assets = data[key].as_array().unwrap();
        assert!(!assets.is_empty(), "{key} should not be empty");
    }
    let score = data["performanceScore"].as_u64().unwrap();
    assert!((70..100).contains(&score));
    assert_eq!(data["createdAt"], data["updatedAt"]);
}

#[tokio::test]
async fn test_analyze_rejects_bad_input() {
    let app = create_test_app();

    let (status, json) = send(&app, analyze_request("{not json".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid request body");
    assert!(json["errors"].as_array().is_some());

    let (status, json) = send(&app, analyze_request("{}".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "URL is required");

    let (status, json) = send(
        &app,
        analyze_request(json!({ "url": "https://exa mple.com" }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid URL format");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn test_analyze_derives_titles_from_general_urls() {
    let app = create_test_app();
    let cases = [
        ("https://m\u{fc}nchen.de", "xn--mnchen-3ya.de"),
        ("https://example.com/a b", "example.com"),
        ("https://example.com/?q=\"x\"", "example.com"),
        ("//example.com/x", "example.com"),
        ("mailto:a@b.c", ""),
        ("not a url", ""),
    ];

    for (url, host) in cases {
        let data = analyze(&app, url).await;
        assert_eq!(data["url"], url);
        assert_eq!(data["title"], format!("Website Analysis - {}", host), "{url}");
    }
}

#[tokio::test]
async fn test_analyze_accepts_body_without_content_type() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/api/analyze")
        .method("POST")
        .body(Body::from(json!({ "url": "https://plain.example" }).to_string()))
        .unwrap();

    let (status, json) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["url"], "https://plain.example");
}

#[tokio::test]
async fn test_list_is_newest_first_and_limited() {
    let app = create_test_app();
    let mut ids = Vec::new();
    for i in 0..12 {
        let data = analyze(&app, &format!("https://site{}.example", i)).await;
        ids.push(data["id"].as_str().unwrap().to_string());
    }

    let (status, json) = send(&app, get("/api/extractions")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = json["data"].as_array().unwrap();
    assert_eq!(listed.len(), 10);
    assert_eq!(listed[0]["id"], ids[11].as_str());
    assert_eq!(listed[9]["id"], ids[2].as_str());

    let (_, json) = send(&app, get("/api/extractions?limit=2")).await;
    let listed = json["data"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], ids[11].as_str());
    assert_eq!(listed[1]["id"], ids[10].as_str());

    let (_, json) = send(&app, get("/api/extractions?limit=50")).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_list_falls_back_to_default_limit() {
    let app = create_test_app();
    for i in 0..11 {
        analyze(&app, &format!("https://site{}.example", i)).await;
    }

    for uri in [
        "/api/extractions?limit=abc",
        "/api/extractions?limit=0",
        "/api/extractions?limit=-3",
    ] {
        let (status, json) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json["data"].as_array().unwrap().len(), 10, "{uri}");
    }
}

#[tokio::test]
async fn test_list_on_empty_store() {
    let app = create_test_app();
    let (status, json) = send(&app, get("/api/extractions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": true, "data": [] }));
}

#[tokio::test]
async fn test_get_after_create() {
    let app = create_test_app();
    let data = analyze(&app, "https://example.com").await;
    let id = data["id"].as_str().unwrap();

    let (status, json) = send(&app, get(&format!("/api/extractions/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"], data);
}

#[tokio::test]
async fn test_get_unknown_is_404() {
    let app = create_test_app();
    let (status, json) = send(&app, get("/api/extractions/does-not-exist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({ "success": false, "message": "Extraction not found" })
    );
}

#[tokio::test]
async fn test_delete_then_get_and_delete_again() {
    let app = create_test_app();
    let data = analyze(&app, "https://example.com").await;
    let uri = format!("/api/extractions/{}", data["id"].as_str().unwrap());

    let (status, json) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "success": true, "message": "Extraction deleted" })
    );

    let (status, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_report_summarizes_extraction() {
    let app = create_test_app();
    let data = analyze(&app, "https://example.com").await;
    let id = data["id"].as_str().unwrap();

    let (status, json) = send(&app, get(&format!("/api/extractions/{}/report", id))).await;
    assert_eq!(status, StatusCode::OK);
    let report = &json["data"];
    assert_eq!(report["url"], "https://example.com");
    assert_eq!(report["summary"]["totalAssets"], 15);
    assert_eq!(report["summary"]["frameworks"], 3);
    assert_eq!(report["summary"]["performanceScore"], data["performanceScore"]);
    assert_eq!(report["extractedAt"], data["createdAt"]);

    let (status, _) = send(&app, get("/api/extractions/missing/report")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_is_answered() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/api/analyze")
        .method("OPTIONS")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
