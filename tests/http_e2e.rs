//! End-to-end tests over a real TCP listener.
//!
//! The scraper is a `sh -c` script standing in for the Python scraper, and
//! records live in the in-memory store, so no database is required.

#![cfg(unix)]
#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use nurdd_server::api;
use nurdd_server::app_state::AppState;
use nurdd_server::config::ScraperConfig;
use nurdd_server::persistence::MemoryWebsiteStore;
use nurdd_server::scraper::ProcessScraper;
use nurdd_server::service::WebsiteService;
use serde_json::{Value, json};

/// Prints a reply whose brand name is derived from the URL argument.
const SCRIPT: &str = r#"
case "$1" in
  *broken*) echo "not json at all" ;;
  *down*)   echo "requests timed out" >&2; printf '{"error":"site unreachable"}' ;;
  *)        printf '{"brandname":"Acme","description":"Tools for %s"}\n' "$1" ;;
esac
"#;

async fn spawn_server() -> SocketAddr {
    let scraper = ProcessScraper::new(&ScraperConfig {
        command: "sh".to_string(),
        args: vec!["-c".to_string(), SCRIPT.to_string(), "scraper".to_string()],
        timeout: Some(Duration::from_secs(10)),
        max_concurrency: 4,
    });
    let service = WebsiteService::new(Arc::new(scraper), Arc::new(MemoryWebsiteStore::new()));
    let app = api::build_app(AppState::new(service), api::cors_layer(None));

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn json_of(response: reqwest::Response) -> Value {
    let Ok(body) = response.json::<Value>().await else {
        panic!("response is not json");
    };
    body
}

#[tokio::test]
async fn analyze_list_edit_delete() {
    let addr = spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let Ok(response) = client
        .post(format!("{base}/api/analyze"))
        .json(&json!({ "url": "https://acme.com" }))
        .send()
        .await
    else {
        panic!("analyze request failed");
    };
    assert_eq!(response.status().as_u16(), 201);
    let created = json_of(response).await;
    assert_eq!(created.get("url"), Some(&json!("https://acme.com")));
    assert_eq!(created.get("brandname"), Some(&json!("Acme")));
    assert_eq!(
        created.get("description"),
        Some(&json!("Tools for https://acme.com"))
    );
    let Some(id) = created.get("id").and_then(Value::as_i64) else {
        panic!("id missing");
    };

    let Ok(response) = client.get(format!("{base}/api/data")).send().await else {
        panic!("list request failed");
    };
    assert_eq!(response.status().as_u16(), 200);
    let rows = json_of(response).await;
    assert_eq!(rows.get(0), Some(&created));

    let Ok(response) = client
        .put(format!("{base}/api/nurdd/{id}"))
        .json(&json!({ "description": "Edited" }))
        .send()
        .await
    else {
        panic!("update request failed");
    };
    assert_eq!(response.status().as_u16(), 200);
    let updated = json_of(response).await;
    assert_eq!(updated.get("description"), Some(&json!("Edited")));
    assert_eq!(updated.get("timestamp"), created.get("timestamp"));

    let Ok(response) = client.delete(format!("{base}/api/nurdd/{id}")).send().await else {
        panic!("delete request failed");
    };
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(json_of(response).await, json!({ "message": "Data deleted" }));

    let Ok(response) = client.get(format!("{base}/api/data")).send().await else {
        panic!("list request failed");
    };
    assert_eq!(json_of(response).await, json!([]));
}

#[tokio::test]
async fn scraper_failures_store_nothing() {
    let addr = spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    for (url, message) in [
        ("https://down.example.com", "site unreachable"),
        ("https://broken.example.com", "failed to parse scraper output"),
    ] {
        let Ok(response) = client
            .post(format!("{base}/api/analyze"))
            .json(&json!({ "url": url }))
            .send()
            .await
        else {
            panic!("analyze request failed");
        };
        assert_eq!(response.status().as_u16(), 500);
        assert_eq!(json_of(response).await, json!({ "error": message }));
    }

    let Ok(response) = client.get(format!("{base}/api/data")).send().await else {
        panic!("list request failed");
    };
    assert_eq!(json_of(response).await, json!([]));
}

#[tokio::test]
async fn health_is_served() {
    let addr = spawn_server().await;
    let Ok(response) = reqwest::get(format!("http://{addr}/health")).await else {
        panic!("health request failed");
    };
    assert_eq!(response.status().as_u16(), 200);
    let body = json_of(response).await;
    assert_eq!(body.get("status"), Some(&json!("healthy")));
}
