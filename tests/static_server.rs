//! Static server routing: real files are served as-is, everything else
//! falls back to index.html.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use dex_interface::config::ServerConfig;
use dex_interface::server::create_router;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!doctype html><div id=\"root\"></div>";
const SCRIPT: &str = "console.log('main');";

fn build_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::create_dir_all(dir.path().join("static/js")).unwrap();
    fs::write(dir.path().join("static/js/main.js"), SCRIPT).unwrap();
    dir
}

fn config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        static_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    }
}

async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, String) {
    let response = create_router(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_existing_file() {
    let dir = build_dir();
    let (status, body) = get(&config(&dir), "/static/js/main.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SCRIPT);
}

#[tokio::test]
async fn root_serves_index() {
    let dir = build_dir();
    let (status, body) = get(&config(&dir), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn client_route_falls_back_to_index() {
    let dir = build_dir();
    for uri in ["/swap", "/pool/42", "/static/js/missing.js"] {
        let (status, body) = get(&config(&dir), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, INDEX, "{}", uri);
    }
}

#[tokio::test]
async fn missing_index_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _) = get(&config(&dir), "/swap").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
