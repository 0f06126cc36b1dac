#![allow(dead_code)]

//! Test infrastructure for ua-server router tests

use ua_config::ServerConfig;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";
pub const APP_JS: &str = "console.log('bundle');";

/// Create a built bundle on disk: index.html plus one asset
pub fn create_bundle() -> TempDir {
    let temp = TempDir::new().expect("Failed to create bundle dir");
    std::fs::write(temp.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir_all(temp.path().join("static/js")).unwrap();
    std::fs::write(temp.path().join("static/js/main.js"), APP_JS).unwrap();
    temp
}

/// Server config pointing at the bundle
pub fn config_for(bundle: &TempDir) -> ServerConfig {
    ServerConfig {
        static_dir: bundle.path().to_str().unwrap().to_string(),
        ..Default::default()
    }
}

/// Send one request through the router
pub async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
