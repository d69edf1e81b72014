use axum::body::{Body, to_bytes};
use axum::http::Request;
use navigation::{RouteTable, RouterConfig};
use tempfile::TempDir;
use tower::ServiceExt;

use super::*;

const SHELL: &str = "<!DOCTYPE html><html><body>gradpath</body></html>";
const SCRIPT: &str = "console.log('gradpath');";

fn static_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), SHELL).expect("write index");
    std::fs::write(dir.path().join("app.js"), SCRIPT).expect("write script");
    dir
}

async fn get_path(base: &str, path: &str) -> (StatusCode, String, String) {
    let dir = static_dir();
    let state = AppState::new(RouteTable::gradpath(), RouterConfig::new(base), SHELL);
    let request = Request::builder().uri(path).body(Body::empty()).expect("request");
    let response = app(state, dir.path()).oneshot(request).await.expect("response");
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, content_type, String::from_utf8_lossy(&body).into_owned())
}

// =============================================================
// Root base
// =============================================================

#[tokio::test]
async fn healthz_answers_ok() {
    let (status, _, _) = get_path("/", "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn serves_assets_from_static_dir() {
    let (status, content_type, body) = get_path("/", "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!content_type.starts_with("text/html"), "{content_type}");
    assert_eq!(body, SCRIPT);
}

#[tokio::test]
async fn known_route_falls_through_to_shell() {
    let (status, content_type, body) = get_path("/", "/reviewer/application/42").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert_eq!(body, SHELL);
}

#[tokio::test]
async fn unknown_route_gets_shell_with_not_found() {
    let (status, _, body) = get_path("/", "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, SHELL);
}

// =============================================================
// Non-root base
// =============================================================

#[tokio::test]
async fn based_assets_are_served_under_base() {
    let (status, content_type, body) = get_path("/gradpath", "/gradpath/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!content_type.starts_with("text/html"), "{content_type}");
    assert_eq!(body, SCRIPT);
}

#[tokio::test]
async fn based_routes_resolve_after_stripping_base() {
    let (status, _, body) = get_path("/gradpath", "/gradpath/admin/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SHELL);

    let (status, _, body) = get_path("/gradpath", "/gradpath/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, SHELL);
}

#[tokio::test]
async fn based_route_named_like_base_strips_once() {
    let (status, _, _) = get_path("/admin", "/admin/admin/overview").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = get_path("/admin", "/admin/overview").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn paths_outside_base_are_not_found() {
    for path in ["/app.js", "/admin/overview", "/student/application/42"] {
        let (status, _, body) = get_path("/gradpath", path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_ne!(body, SHELL, "{path}");
    }
}

#[tokio::test]
async fn healthz_stays_at_root_with_base() {
    let (status, _, _) = get_path("/gradpath", "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}
