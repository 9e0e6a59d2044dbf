use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

async fn status_of(uri: &str) -> StatusCode {
    let app = base_routes(Path::new("target/site"));
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    resp.status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    assert_eq!(status_of("/pkg/__missing__.wasm").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    assert_eq!(status_of("/api/v1/blog/bulk").await, StatusCode::NOT_FOUND);
}
