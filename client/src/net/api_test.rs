use super::*;

#[test]
fn blog_path_formats_expected_path() {
    assert_eq!(blog_path("p42"), "/api/v1/blog/p42");
}

#[test]
fn http_api_joins_base_and_path() {
    let api = HttpApi::new("https://backend.example.workers.dev/");
    assert_eq!(api.url(BLOG_LIST_PATH), "https://backend.example.workers.dev/api/v1/blog/bulk");
    assert_eq!(
        api.url(AuthMode::SignIn.api_path()),
        "https://backend.example.workers.dev/api/v1/user/signin"
    );
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(403));
}

// =============================================================
// parse_auth_response
// =============================================================

#[test]
fn parse_auth_response_decodes_success() {
    let resp = parse_auth_response(200, r#"{"jwt":"abc","user":{"name":"Bob","email":"b@x.io"}}"#).unwrap();
    assert_eq!(resp.jwt, "abc");
    assert_eq!(resp.user.name.as_deref(), Some("Bob"));
}

#[test]
fn parse_auth_response_maps_error_body() {
    let err = parse_auth_response(411, r#"{"error":"User not found"}"#).unwrap_err();
    assert_eq!(err, ApiError::UserNotFound);
}

#[test]
fn parse_auth_response_reports_bad_success_body() {
    let err = parse_auth_response(200, "{}").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// parse_posts / parse_post
// =============================================================

#[test]
fn parse_posts_accepts_empty_collection() {
    assert_eq!(parse_posts(200, "[]").unwrap(), Vec::new());
    assert_eq!(parse_posts(200, r#"{"blogs":[]}"#).unwrap(), Vec::new());
}

#[test]
fn parse_posts_surfaces_server_error() {
    let err = parse_posts(403, r#"{"error":"unauthorized"}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::Server {
            status: 403,
            message: "unauthorized".to_owned()
        }
    );
}

#[test]
fn parse_post_decodes_wrapped_blog() {
    let post = parse_post(200, r#"{"blog":{"id":"1","title":"T","content":"C","author":{"name":"A"}}}"#).unwrap();
    assert_eq!(post.id, "1");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn authenticate_is_unavailable_outside_the_browser() {
    let api = HttpApi::default();
    let result = futures::executor::block_on(api.authenticate(AuthMode::SignIn, &Credentials::default()));
    assert!(matches!(result, Err(ApiError::Transport(_))));
}
