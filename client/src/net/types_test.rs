use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn signup_body_always_carries_name() {
    let body = SignupBody { name: "", email: "a@b.com", password: "x" };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["name"], "");
}

// =============================================================
// Responses
// =============================================================

#[test]
fn auth_response_tolerates_missing_user_name() {
    let raw = r#"{"jwt":"t0k","user":{"email":"a@b.com"}}"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.jwt, "t0k");
    assert_eq!(resp.user.name, None);
}

#[test]
fn post_list_accepts_bare_array() {
    let raw = r#"[{"id":"p1","title":"T","content":"C","author":{"name":"Ann"}}]"#;
    let posts = serde_json::from_str::<PostList>(raw).unwrap().into_posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author.name.as_deref(), Some("Ann"));
}

#[test]
fn post_list_accepts_wrapped_blogs() {
    let raw = r#"{"blogs":[{"id":3,"title":"T","content":"C","author":{"name":null}}]}"#;
    let posts = serde_json::from_str::<PostList>(raw).unwrap().into_posts();
    assert_eq!(posts[0].id, "3");
    assert_eq!(posts[0].author.name, None);
}

#[test]
fn post_without_author_defaults_to_unnamed() {
    let raw = r#"{"id":"p9","title":"T","content":"C"}"#;
    let post = serde_json::from_str::<SinglePost>(raw).unwrap().into_post();
    assert_eq!(post.author, Author::default());
}

#[test]
fn single_post_accepts_wrapped_blog() {
    let raw = r#"{"blog":{"id":"p2","title":"Hello","content":"Body","author":{"name":"Bo"}}}"#;
    let post = serde_json::from_str::<SinglePost>(raw).unwrap().into_post();
    assert_eq!(post.title, "Hello");
}
