//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! List and single-post responses are accepted both bare and wrapped
//! (`{"blogs": [...]}`, `{"blog": {...}}`) so the client tolerates either
//! backend shape without a second code path in the pages.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Form fields behind signup/signin.
///
/// Sent as [`SignupBody`] or [`SigninBody`]; only signup carries `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Signin request body.
#[derive(Debug, Serialize)]
pub struct SigninBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Signup request body.
#[derive(Debug, Serialize)]
pub struct SignupBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful signup/signin response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
    pub user: AuthUser,
}

/// User fields echoed back by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

/// Error body shape: `{ "error": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A blog post as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Author,
}

/// Post author; the name may be missing for legacy rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum PostList {
    Bare(Vec<Post>),
    Wrapped { blogs: Vec<Post> },
}

#[cfg(any(test, feature = "hydrate"))]
impl PostList {
    pub(crate) fn into_posts(self) -> Vec<Post> {
        match self {
            Self::Bare(posts) | Self::Wrapped { blogs: posts } => posts,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum SinglePost {
    Wrapped { blog: Post },
    Bare(Post),
}

#[cfg(any(test, feature = "hydrate"))]
impl SinglePost {
    pub(crate) fn into_post(self) -> Post {
        match self {
            Self::Wrapped { blog: post } | Self::Bare(post) => post,
        }
    }
}

/// Ids arrive as strings (UUIDs) or integers depending on the backend.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
