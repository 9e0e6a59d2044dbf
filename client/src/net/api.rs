//! REST API helpers for the blog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Transport`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-success bodies are mapped to
//! error kinds by [`ApiError::from_response_body`]; callers never see raw
//! status text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, Credentials, Post};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{PostList, SinglePost};
use crate::auth::AuthMode;
use crate::auth::flow::AuthApi;
use crate::config;

/// Collection endpoint for the listing page.
pub const BLOG_LIST_PATH: &str = "/api/v1/blog/bulk";

#[cfg(any(test, feature = "hydrate"))]
fn blog_path(id: &str) -> String {
    format!("/api/v1/blog/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_auth_response(status: u16, body: &str) -> Result<AuthResponse, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_response_body(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_posts(status: u16, body: &str) -> Result<Vec<Post>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_response_body(status, body));
    }
    serde_json::from_str::<PostList>(body)
        .map(PostList::into_posts)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_post(status: u16, body: &str) -> Result<Post, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_response_body(status, body));
    }
    serde_json::from_str::<SinglePost>(body)
        .map(SinglePost::into_post)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(config::BACKEND_URL)
    }
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Absolute URL for an API path on this backend.
    pub fn url(&self, path: &str) -> String {
        config::endpoint(&self.base_url, path)
    }

    /// Fetch every post via `GET /api/v1/blog/bulk`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-success status, or the body is not a post list.
    pub async fn fetch_posts(&self, token: Option<&str>) -> Result<Vec<Post>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = get_text(&self.url(BLOG_LIST_PATH), token).await?;
            parse_posts(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    /// Fetch one post via `GET /api/v1/blog/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-success status, or the body is not a post.
    pub async fn fetch_post(&self, id: &str, token: Option<&str>) -> Result<Post, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = get_text(&self.url(&blog_path(id)), token).await?;
            parse_post(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, token);
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

impl AuthApi for HttpApi {
    async fn authenticate(&self, mode: AuthMode, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::{SigninBody, SignupBody};

            let request = gloo_net::http::Request::post(&self.url(mode.api_path()));
            let request = match mode {
                AuthMode::SignUp => request.json(&SignupBody {
                    name: &credentials.name,
                    email: &credentials.email,
                    password: &credentials.password,
                })?,
                AuthMode::SignIn => request.json(&SigninBody {
                    email: &credentials.email,
                    password: &credentials.password,
                })?,
            };
            let resp = request.send().await?;
            let status = resp.status();
            let body = resp.text().await?;
            parse_auth_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (mode, credentials);
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

/// `GET` returning status + raw body. The token goes in `Authorization` as-is.
#[cfg(feature = "hydrate")]
async fn get_text(url: &str, token: Option<&str>) -> Result<(u16, String), ApiError> {
    let mut request = gloo_net::http::Request::get(url);
    if let Some(token) = token {
        request = request.header("Authorization", token);
    }
    let resp = request.send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    Ok((status, body))
}
