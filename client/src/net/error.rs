//! Typed API failures.
//!
//! The backend reports failures as `{ "error": "<message>" }`. The handful of
//! messages the auth form reacts to are mapped to dedicated variants here, once,
//! so callers match on kinds instead of comparing strings.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Errors returned by the REST helpers in [`crate::net::api`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Signup with an email that is already registered.
    #[error("Email already exists")]
    EmailTaken,
    /// Signin with a wrong password.
    #[error("Incorrect password")]
    IncorrectPassword,
    /// Signin with an unknown email.
    #[error("User not found")]
    UserNotFound,
    /// Any other non-success response.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// A success response whose body did not match the expected schema.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a server-provided `error` string to an error kind.
    pub fn from_server_message(status: u16, message: &str) -> Self {
        match message {
            "Email already exists" => Self::EmailTaken,
            "Incorrect password" => Self::IncorrectPassword,
            "User not found" => Self::UserNotFound,
            other => Self::Server {
                status,
                message: other.to_owned(),
            },
        }
    }

    /// Build an error from a non-success response body.
    ///
    /// Bodies without a JSON `error` field keep the raw text (or a status line
    /// when empty) so the failure can still be logged.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<super::types::ErrorBody>(body) {
            Ok(parsed) => Self::from_server_message(status, &parsed.error),
            Err(_) if body.trim().is_empty() => Self::Server {
                status,
                message: format!("request failed: {status}"),
            },
            Err(_) => Self::Server {
                status,
                message: body.trim().to_owned(),
            },
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Transport(value.to_string())
    }
}
