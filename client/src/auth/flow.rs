//! Signup/signin request flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs after the password has passed [`super::password::validate_password`].
//! The API result becomes either a persisted [`Session`] plus a redirect to the
//! listing, or an inline password-field message. Unknown server messages and
//! transport failures are logged only.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::AuthMode;
use crate::app::{BLOGS_ROUTE, SIGNUP_ROUTE};
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Credentials};
use crate::session::{Session, SessionStore};

/// Delay before an unknown email is sent to the signup page.
pub const UNKNOWN_EMAIL_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Inline message for [`ApiError::UserNotFound`].
pub const UNKNOWN_EMAIL_MESSAGE: &str = "Email not registered";

/// Backend seam for the auth request, implemented by
/// [`crate::net::api::HttpApi`] and by scripted fakes in tests.
pub trait AuthApi {
    fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
}

/// Navigation scheduled after a delay, owned and cancelled by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayedRedirect {
    pub path: &'static str,
    pub delay: Duration,
}

/// Wait out `redirect.delay`, then navigate unless the owner went away.
///
/// `alive` is cleared by the owning component on teardown. Returns whether
/// navigation happened.
pub async fn run_delayed_redirect<Sl, Fut, N>(redirect: DelayedRedirect, alive: &AtomicBool, sleep: Sl, navigate: N) -> bool
where
    Sl: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
    N: FnOnce(&'static str),
{
    sleep(redirect.delay).await;
    if !alive.load(Ordering::Relaxed) {
        return false;
    }
    navigate(redirect.path);
    true
}

/// Result of one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session stored; navigate to `redirect` immediately.
    SignedIn { session: Session, redirect: &'static str },
    /// Show `message` under the password field, optionally followed by a
    /// delayed redirect.
    FieldError {
        message: String,
        redirect: Option<DelayedRedirect>,
    },
    /// Nothing shown to the user; the reason is for the console.
    Unhandled(String),
}

impl SubmitOutcome {
    pub fn field_error(&self) -> Option<&str> {
        match self {
            Self::FieldError { message, .. } => Some(message.as_str()),
            Self::SignedIn { .. } | Self::Unhandled(_) => None,
        }
    }
}

/// Map an API failure to what the form shows.
pub fn outcome_for_error(error: ApiError) -> SubmitOutcome {
    match error {
        ApiError::EmailTaken | ApiError::IncorrectPassword => SubmitOutcome::FieldError {
            message: error.to_string(),
            redirect: None,
        },
        ApiError::UserNotFound => SubmitOutcome::FieldError {
            message: UNKNOWN_EMAIL_MESSAGE.to_owned(),
            redirect: Some(DelayedRedirect {
                path: SIGNUP_ROUTE,
                delay: UNKNOWN_EMAIL_REDIRECT_DELAY,
            }),
        },
        ApiError::Server { .. } | ApiError::Transport(_) | ApiError::Decode(_) => {
            SubmitOutcome::Unhandled(error.to_string())
        }
    }
}

/// Send the auth request and persist the session on success.
pub async fn request_session<A, S>(mode: AuthMode, credentials: &Credentials, api: &A, store: &S) -> SubmitOutcome
where
    A: AuthApi,
    S: SessionStore + ?Sized,
{
    let response = match api.authenticate(mode, credentials).await {
        Ok(response) => response,
        Err(error) => return outcome_for_error(error),
    };

    let session = Session::from_response(mode, credentials, response);
    match session.persist(store) {
        Ok(()) => SubmitOutcome::SignedIn {
            session,
            redirect: BLOGS_ROUTE,
        },
        Err(e) => {
            if let Err(clear_err) = store.clear() {
                leptos::logging::warn!("session cleanup failed: {clear_err}");
            }
            SubmitOutcome::Unhandled(format!("session not stored: {e}"))
        }
    }
}
