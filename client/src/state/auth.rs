//! Auth form state: field values, the in-flight flag and the inline error.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in a `RwSignal` by `components::auth_form`. `loading` is the
//! single-request guard: it is raised by [`AuthFormState::try_begin`] and
//! lowered by [`AuthFormState::settle`] whatever the outcome.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::auth::AuthMode;
use crate::auth::flow::SubmitOutcome;
use crate::auth::password::validate_password;
use crate::net::types::Credentials;

/// State behind one signup or signin form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub credentials: Credentials,
    pub loading: bool,
    /// Message shown under the password field.
    pub field_error: Option<String>,
}

impl AuthFormState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            credentials: Credentials::default(),
            loading: false,
            field_error: None,
        }
    }

    /// Validate locally and, if the password passes, mark a request in flight.
    ///
    /// Returns the credentials to submit, or `None` when a request is already
    /// in flight or validation failed (the reason is left in `field_error`).
    pub fn try_begin(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        if let Err(reason) = validate_password(&self.credentials.password) {
            self.field_error = Some(reason.to_string());
            return None;
        }
        self.field_error = None;
        self.loading = true;

        let mut credentials = self.credentials.clone();
        if !self.mode.collects_name() {
            credentials.name.clear();
        }
        Some(credentials)
    }

    /// Record a finished request.
    pub fn settle(&mut self, outcome: &SubmitOutcome) {
        self.loading = false;
        self.field_error = outcome.field_error().map(str::to_owned);
    }
}
