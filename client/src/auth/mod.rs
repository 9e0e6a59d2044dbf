//! Session initiation: password policy and the signup/signin request flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `password` is the local gate run before any network call, `flow` turns an
//! API result into a persisted session or an inline field error. The form
//! component in `components::auth_form` wires both to signals.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod flow;
pub mod password;

use crate::app::{SIGNIN_ROUTE, SIGNUP_ROUTE};

/// Which auth form is shown: create an account or sign into an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    SignIn,
}

impl AuthMode {
    /// REST path for this mode's request.
    pub fn api_path(self) -> &'static str {
        match self {
            Self::SignUp => "/api/v1/user/signup",
            Self::SignIn => "/api/v1/user/signin",
        }
    }

    /// Only signup collects a display name.
    pub fn collects_name(self) -> bool {
        matches!(self, Self::SignUp)
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::SignUp => "Create an account",
            Self::SignIn => "Login to your account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignUp => "Sign up",
            Self::SignIn => "Sign in",
        }
    }

    /// Prompt shown next to the link to the other mode.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::SignUp => "Already have an account?",
            Self::SignIn => "Don't have an account?",
        }
    }

    /// The other mode, which the header link points at.
    pub fn other(self) -> Self {
        match self {
            Self::SignUp => Self::SignIn,
            Self::SignIn => Self::SignUp,
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Self::SignUp => SIGNUP_ROUTE,
            Self::SignIn => SIGNIN_ROUTE,
        }
    }
}
