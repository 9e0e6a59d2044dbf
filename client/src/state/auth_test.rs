use super::*;
use crate::auth::flow::{DelayedRedirect, outcome_for_error};
use crate::net::error::ApiError;
use crate::session::Session;

fn filled(mode: AuthMode, password: &str) -> AuthFormState {
    let mut state = AuthFormState::new(mode);
    state.credentials = Credentials {
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        password: password.to_owned(),
    };
    state
}

// =============================================================
// try_begin
// =============================================================

#[test]
fn new_form_is_idle() {
    let state = AuthFormState::new(AuthMode::SignIn);
    assert!(!state.loading);
    assert!(state.field_error.is_none());
}

#[test]
fn invalid_password_blocks_submit_without_loading() {
    let mut state = filled(AuthMode::SignUp, "abc");
    assert_eq!(state.try_begin(), None);
    assert!(!state.loading);
    assert_eq!(
        state.field_error.as_deref(),
        Some("Password must be at least 6 characters long")
    );
}

#[test]
fn valid_password_starts_request_and_clears_previous_error() {
    let mut state = filled(AuthMode::SignUp, "Abcde1!");
    state.field_error = Some("Incorrect password".to_owned());
    let creds = state.try_begin().unwrap();
    assert!(state.loading);
    assert!(state.field_error.is_none());
    assert_eq!(creds.name, "Ann");
}

#[test]
fn signin_drops_name_from_submitted_credentials() {
    let mut state = filled(AuthMode::SignIn, "Abcde1!");
    let creds = state.try_begin().unwrap();
    assert!(creds.name.is_empty());
    assert_eq!(creds.email, "ann@example.com");
}

#[test]
fn second_submit_while_loading_is_ignored() {
    let mut state = filled(AuthMode::SignIn, "Abcde1!");
    assert!(state.try_begin().is_some());
    assert_eq!(state.try_begin(), None);
    assert!(state.loading);
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_clears_loading_for_every_outcome() {
    let outcomes = [
        SubmitOutcome::SignedIn {
            session: Session {
                token: "t".to_owned(),
                email: "e".to_owned(),
                display_name: "n".to_owned(),
            },
            redirect: "/blogs",
        },
        outcome_for_error(ApiError::IncorrectPassword),
        outcome_for_error(ApiError::UserNotFound),
        outcome_for_error(ApiError::Transport("offline".to_owned())),
        SubmitOutcome::Unhandled("whatever".to_owned()),
    ];
    for outcome in &outcomes {
        let mut state = filled(AuthMode::SignIn, "Abcde1!");
        assert!(state.try_begin().is_some());
        state.settle(outcome);
        assert!(!state.loading, "{outcome:?}");
    }
}

#[test]
fn settle_shows_field_error() {
    let mut state = filled(AuthMode::SignIn, "Abcde1!");
    state.try_begin();
    state.settle(&SubmitOutcome::FieldError {
        message: "Email not registered".to_owned(),
        redirect: Some(DelayedRedirect {
            path: "/signup",
            delay: std::time::Duration::from_secs(2),
        }),
    });
    assert_eq!(state.field_error.as_deref(), Some("Email not registered"));
}

#[test]
fn settle_unhandled_shows_nothing() {
    let mut state = filled(AuthMode::SignIn, "Abcde1!");
    state.try_begin();
    state.settle(&SubmitOutcome::Unhandled("server error (500): boom".to_owned()));
    assert!(state.field_error.is_none());
}
