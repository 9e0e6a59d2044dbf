//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Blog routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::SIGNIN_ROUTE;
use crate::session::{BrowserStore, SessionStore, stored_token};

/// Whether a route guard should send the visitor to signin.
pub fn should_redirect_unauth<S: SessionStore + ?Sized>(store: &S) -> bool {
    stored_token(store).is_none()
}

/// Redirect to `/signin` once mounted in the browser if no token is stored.
pub fn install_unauth_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&BrowserStore) {
            navigate(SIGNIN_ROUTE, NavigateOptions::default());
        }
    });
}
