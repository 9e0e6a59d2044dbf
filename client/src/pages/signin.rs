//! Signin page.

use leptos::prelude::*;

use crate::auth::AuthMode;
use crate::components::auth_form::AuthForm;

#[component]
pub fn SigninPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::SignIn/> }
}
