//! Signup page.

use leptos::prelude::*;

use crate::auth::AuthMode;
use crate::components::auth_form::AuthForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::SignUp/> }
}
