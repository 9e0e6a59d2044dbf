//! Signup / signin form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates the password locally, runs [`request_session`] against the
//! backend, then either navigates to the listing or shows the mapped error
//! under the password field. The submit button is swapped for a spinner while
//! the request is in flight.
//!
//! The delayed redirect after "Email not registered" belongs to this
//! component: teardown flips `alive` and the pending redirect is dropped.

use leptos::prelude::*;

use crate::auth::AuthMode;
use crate::components::labelled_input::LabelledInput;
use crate::components::spinner::Spinner;
use crate::state::auth::AuthFormState;

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let form = RwSignal::new(AuthFormState::new(mode));

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(AuthFormState::try_begin).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::auth::flow::{SubmitOutcome, request_session, run_delayed_redirect};
            use crate::net::api::HttpApi;
            use crate::session::BrowserStore;
            use leptos_router::NavigateOptions;

            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = request_session(mode, &credentials, &HttpApi::default(), &BrowserStore).await;
                form.update(|f| f.settle(&outcome));

                match outcome {
                    SubmitOutcome::SignedIn { redirect, .. } => {
                        navigate(redirect, NavigateOptions::default());
                    }
                    SubmitOutcome::FieldError {
                        redirect: Some(redirect), ..
                    } => {
                        run_delayed_redirect(redirect, &alive, gloo_timers::future::sleep, |path| {
                            navigate(path, NavigateOptions::default());
                        })
                        .await;
                    }
                    SubmitOutcome::FieldError { redirect: None, .. } => {}
                    SubmitOutcome::Unhandled(reason) => {
                        leptos::logging::warn!("auth request not handled: {reason}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (mode, credentials);
        }
    };

    let name = Signal::derive(move || form.with(|f| f.credentials.name.clone()));
    let email = Signal::derive(move || form.with(|f| f.credentials.email.clone()));
    let password = Signal::derive(move || form.with(|f| f.credentials.password.clone()));
    let on_name = Callback::new(move |v: String| form.update(|f| f.credentials.name = v));
    let on_email = Callback::new(move |v: String| form.update(|f| f.credentials.email = v));
    let on_password = Callback::new(move |v: String| form.update(|f| f.credentials.password = v));

    let field_error = move || form.with(|f| f.field_error.clone()).unwrap_or_default();
    let loading = move || form.with(|f| f.loading);
    let other = mode.other();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__title">{mode.heading()}</h1>
                    <p class="auth-card__subtitle">
                        {mode.switch_prompt()}
                        <a class="auth-card__switch" href=other.route()>
                            {other.submit_label()}
                        </a>
                    </p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.collects_name()>
                        <LabelledInput label="Name" placeholder="John Doe" value=name on_input=on_name/>
                    </Show>
                    <LabelledInput
                        label="Email"
                        placeholder="johndoe@gmail.com"
                        input_type="email"
                        value=email
                        on_input=on_email
                    />
                    <LabelledInput
                        label="Password"
                        placeholder="Abc@123"
                        input_type="password"
                        value=password
                        on_input=on_password
                    />
                    <Show when=move || !field_error().is_empty()>
                        <span class="auth-form__error" role="alert">
                            {field_error}
                        </span>
                    </Show>
                    <Show
                        when=move || !loading()
                        fallback=|| view! { <div class="auth-form__busy"><Spinner/></div> }
                    >
                        <button class="btn btn--primary auth-form__submit" type="submit">
                            {mode.submit_label()}
                        </button>
                    </Show>
                </form>
            </div>
        </div>
    }
}
