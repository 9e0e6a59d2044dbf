//! Top bar for the blog pages: brand link, current author, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{BLOGS_ROUTE, SIGNIN_ROUTE};
use crate::components::blog_card::avatar_initial;
use crate::session::{BrowserStore, Session, SessionStore};

#[component]
pub fn AppBar() -> impl IntoView {
    let navigate = use_navigate();
    // Filled after mount so SSR and hydration render the same markup.
    let display_name = RwSignal::new(String::new());
    Effect::new(move || {
        if let Some(session) = Session::load(&BrowserStore) {
            display_name.set(session.display_name);
        }
    });

    let on_logout = move |_| {
        if let Err(e) = BrowserStore.clear() {
            leptos::logging::warn!("logout: {e}");
        }
        navigate(SIGNIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="app-bar">
            <a class="app-bar__brand" href=BLOGS_ROUTE>
                "Blogweb"
            </a>
            <span class="app-bar__spacer"></span>
            <span class="avatar avatar--large" title=move || display_name.get()>
                {move || avatar_initial(&display_name.get())}
            </span>
            <button class="btn app-bar__logout" type="button" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
