//! Busy indicator shown in place of a submit button.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="spinner__ring" aria-hidden="true"></span>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
