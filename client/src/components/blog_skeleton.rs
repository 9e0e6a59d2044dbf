//! Static placeholder row drawn while the listing loads.

use leptos::prelude::*;

#[component]
pub fn BlogSkeleton() -> impl IntoView {
    view! {
        <div class="blog-skeleton" role="status" aria-hidden="true">
            <div class="blog-skeleton__meta">
                <span class="blog-skeleton__avatar"></span>
                <span class="blog-skeleton__line blog-skeleton__line--short"></span>
            </div>
            <span class="blog-skeleton__line blog-skeleton__line--title"></span>
            <span class="blog-skeleton__line"></span>
            <span class="blog-skeleton__line"></span>
        </div>
    }
}
