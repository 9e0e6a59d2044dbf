//! Blog listing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Issues one listing request on mount and shows
//! skeleton rows until it settles. A failed fetch leaves an empty list with a
//! one-line error.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_bar::AppBar;
use crate::components::blog_card::BlogCard;
use crate::components::blog_skeleton::BlogSkeleton;
use crate::state::blogs::{BlogsState, author_label};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn BlogsPage() -> impl IntoView {
    let blogs = RwSignal::new(BlogsState::default());
    install_unauth_redirect(use_navigate());

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::HttpApi;
        use crate::session::{BrowserStore, stored_token};

        let token = stored_token(&BrowserStore);
        leptos::task::spawn_local(async move {
            let result = HttpApi::default().fetch_posts(token.as_deref()).await;
            if let Err(e) = &result {
                leptos::logging::warn!("blog listing failed: {e}");
            }
            blogs.update(|s| s.resolve(result));
        });
    }

    view! {
        <div class="blogs-page">
            <AppBar/>
            <main class="blogs-page__list">
                <Show when=move || blogs.with(|s| s.error.is_some())>
                    <p class="blogs-page__error" role="alert">
                        {move || blogs.with(|s| s.error.clone()).unwrap_or_default()}
                    </p>
                </Show>
                {move || {
                    let rows = blogs.with(BlogsState::skeleton_rows);
                    (0..rows).map(|_| view! { <BlogSkeleton/> }).collect::<Vec<_>>()
                }}
                {move || {
                    blogs.with(|s| {
                        s.visible_items()
                            .iter()
                            .map(|post| {
                                view! {
                                    <BlogCard
                                        id=post.id.clone()
                                        author_name=author_label(post).to_owned()
                                        title=post.title.clone()
                                        content=post.content.clone()
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </main>
        </div>
    }
}
