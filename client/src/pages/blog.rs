//! Single post page at `/blog/:id`.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::app_bar::AppBar;
use crate::components::blog_card::avatar_initial;
use crate::components::spinner::Spinner;
use crate::state::blog::BlogState;
use crate::state::blogs::author_label;
use crate::util::auth::install_unauth_redirect;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let blog = RwSignal::new(BlogState::default());
    install_unauth_redirect(use_navigate());

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::HttpApi;
        use crate::session::{BrowserStore, stored_token};

        let id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
        Effect::new(move || {
            let id = id.get();
            blog.update(|s| s.begin(&id));
            let token = stored_token(&BrowserStore);
            leptos::task::spawn_local(async move {
                let result = HttpApi::default().fetch_post(&id, token.as_deref()).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("post {id} failed to load: {e}");
                }
                blog.update(|s| {
                    s.resolve(&id, result);
                });
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
    }

    view! {
        <div class="blog-page">
            <AppBar/>
            <Show
                when=move || !blog.with(|s| s.loading)
                fallback=|| view! { <div class="blog-page__busy"><Spinner/></div> }
            >
                <Show when=move || blog.with(|s| s.error.is_some())>
                    <p class="blog-page__error" role="alert">
                        {move || blog.with(|s| s.error.clone()).unwrap_or_default()}
                    </p>
                </Show>
                {move || {
                    blog.with(|s| {
                        s.post
                            .as_ref()
                            .map(|post| {
                                let author = author_label(post).to_owned();
                                let initial = avatar_initial(&author);
                                let rendered = render_markdown_html(&post.content);
                                view! {
                                    <article class="blog-page__post">
                                        <h1 class="blog-page__title">{post.title.clone()}</h1>
                                        <div class="blog-page__author">
                                            <span class="avatar avatar--large" aria-hidden="true">{initial}</span>
                                            <span>{author}</span>
                                        </div>
                                        <div class="blog-page__content" inner_html=rendered></div>
                                    </article>
                                }
                            })
                    })
                }}
            </Show>
        </div>
    }
}
