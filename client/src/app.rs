//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{blog::BlogPage, blogs::BlogsPage, signin::SigninPage, signup::SignupPage};

pub const SIGNUP_ROUTE: &str = "/signup";
pub const SIGNIN_ROUTE: &str = "/signin";
pub const BLOGS_ROUTE: &str = "/blogs";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Pages hold their own state; the session lives in `localStorage` and is
/// read through `session::BrowserStore` where needed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/blogweb.css"/>
        <Title text="Blogweb"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=SIGNIN_ROUTE/> }/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("blogs") view=BlogsPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogPage/>
            </Routes>
        </Router>
    }
}
