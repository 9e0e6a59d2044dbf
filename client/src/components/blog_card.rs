//! Listing row for one post.
//!
//! DESIGN
//! ======
//! Cards receive the already-resolved author label so the `Anonymous`
//! fallback lives in one place (`state::blogs::author_label`).

#[cfg(test)]
#[path = "blog_card_test.rs"]
mod blog_card_test;

use leptos::prelude::*;

use crate::util::markdown::{excerpt, read_minutes};

/// Characters of content shown on a card.
const EXCERPT_CHARS: usize = 100;

/// First letter of a name, uppercased, for avatar circles.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn read_time_label(minutes: usize) -> String {
    if minutes == 1 {
        "1 minute read".to_owned()
    } else {
        format!("{minutes} minutes read")
    }
}

/// A clickable card linking to `/blog/{id}`.
#[component]
pub fn BlogCard(id: String, author_name: String, title: String, content: String) -> impl IntoView {
    let href = format!("/blog/{id}");
    let initial = avatar_initial(&author_name);
    let preview = excerpt(&content, EXCERPT_CHARS);
    let read_time = read_time_label(read_minutes(&content));

    view! {
        <a class="blog-card" href=href>
            <div class="blog-card__meta">
                <span class="avatar" aria-hidden="true">{initial}</span>
                <span class="blog-card__author">{author_name}</span>
            </div>
            <h2 class="blog-card__title">{title}</h2>
            <p class="blog-card__excerpt">{preview}</p>
            <span class="blog-card__read-time">{read_time}</span>
        </a>
    }
}
