//! Slim header bar for the post editor pages.

use leptos::prelude::*;

/// Back button plus the page title, replacing the full site header while
/// writing.
#[component]
pub fn WritePostHeader(title: &'static str) -> impl IntoView {
    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
                let _ = history.back();
            }
        }
    };

    view! {
        <header class="write-post-header">
            <button class="write-post-header__back" on:click=on_back aria-label="Go back">
                "←"
            </button>
            <h1 class="write-post-header__title">{title}</h1>
        </header>
    }
}
