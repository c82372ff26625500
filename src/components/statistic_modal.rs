//! Per-post statistics dialog on the own-posts list.

use leptos::prelude::*;

use crate::net::types::Article;

/// Like and comment counts for one post.
#[component]
pub fn StatisticModal(article: Article, on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--statistic"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h3>"Statistic"</h3>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) aria-label="Close">
                        "✕"
                    </button>
                </div>
                <p class="dialog__subtitle">{article.title.clone()}</p>
                <div class="dialog__stat-row">
                    <span class="dialog__stat-label">"👍 Likes"</span>
                    <span class="dialog__stat-value">{article.likes}</span>
                </div>
                <div class="dialog__stat-row">
                    <span class="dialog__stat-label">"💬 Comments"</span>
                    <span class="dialog__stat-value">{article.comments}</span>
                </div>
            </div>
        </div>
    }
}
