//! Post editor page, for both new posts and edits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded like the own-profile page. With an `:id` route parameter the
//! post is fetched first and the form opens prefilled; without one the
//! form starts empty.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::components::post_form::PostForm;
use crate::components::write_post_header::WritePostHeader;
use crate::net::client::ApiClient;
use crate::state::session::Session;
#[cfg(feature = "hydrate")]
use crate::util::guard::install_session_guard;
use crate::util::guard::{SessionGate, classify};

/// Create or edit a post.
#[component]
pub fn WritePostPage() -> impl IntoView {
    let session = expect_context::<Session>();
    #[cfg(feature = "hydrate")]
    install_session_guard(session, use_navigate());

    let params = use_params_map();
    let edit_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());

    view! {
        <div class="write-post">
            <Show
                when=move || classify(&session.get()) == SessionGate::Authenticated
                fallback=move || {
                    view! {
                        <p class="write-post__state">
                            {move || match classify(&session.get()) {
                                SessionGate::Unknown => "Loading...",
                                _ => "Redirecting to sign in...",
                            }}
                        </p>
                    }
                }
            >
                <WritePostHeader title=if edit_id().is_some() {
                    "Edit Post"
                } else {
                    "Write Post"
                } />
                <main class="write-post__body">
                    {move || match edit_id() {
                        None => view! { <PostForm /> }.into_any(),
                        Some(id) => view! { <EditPostLoader id=id /> }.into_any(),
                    }}
                </main>
            </Show>
        </div>
    }
}

/// Fetches the post being edited, then mounts the prefilled form.
#[component]
fn EditPostLoader(id: i64) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let article = LocalResource::new(move || async move { api.fetch_post(id).await });

    view! {
        <Suspense fallback=move || {
            view! { <p class="write-post__state">"Loading..."</p> }
        }>
            {move || {
                article
                    .get()
                    .map(|result| match result.as_ref() {
                        Ok(post) => view! { <PostForm article=post.clone() /> }.into_any(),
                        Err(_) => {
                            view! { <p class="write-post__state">"Failed to load article"</p> }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
