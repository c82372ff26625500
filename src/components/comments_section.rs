//! Comment list and composer under the article detail page.
//!
//! DESIGN
//! ======
//! The section previews the first three comments and opens a dialog with
//! the full list once more exist. Both the inline section and the dialog
//! share one composer state, so a draft survives opening the dialog.
//!
//! ERROR HANDLING
//! ==============
//! Posting or deleting without a token, or getting 401 back, redirects to
//! the sign-in page. Other failures surface as inline messages and leave
//! the draft untouched.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::client::ApiClient;
use crate::net::types::{Comment, User};
use crate::state::session::Session;
use crate::util::date::format_date;
use crate::util::image_url::avatar_url;

const COMMENT_PREVIEW_LEN: usize = 3;

pub(crate) fn validate_comment(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() {
        Err("Comment can not empty")
    } else {
        Ok(())
    }
}

/// Only the comment's author may delete it.
pub(crate) fn is_comment_owner(comment: &Comment, user: Option<&User>) -> bool {
    user.is_some_and(|user| user.id == comment.author.id)
}

pub(crate) fn preview_slice(comments: &[Comment]) -> &[Comment] {
    &comments[..comments.len().min(COMMENT_PREVIEW_LEN)]
}

/// Comments for one article: composer, three-comment preview and the
/// see-all dialog.
#[component]
pub fn CommentsSection(post_id: i64) -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let comments = LocalResource::new(move || async move { api.fetch_comments(post_id).await });

    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let show_all = RwSignal::new(false);

    let count = move || {
        comments
            .get()
            .map(|result| result.as_ref().map(Vec::len).unwrap_or(0))
            .unwrap_or(0)
    };

    #[cfg(feature = "hydrate")]
    let nav_submit = use_navigate();
    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let content = draft.get_untracked();
        if let Err(message) = validate_comment(&content) {
            error.set(Some(message.to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_submit.clone();
            if session.token_untracked().is_none() {
                navigate("/sign-in", NavigateOptions::default());
                return;
            }
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let outcome = api.post_comment(post_id, content.trim()).await;
                busy.set(false);
                match outcome {
                    Ok(_) => {
                        draft.set(String::new());
                        comments.refetch();
                    }
                    Err(err) if err.is_unauthorized() => {
                        navigate("/sign-in", NavigateOptions::default());
                    }
                    Err(_) => error.set(Some("Failed to post comment".to_owned())),
                }
            });
        }
    });

    #[cfg(feature = "hydrate")]
    let nav_delete = use_navigate();
    let on_delete = Callback::new(move |comment_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_delete.clone();
            if session.token_untracked().is_none() {
                navigate("/sign-in", NavigateOptions::default());
                return;
            }
            leptos::task::spawn_local(async move {
                match api.delete_comment(comment_id).await {
                    Ok(()) => comments.refetch(),
                    Err(err) if err.is_unauthorized() => {
                        navigate("/sign-in", NavigateOptions::default());
                    }
                    Err(_) => error.set(Some("Failed to delete comment".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = comment_id;
    });

    let on_backdrop = move |_| show_all.set(false);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            show_all.set(false);
        }
    };

    view! {
        <section class="comments">
            <h2 class="comments__heading">{move || format!("Comments({})", count())}</h2>
            {comment_form(draft, error, busy, on_submit)}
            <Suspense fallback=move || {
                view! { <p class="comments__state">"Loading comments..."</p> }
            }>
                {move || {
                    comments
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(list) => {
                                let user = session.get().user;
                                let total = list.len();
                                let items = preview_slice(list)
                                    .iter()
                                    .map(|comment| {
                                        comment_item(
                                            comment.clone(),
                                            is_comment_owner(comment, user.as_ref()),
                                            on_delete,
                                        )
                                    })
                                    .collect_view();
                                view! {
                                    <div class="comments__list">{items}</div>
                                    <Show when={move || total > COMMENT_PREVIEW_LEN}>
                                        <button
                                            class="comments__see-all"
                                            on:click=move |_| show_all.set(true)
                                        >
                                            "See All Comments"
                                        </button>
                                    </Show>
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! { <p class="comments__state">"Failed to load comments"</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_all.get()>
                <div class="dialog-backdrop" on:click=on_backdrop>
                    <div
                        class="dialog dialog--comments"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                        tabindex="0"
                    >
                        <div class="dialog__header">
                            <h3>{move || format!("Comments({})", count())}</h3>
                            <button
                                class="dialog__close"
                                on:click=move |_| show_all.set(false)
                                aria-label="Close"
                            >
                                "✕"
                            </button>
                        </div>
                        {comment_form(draft, error, busy, on_submit)}
                        <div class="dialog__comments-list">
                            {move || {
                                comments
                                    .get()
                                    .map(|result| match result.as_ref() {
                                        Ok(list) => {
                                            let user = session.get().user;
                                            list.iter()
                                                .map(|comment| {
                                                    comment_item(
                                                        comment.clone(),
                                                        is_comment_owner(comment, user.as_ref()),
                                                        on_delete,
                                                    )
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                        Err(_) => {
                                            view! {
                                                <p class="comments__state">"Failed to load comments"</p>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}

fn comment_form(
    draft: RwSignal<String>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="comments__form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="comments__form-label">"Give your Comments"</label>
            <textarea
                class="comments__form-input"
                placeholder="Enter your comment"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|message| view! { <p class="comments__form-error">{message}</p> })}
            <button class="comments__form-send" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Sending..." } else { "Send" }}
            </button>
        </form>
    }
}

fn comment_item(comment: Comment, owned: bool, on_delete: Callback<i64>) -> impl IntoView {
    let avatar = avatar_url(comment.author.avatar_url.as_deref());
    let published = format_date(&comment.created_at);
    let comment_id = comment.id;

    view! {
        <div class="comment">
            <div class="comment__author">
                <img class="comment__avatar" src=avatar alt=comment.author.name.clone() />
                <div>
                    <p class="comment__name">{comment.author.name.clone()}</p>
                    <p class="comment__date">{published}</p>
                </div>
                <Show when=move || owned>
                    <button
                        class="comment__delete"
                        on:click=move |_| on_delete.run(comment_id)
                        aria-label="Delete comment"
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
            <p class="comment__content">{comment.content.clone()}</p>
        </div>
    }
}

#[cfg(test)]
#[path = "comments_section_test.rs"]
mod comments_section_test;
