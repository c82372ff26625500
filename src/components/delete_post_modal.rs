//! Confirmation dialog for deleting a post.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::client::ApiClient;

/// Asks before deleting. `on_deleted` fires after the server confirms so
/// the caller can refetch its list.
#[component]
pub fn DeletePostModal(post_id: i64, on_close: Callback<()>, on_deleted: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_confirm = move |_| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let outcome = api.delete_post(post_id).await;
                busy.set(false);
                match outcome {
                    Ok(()) => {
                        on_deleted.run(());
                        on_close.run(());
                    }
                    Err(_) => error.set(Some("Failed to delete post".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = post_id;
    };

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
                class="dialog dialog--delete-post"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h3>"Delete"</h3>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) aria-label="Close">
                        "✕"
                    </button>
                </div>
                <p class="dialog__question">"Are you sure to delete?"</p>
                {move || error.get().map(|message| view! { <p class="dialog__error">{message}</p> })}
                <div class="dialog__actions">
                    <button class="dialog__cancel" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="dialog__confirm dialog__confirm--danger"
                        on:click=on_confirm
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
