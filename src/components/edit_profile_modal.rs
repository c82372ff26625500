//! Dialog for editing the signed-in user's profile.
//!
//! Sends name, headline and an optional new avatar as multipart form
//! data. The updated profile from the response is written back into the
//! session, but only if the login that started the save is still the
//! active one.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::client::ApiClient;
use crate::net::types::User;
#[cfg(feature = "hydrate")]
use crate::state::session::Session;
use crate::util::image_url::avatar_url;
use crate::util::validate::validate_name;

/// Edit form over the current profile. `on_saved` fires after the
/// session has been updated so the caller can refetch its own data.
#[component]
pub fn EditProfileModal(user: User, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<Session>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();

    let name = RwSignal::new(user.name.clone());
    let headline = RwSignal::new(user.headline.clone().unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let file_ref = NodeRef::<leptos::html::Input>::new();
    let current_avatar = avatar_url(user.avatar_url.as_deref());
    let avatar_preview = RwSignal::new(None::<String>);
    let shown_avatar = move || avatar_preview.get().unwrap_or_else(|| current_avatar.clone());

    let on_avatar_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let selected = file_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = selected {
                if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                    avatar_preview.set(Some(url));
                }
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked();
        if let Err(message) = validate_name(&name_value) {
            error.set(Some(message.to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let selected = file_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_str("name", name_value.trim());
            let _ = form.append_with_str("headline", headline.get_untracked().trim());
            if let Some(file) = selected {
                let _ = form.append_with_blob("avatar", &file);
            }

            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let generation = session.generation();
                let outcome = api.update_profile(form).await;
                busy.set(false);
                match outcome {
                    Ok(updated) => {
                        session.set_user_if_current(generation, updated);
                        on_saved.run(());
                        on_close.run(());
                    }
                    Err(_) => error.set(Some("Failed to update profile".to_owned())),
                }
            });
        }
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
                class="dialog dialog--edit-profile"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h3>"Edit Profile"</h3>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) aria-label="Close">
                        "✕"
                    </button>
                </div>
                <form class="edit-profile" on:submit=on_submit>
                    <label class="edit-profile__avatar-picker">
                        <img class="edit-profile__avatar" src=shown_avatar alt="Avatar preview" />
                        <span class="edit-profile__avatar-hint">"Change photo"</span>
                        <input
                            class="edit-profile__file"
                            type="file"
                            accept="image/*"
                            node_ref=file_ref
                            on:change=on_avatar_change
                        />
                    </label>

                    <label class="edit-profile__label">"Name"</label>
                    <input
                        class="edit-profile__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />

                    <label class="edit-profile__label">"Profile Headline"</label>
                    <input
                        class="edit-profile__input"
                        type="text"
                        prop:value=move || headline.get()
                        on:input=move |ev| headline.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|message| view! { <p class="edit-profile__error">{message}</p> })}

                    <button class="edit-profile__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Update Profile" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
