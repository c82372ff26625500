//! Change-password tab on the own-profile page.
//!
//! ERROR HANDLING
//! ==============
//! Local checks run first (a token must exist, the confirmation must
//! match). Server failures map to fixed messages by status code, since
//! the backend reports mismatches as 400 and stale credentials as 401.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::client::ApiClient;
#[cfg(feature = "hydrate")]
use crate::state::session::Session;

pub(crate) fn update_password_error(status: Option<u16>) -> &'static str {
    match status {
        Some(400) => "New password and confirmation do not match.",
        Some(401) => "Current password is incorrect or session expired.",
        Some(404) => "User not found.",
        _ => "Failed to update password. Please try again.",
    }
}

/// Three-field password change form with inline feedback.
#[component]
pub fn ChangePasswordForm() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<Session>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();

    let current = RwSignal::new(String::new());
    let fresh = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        notice.set(None);
        if fresh.get_untracked() != confirm.get_untracked() {
            error.set(Some("Password do not match!".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if session.token_untracked().is_none() {
                error.set(Some("Session expired. Please sign in again.".to_owned()));
                return;
            }
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let outcome = api
                    .update_password(
                        &current.get_untracked(),
                        &fresh.get_untracked(),
                        &confirm.get_untracked(),
                    )
                    .await;
                busy.set(false);
                match outcome {
                    Ok(()) => {
                        notice.set(Some("Password updated successfully"));
                        current.set(String::new());
                        fresh.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(err) => {
                        error.set(Some(update_password_error(err.status()).to_owned()));
                    }
                }
            });
        }
    };

    view! {
        <form class="change-password" on:submit=on_submit>
            <label class="change-password__label">"Current Password"</label>
            <input
                class="change-password__input"
                type="password"
                placeholder="Enter current password"
                prop:value=move || current.get()
                on:input=move |ev| current.set(event_target_value(&ev))
            />

            <label class="change-password__label">"New Password"</label>
            <input
                class="change-password__input"
                type="password"
                placeholder="Enter new password"
                prop:value=move || fresh.get()
                on:input=move |ev| fresh.set(event_target_value(&ev))
            />

            <label class="change-password__label">"Confirm New Password"</label>
            <input
                class="change-password__input"
                type="password"
                placeholder="Enter confirm new password"
                prop:value=move || confirm.get()
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />

            {move || error.get().map(|message| view! { <p class="change-password__error">{message}</p> })}
            {move || {
                notice.get().map(|message| view! { <p class="change-password__notice">{message}</p> })
            }}

            <button class="change-password__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Updating..." } else { "Update Password" }}
            </button>
        </form>
    }
}

#[cfg(test)]
#[path = "change_password_form_test.rs"]
mod change_password_form_test;
