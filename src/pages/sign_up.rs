//! Registration page.
//!
//! The API wants a distinct username, but the upstream design never asks
//! for one; it is derived from the display name by lowercasing and
//! stripping whitespace. Registration does not sign the user in, it
//! forwards to the sign-in page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::client::ApiClient;
use crate::util::validate::{
    derive_username, validate_confirm_password, validate_email, validate_name, validate_password,
};

/// New-account form.
#[component]
pub fn SignUpPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "hydrate")]
    let nav = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        name_error.set(validate_name(&name_value).err());
        email_error.set(validate_email(&email_value).err());
        password_error.set(validate_password(&password_value).err());
        confirm_error.set(
            validate_confirm_password(&password_value, &confirm_value).err(),
        );
        if name_error.get_untracked().is_some()
            || email_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
            || confirm_error.get_untracked().is_some()
        {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            form_error.set(None);
            let navigate = nav.clone();
            leptos::task::spawn_local(async move {
                let username = derive_username(&name_value);
                let outcome = api
                    .register(name_value.trim(), &username, email_value.trim(), &password_value)
                    .await;
                busy.set(false);
                match outcome {
                    Ok(_) => navigate("/sign-in", NavigateOptions::default()),
                    Err(err) if err.status() == Some(400) => {
                        form_error.set(Some("Name/Email has already used".to_owned()));
                    }
                    Err(_) => {
                        form_error.set(Some("Failed to register. Please try again.".to_owned()));
                    }
                }
            });
        }
    };

    view! {
        <main class="auth">
            <form class="auth__card" on:submit=on_submit>
                <h1 class="auth__heading">"Sign Up"</h1>

                <label class="auth__label">"Name"</label>
                <input
                    class="auth__input"
                    type="text"
                    placeholder="Enter your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                {move || name_error.get().map(|message| view! { <p class="auth__error">{message}</p> })}

                <label class="auth__label">"Email"</label>
                <input
                    class="auth__input"
                    type="email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || email_error.get().map(|message| view! { <p class="auth__error">{message}</p> })}

                <label class="auth__label">"Password"</label>
                <input
                    class="auth__input"
                    type="password"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || {
                    password_error.get().map(|message| view! { <p class="auth__error">{message}</p> })
                }}

                <label class="auth__label">"Confirm Password"</label>
                <input
                    class="auth__input"
                    type="password"
                    placeholder="Enter your confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                {move || {
                    confirm_error.get().map(|message| view! { <p class="auth__error">{message}</p> })
                }}

                {move || form_error.get().map(|message| view! { <p class="auth__error">{message}</p> })}

                <button class="auth__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>

                <p class="auth__footer">
                    "Already have an account? " <a class="auth__link" href="/sign-in">"Log in"</a>
                </p>
            </form>
        </main>
    }
}
