//! Sign-in page.
//!
//! DESIGN
//! ======
//! Login is two requests: the credential exchange stores the token, then
//! the profile fetch fills in the user. If the second step fails the
//! token is rolled back so the session never sticks half-authenticated,
//! and the user is asked to retry.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::client::ApiClient;
#[cfg(feature = "hydrate")]
use crate::state::session::Session;
use crate::util::validate::{validate_email, validate_password};

/// Email/password login form.
#[component]
pub fn SignInPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<Session>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "hydrate")]
    let nav = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        email_error.set(validate_email(&email_value).err());
        password_error.set(validate_password(&password_value).err());
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            form_error.set(None);
            let navigate = nav.clone();
            leptos::task::spawn_local(async move {
                match api.login(email_value.trim(), &password_value).await {
                    Ok(response) => {
                        session.set_token(response.token);
                        let generation = session.generation();
                        match api.fetch_me().await {
                            Ok(user) => {
                                session.set_user_if_current(generation, user);
                                busy.set(false);
                                navigate("/", NavigateOptions::default());
                            }
                            Err(_) => {
                                session.logout();
                                busy.set(false);
                                form_error.set(Some(
                                    "Failed to load your profile. Please try again.".to_owned(),
                                ));
                            }
                        }
                    }
                    Err(err) if err.status() == Some(401) => {
                        busy.set(false);
                        form_error.set(Some("Invalid Email/Password".to_owned()));
                    }
                    Err(_) => {
                        busy.set(false);
                        form_error.set(Some("Failed to sign in. Please try again.".to_owned()));
                    }
                }
            });
        }
    };

    view! {
        <main class="auth">
            <form class="auth__card" on:submit=on_submit>
                <h1 class="auth__heading">"Sign In"</h1>

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

                {move || form_error.get().map(|message| view! { <p class="auth__error">{message}</p> })}

                <button class="auth__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>

                <p class="auth__footer">
                    "Don't have an account? " <a class="auth__link" href="/sign-up">"Register"</a>
                </p>
            </form>
        </main>
    }
}
