//! Global navigation bar with the debounced search box.
//!
//! DESIGN
//! ======
//! The search input never submits a form. Keystrokes are debounced and
//! then pushed into the URL (`/search?query=...`) with history replace,
//! so the search page owns no input state of its own. Clearing the box
//! while on the search page navigates back home. Navigating to a search
//! URL directly seeds the box from the query string.
//!
//! The right-hand side switches between login/register links and the
//! signed-in controls (write-post link plus an avatar menu) based on
//! whether a token is present, not on whether the profile has loaded,
//! so the chrome is correct immediately after rehydration.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_query_map};
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::config::APP_NAME;
use crate::state::session::Session;
use crate::util::image_url::avatar_url;

#[cfg(feature = "hydrate")]
const SEARCH_DEBOUNCE_MS: u64 = 400;

/// Trimmed search term, or `None` when the box is effectively empty.
pub(crate) fn normalized_search_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Site-wide header: brand link, search box and account controls.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let pathname = use_location().pathname;
    let query = use_query_map();

    let keyword = RwSignal::new(String::new());
    let debounce_tick = RwSignal::new(0_u64);
    let menu_open = RwSignal::new(false);

    // Seed the box from the URL so deep links and back/forward keep the
    // input in sync. Typing alone never re-runs this.
    Effect::new(move || {
        if pathname.get() == "/search" {
            keyword.set(query.read().get("query").unwrap_or_default());
        } else {
            keyword.set(String::new());
        }
    });

    #[cfg(feature = "hydrate")]
    let nav_search = use_navigate();
    let on_search_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        keyword.set(raw.clone());
        let tick = debounce_tick.get_untracked() + 1;
        debounce_tick.set(tick);
        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_search.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS))
                    .await;
                if debounce_tick.get_untracked() != tick {
                    return;
                }
                match normalized_search_query(&raw) {
                    Some(term) => {
                        let encoded = String::from(js_sys::encode_uri_component(&term));
                        navigate(
                            &format!("/search?query={encoded}"),
                            NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    None => {
                        if pathname.get_untracked() == "/search" {
                            navigate("/", NavigateOptions { replace: true, ..Default::default() });
                        }
                    }
                }
            });
        }
    };

    #[cfg(feature = "hydrate")]
    let nav_logout = use_navigate();
    let on_logout = Callback::new(move |()| {
        menu_open.set(false);
        session.logout();
        #[cfg(feature = "hydrate")]
        nav_logout("/", NavigateOptions::default());
    });

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                {APP_NAME}
            </a>
            <input
                class="site-header__search"
                type="text"
                placeholder="Search"
                prop:value=move || keyword.get()
                on:input=on_search_input
            />
            {move || {
                let state = session.get();
                if state.token.is_some() {
                    let avatar = avatar_url(
                        state.user.as_ref().and_then(|user| user.avatar_url.as_deref()),
                    );
                    let name = state.user.as_ref().map(|user| user.name.clone()).unwrap_or_default();
                    view! {
                        <div class="site-header__account">
                            <a class="site-header__write" href="/write-post">
                                "Write Post"
                            </a>
                            <button
                                class="site-header__avatar-button"
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                <img class="site-header__avatar" src=avatar alt=name.clone() />
                                <span class="site-header__name">{name.clone()}</span>
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="site-header__menu">
                                    <a
                                        class="site-header__menu-item"
                                        href="/profile/me"
                                        on:click=move |_| menu_open.set(false)
                                    >
                                        "Profile"
                                    </a>
                                    <button
                                        class="site-header__menu-item"
                                        on:click=move |_| on_logout.run(())
                                    >
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="site-header__auth">
                            <a class="site-header__login" href="/sign-in">
                                "Login"
                            </a>
                            <a class="site-header__register" href="/sign-up">
                                "Register"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </header>
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;
