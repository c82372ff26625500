//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::config::APP_NAME;
use crate::net::client::ApiClient;
use crate::pages::{
    detail::DetailPage, home::HomePage, my_profile::MyProfilePage, profile::ProfilePage,
    search::SearchPage, sign_in::SignInPage, sign_up::SignUpPage, write_post::WritePostPage,
};
use crate::state::session::Session;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// The editor and auth screens bring their own minimal chrome.
fn uses_site_chrome(path: &str) -> bool {
    !(path.starts_with("/write-post") || path == "/sign-in" || path == "/sign-up")
}

/// Root application component.
///
/// Provides the session and API client contexts, rehydrates the session
/// from storage, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(Arc::new(BrowserStorage));
    session.restore();
    let api = ApiClient::new(session);

    provide_context(session);
    provide_context(api);

    // Refresh the cached profile once per page load. A token the server
    // no longer accepts gets dropped here instead of lingering until the
    // first failing call.
    #[cfg(feature = "hydrate")]
    {
        if session.token_untracked().is_some() {
            let generation = session.generation();
            leptos::task::spawn_local(async move {
                match api.fetch_me().await {
                    Ok(user) => {
                        session.set_user_if_current(generation, user);
                    }
                    Err(err) if err.is_unauthorized() => {
                        if session.generation() == generation {
                            session.logout();
                        }
                    }
                    Err(err) => {
                        leptos::logging::warn!("profile refresh failed: {err}");
                    }
                }
            });
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/inkpost.css" />
        <Title text=APP_NAME />

        <Router>
            <SiteHeader />
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage />
                <Route path=StaticSegment("search") view=SearchPage />
                <Route path=(StaticSegment("detail"), ParamSegment("id")) view=DetailPage />
                <Route path=(StaticSegment("profile"), StaticSegment("me")) view=MyProfilePage />
                <Route path=(StaticSegment("profile"), ParamSegment("username")) view=ProfilePage />
                <Route path=StaticSegment("write-post") view=WritePostPage />
                <Route path=(StaticSegment("write-post"), ParamSegment("id")) view=WritePostPage />
                <Route path=StaticSegment("sign-in") view=SignInPage />
                <Route path=StaticSegment("sign-up") view=SignUpPage />
            </Routes>
            <SiteFooter />
        </Router>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    let pathname = use_location().pathname;
    view! {
        <Show when=move || uses_site_chrome(&pathname.get())>
            <Header />
        </Show>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let pathname = use_location().pathname;
    view! {
        <Show when=move || uses_site_chrome(&pathname.get())>
            <Footer />
        </Show>
    }
}
