//! Search results page driven entirely by the `query` URL parameter.
//!
//! DESIGN
//! ======
//! The page owns no input of its own; the header's debounced search box
//! rewrites the URL and this page reacts to it. An empty or missing
//! query renders a prompt instead of firing a request.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::article_card::ArticleCard;
use crate::components::pagination::{Pagination, latched_last_page};
use crate::net::client::ApiClient;

const SEARCH_LIMIT: u32 = 10;

/// Articles matching the current `?query=` term.
#[component]
pub fn SearchPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query_map = use_query_map();
    let term = move || {
        query_map
            .read()
            .get("query")
            .map(|raw| raw.trim().to_owned())
            .filter(|term| !term.is_empty())
    };

    let page = RwSignal::new(1_u32);
    let last_page = RwSignal::new(1_u32);

    // A new term starts over from the first page. Guarded writes: an
    // unchanged page must not refetch.
    Effect::new(move || {
        let _ = term();
        if page.get_untracked() != 1 {
            page.set(1);
        }
        if last_page.get_untracked() != 1 {
            last_page.set(1);
        }
    });

    let results = LocalResource::new(move || {
        let term = term();
        let page = page.get();
        async move {
            match term {
                Some(term) => Some(api.search_posts(&term, page, SEARCH_LIMIT).await),
                None => None,
            }
        }
    });

    Effect::new(move || {
        let Some(ready) = results.get() else {
            return;
        };
        if let Some(Ok(batch)) = ready.as_ref() {
            last_page.update(|latched| *latched = latched_last_page(*latched, batch.last_page));
        }
    });

    let on_select = Callback::new(move |next: u32| page.set(next));

    view! {
        <main class="search">
            {move || match term() {
                None => {
                    view! {
                        <div class="search__empty">
                            <h1 class="search__heading">"Search articles"</h1>
                            <p class="search__hint">"Enter keywords to find articles"</p>
                        </div>
                    }
                        .into_any()
                }
                Some(term_value) => {
                    view! {
                        <div class="search__body">
                            <h1 class="search__heading">{format!("Result for “{term_value}”")}</h1>
                            <Suspense fallback=move || {
                                view! { <p class="search__state">"Searching articles..."</p> }
                            }>
                                {move || {
                                    results
                                        .get()
                                        .and_then(|ready| {
                                            ready
                                                .as_ref()
                                                .map(|result| match result {
                                                    Ok(batch) => {
                                                        if batch.data.is_empty() {
                                                            view! {
                                                                <div class="search__none">
                                                                    <h2>"No results found"</h2>
                                                                    <p>"Try using different keywords"</p>
                                                                    <a class="search__home" href="/">
                                                                        "Back to Home"
                                                                    </a>
                                                                </div>
                                                            }
                                                                .into_any()
                                                        } else {
                                                            let cards = batch
                                                                .data
                                                                .iter()
                                                                .map(|article| {
                                                                    view! { <ArticleCard article=article.clone() /> }
                                                                })
                                                                .collect_view();
                                                            view! {
                                                                <div class="search__results">{cards}</div>
                                                                <Pagination
                                                                    page=page
                                                                    last_page=last_page
                                                                    on_select=on_select
                                                                />
                                                            }
                                                                .into_any()
                                                        }
                                                    }
                                                    Err(_) => {
                                                        view! {
                                                            <p class="search__state">"Failed to search articles"</p>
                                                        }
                                                            .into_any()
                                                    }
                                                })
                                        })
                                }}
                            </Suspense>
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
