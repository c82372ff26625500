//! Paginated feed of recommended articles for the home page.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::components::pagination::{Pagination, latched_last_page};
use crate::net::client::ApiClient;

const PAGE_LIMIT: u32 = 5;

/// Recommended articles with pagination controls underneath.
#[component]
pub fn RecommendedList() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let page = RwSignal::new(1_u32);
    let last_page = RwSignal::new(1_u32);
    let posts = LocalResource::new(move || {
        let page = page.get();
        async move { api.recommended_posts(page, PAGE_LIMIT).await }
    });

    // Keep the controls stable while the next batch is in flight.
    Effect::new(move || {
        if let Some(result) = posts.get() {
            if let Ok(batch) = result.as_ref() {
                last_page
                    .update(|latched| *latched = latched_last_page(*latched, batch.last_page));
            }
        }
    });

    let on_select = Callback::new(move |next: u32| page.set(next));

    view! {
        <section class="recommended">
            <Suspense fallback=move || {
                view! { <p class="recommended__state">"Loading..."</p> }
            }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(batch) => {
                                if batch.data.is_empty() {
                                    view! { <p class="recommended__state">"No articles yet."</p> }
                                        .into_any()
                                } else {
                                    batch
                                        .data
                                        .iter()
                                        .map(|article| {
                                            view! { <ArticleCard article=article.clone() /> }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                            Err(_) => {
                                view! { <p class="recommended__state">"Failed to load articles"</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <Pagination page=page last_page=last_page on_select=on_select />
        </section>
    }
}
