//! Sidebar list of the most liked articles.

use leptos::prelude::*;

use crate::net::client::ApiClient;

const MOST_LIKED_LIMIT: u32 = 3;

/// Compact ranking of the top liked articles, shown next to the home feed.
#[component]
pub fn MostLikedList() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let posts =
        LocalResource::new(move || async move { api.most_liked_posts(MOST_LIKED_LIMIT).await });

    view! {
        <aside class="most-liked">
            <h2 class="most-liked__heading">"Most Liked"</h2>
            <Suspense fallback=move || {
                view! { <p class="most-liked__state">"Loading..."</p> }
            }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(batch) => {
                                batch
                                    .data
                                    .iter()
                                    .map(|article| {
                                        let href = format!("/detail/{}", article.id);
                                        view! {
                                            <div class="most-liked__item">
                                                <a class="most-liked__title" href=href>
                                                    {article.title.clone()}
                                                </a>
                                                <p class="most-liked__excerpt">{article.content.clone()}</p>
                                                <div class="most-liked__counts">
                                                    <span>{format!("👍 {}", article.likes)}</span>
                                                    <span>{format!("💬 {}", article.comments)}</span>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                            Err(_) => {
                                view! { <p class="most-liked__state">"Failed to load articles"</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </aside>
    }
}
