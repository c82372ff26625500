//! "Another Post" teaser under the article detail page.
//!
//! Picks one random article from the recommended feed, excluding the one
//! currently open. Renders nothing when no other article exists.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::net::client::ApiClient;
use crate::net::types::Article;

const POOL_PAGE: u32 = 1;
const POOL_LIMIT: u32 = 5;

/// Uniform pick over the candidates left after dropping `current_id`.
/// `roll` is expected in `[0, 1)`.
pub(crate) fn pick_other(posts: &[Article], current_id: i64, roll: f64) -> Option<Article> {
    let candidates: Vec<&Article> = posts.iter().filter(|post| post.id != current_id).collect();
    if candidates.is_empty() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let index = (roll.clamp(0.0, 1.0) * candidates.len() as f64) as usize;
    Some(candidates[index.min(candidates.len() - 1)].clone())
}

#[cfg(feature = "hydrate")]
fn roll() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(feature = "hydrate"))]
fn roll() -> f64 {
    0.0
}

/// One random recommended article other than the one being read.
#[component]
pub fn AnotherPost(current_id: i64) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let pool =
        LocalResource::new(move || async move { api.recommended_posts(POOL_PAGE, POOL_LIMIT).await });

    view! {
        <Suspense fallback=|| ()>
            {move || {
                pool.get()
                    .map(|result| match result.as_ref() {
                        Ok(batch) => {
                            match pick_other(&batch.data, current_id, roll()) {
                                Some(article) => {
                                    view! {
                                        <section class="another-post">
                                            <h2 class="another-post__heading">"Another Post"</h2>
                                            <ArticleCard article=article />
                                        </section>
                                    }
                                        .into_any()
                                }
                                None => ().into_any(),
                            }
                        }
                        Err(_) => ().into_any(),
                    })
            }}
        </Suspense>
    }
}

#[cfg(test)]
#[path = "another_post_test.rs"]
mod another_post_test;
