//! Public author profile page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::article_card::ArticleCard;
use crate::components::pagination::{Pagination, latched_last_page};
use crate::net::client::ApiClient;
use crate::util::image_url::avatar_url;

const PROFILE_LIMIT: u32 = 10;

/// An author's public profile with their posts, addressed by username.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let username = move || params.read().get("username").unwrap_or_default();

    let page = RwSignal::new(1_u32);
    let last_page = RwSignal::new(1_u32);

    // A different author starts over from the first page. Guarded writes:
    // an unchanged page must not refetch.
    Effect::new(move || {
        let _ = username();
        if page.get_untracked() != 1 {
            page.set(1);
        }
        if last_page.get_untracked() != 1 {
            last_page.set(1);
        }
    });

    let profile = LocalResource::new(move || {
        let username = username();
        let page = page.get();
        async move { api.fetch_profile(&username, page, PROFILE_LIMIT).await }
    });

    Effect::new(move || {
        let Some(result) = profile.get() else {
            return;
        };
        if let Ok(loaded) = result.as_ref() {
            last_page
                .update(|latched| *latched = latched_last_page(*latched, loaded.posts.last_page));
        }
    });

    let on_select = Callback::new(move |next: u32| page.set(next));

    view! {
        <main class="profile">
            <Suspense fallback=move || {
                view! { <p class="profile__state">"Loading..."</p> }
            }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(loaded) => {
                                let avatar = avatar_url(loaded.avatar_url.as_deref());
                                let cards = if loaded.posts.data.is_empty() {
                                    view! { <p class="profile__state">"No posts yet."</p> }
                                        .into_any()
                                } else {
                                    loaded
                                        .posts
                                        .data
                                        .iter()
                                        .map(|article| {
                                            view! { <ArticleCard article=article.clone() /> }
                                        })
                                        .collect_view()
                                        .into_any()
                                };
                                view! {
                                    <div class="profile__card">
                                        <img class="profile__avatar" src=avatar alt=loaded.name.clone() />
                                        <div>
                                            <h1 class="profile__name">{loaded.name.clone()}</h1>
                                            {loaded
                                                .headline
                                                .clone()
                                                .map(|headline| {
                                                    view! { <p class="profile__headline">{headline}</p> }
                                                })}
                                        </div>
                                    </div>
                                    <p class="profile__total">
                                        {format!("{} Post", loaded.posts.total)}
                                    </p>
                                    <div class="profile__posts">{cards}</div>
                                    <Pagination page=page last_page=last_page on_select=on_select />
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! { <p class="profile__state">"Failed to load profile"</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </main>
    }
}
