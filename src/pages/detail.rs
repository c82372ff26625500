//! Article detail page.
//!
//! DESIGN
//! ======
//! The list payload only carries a slim author, so after loading the
//! post the page fetches the full author record for the headline and
//! avatar. A failed author lookup degrades to the slim fields instead of
//! failing the page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::another_post::AnotherPost;
use crate::components::comments_section::CommentsSection;
use crate::net::client::{ApiClient, ApiError};
use crate::net::types::{Article, UserProfile};
use crate::util::date::format_date;
use crate::util::image_url::{avatar_url, normalize_image_url};
use crate::util::markdown::render_markdown;

/// Full article view with comments and a follow-up suggestion.
#[component]
pub fn DetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let post_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());

    let article = LocalResource::new(move || {
        let id = post_id();
        async move {
            let Some(id) = id else {
                return Err(ApiError::Decode("invalid post id".to_owned()));
            };
            let post = api.fetch_post(id).await?;
            let author = api.fetch_user(post.author.id).await.ok();
            Ok::<(Article, Option<UserProfile>), ApiError>((post, author))
        }
    });

    view! {
        <main class="detail">
            <Suspense fallback=move || {
                view! { <p class="detail__state">"Loading..."</p> }
            }>
                {move || {
                    article
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok((post, author)) => {
                                article_body(post.clone(), author.clone()).into_any()
                            }
                            Err(_) => {
                                view! { <p class="detail__state">"Failed to load article"</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </main>
    }
}

fn article_body(post: Article, author: Option<UserProfile>) -> impl IntoView {
    let author_name =
        author.as_ref().map_or_else(|| post.author.name.clone(), |author| author.name.clone());
    let author_headline = author.as_ref().and_then(|author| author.headline.clone());
    let author_avatar = avatar_url(
        author
            .as_ref()
            .and_then(|author| author.avatar_url.as_deref())
            .or(post.author.avatar_url.as_deref()),
    );
    let cover = post
        .image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(normalize_image_url);
    let content_html = render_markdown(&post.content);
    let published = format_date(&post.created_at);
    let post_id = post.id;

    view! {
        <article class="detail__article">
            <h1 class="detail__title">{post.title.clone()}</h1>
            <div class="detail__tags">
                {post
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="detail__tag">{tag.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="detail__author">
                <img class="detail__avatar" src=author_avatar alt=author_name.clone() />
                <div class="detail__author-meta">
                    <p class="detail__author-name">{author_name}</p>
                    {author_headline.map(|headline| view! { <p class="detail__author-headline">{headline}</p> })}
                </div>
                <span class="detail__date">{format!("• {published}")}</span>
            </div>
            <div class="detail__counts">
                <span>{format!("👍 {}", post.likes)}</span>
                <span>{format!("💬 {}", post.comments)}</span>
            </div>
            {cover
                .map(|src| {
                    view! { <img class="detail__cover" src=src alt=post.title.clone() /> }
                })}
            <div class="detail__content" inner_html=content_html></div>
        </article>
        <CommentsSection post_id=post_id />
        <AnotherPost current_id=post_id />
    }
}
