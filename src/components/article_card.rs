//! Reusable card for article list items.
//!
//! DESIGN
//! ======
//! Keeps article presentation consistent across the home feed, search
//! results, profile pages and the own-posts list. Callers that need
//! per-card controls (edit, delete, statistics) pass them as children
//! and the card renders them in a trailing action row.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::util::date::format_date;
use crate::util::image_url::{avatar_url, normalize_image_url};

/// An article summary linking to the detail page and the author profile.
#[component]
pub fn ArticleCard(
    article: Article,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let detail_href = format!("/detail/{}", article.id);
    let cover = article
        .image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(normalize_image_url);
    let author_name = article.author.name.clone();
    let author_avatar = avatar_url(article.author.avatar_url.as_deref());
    let author_href = article
        .author
        .username
        .as_ref()
        .map(|username| format!("/profile/{username}"));
    let published = format_date(&article.created_at);

    view! {
        <article class="article-card">
            {cover
                .map(|src| {
                    view! {
                        <a class="article-card__cover" href=detail_href.clone()>
                            <img src=src alt=article.title.clone() loading="lazy" />
                        </a>
                    }
                })}
            <div class="article-card__body">
                <a class="article-card__title" href=detail_href>
                    {article.title.clone()}
                </a>
                <div class="article-card__tags">
                    {article
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="article-card__tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
                <p class="article-card__excerpt">{article.content.clone()}</p>
                <div class="article-card__meta">
                    {match author_href {
                        Some(href) => {
                            view! {
                                <a class="article-card__author" href=href>
                                    <img class="article-card__avatar" src=author_avatar alt=author_name.clone() />
                                    <span>{author_name}</span>
                                </a>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <span class="article-card__author">
                                    <img class="article-card__avatar" src=author_avatar alt=author_name.clone() />
                                    <span>{author_name}</span>
                                </span>
                            }
                                .into_any()
                        }
                    }}
                    <span class="article-card__date">{format!("• {published}")}</span>
                </div>
                <div class="article-card__counts">
                    <span class="article-card__likes">{format!("👍 {}", article.likes)}</span>
                    <span class="article-card__comments">{format!("💬 {}", article.comments)}</span>
                </div>
                {children.map(|actions| view! { <div class="article-card__actions">{actions()}</div> })}
            </div>
        </article>
    }
}
