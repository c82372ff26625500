//! Own profile page: posts management and password change.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page sits behind the session guard; visitors without a token are
//! sent to the sign-in page. The profile card reads straight from the
//! session, so a profile edit is visible immediately after the save
//! writes the fresh user back.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::article_card::ArticleCard;
use crate::components::change_password_form::ChangePasswordForm;
use crate::components::delete_post_modal::DeletePostModal;
use crate::components::edit_profile_modal::EditProfileModal;
use crate::components::pagination::{Pagination, latched_last_page};
use crate::components::statistic_modal::StatisticModal;
use crate::net::client::{ApiClient, ApiError};
use crate::net::types::{Article, Paginated};
use crate::state::session::Session;
#[cfg(feature = "hydrate")]
use crate::util::guard::install_session_guard;
use crate::util::guard::{SessionGate, classify};
use crate::util::image_url::avatar_url;

const MY_POSTS_LIMIT: u32 = 10;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Posts,
    Password,
}

/// Signed-in profile with the "Your Post" and "Change Password" tabs.
#[component]
pub fn MyProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "hydrate")]
    install_session_guard(session, use_navigate());

    let tab = RwSignal::new(ProfileTab::Posts);
    let editing = RwSignal::new(false);
    let statistic_for = RwSignal::new(None::<Article>);
    let delete_for = RwSignal::new(None::<i64>);

    let page = RwSignal::new(1_u32);
    let last_page = RwSignal::new(1_u32);
    let posts = LocalResource::new(move || {
        let page = page.get();
        async move { api.my_posts(page, MY_POSTS_LIMIT).await }
    });

    Effect::new(move || {
        let Some(result) = posts.get() else {
            return;
        };
        if let Ok(batch) = result.as_ref() {
            last_page.update(|latched| *latched = latched_last_page(*latched, batch.last_page));
        }
    });

    let on_select = Callback::new(move |next: u32| page.set(next));
    let close_statistic = Callback::new(move |()| statistic_for.set(None));
    let close_delete = Callback::new(move |()| delete_for.set(None));
    let close_edit = Callback::new(move |()| editing.set(false));
    let on_deleted = Callback::new(move |()| posts.refetch());
    let on_profile_saved = Callback::new(move |()| posts.refetch());

    view! {
        <main class="me">
            <Show
                when=move || classify(&session.get()) == SessionGate::Authenticated
                fallback=move || {
                    view! {
                        <p class="me__state">
                            {move || match classify(&session.get()) {
                                SessionGate::Unknown => "Loading...",
                                _ => "Redirecting to sign in...",
                            }}
                        </p>
                    }
                }
            >
                {move || {
                    session
                        .get()
                        .user
                        .map(|user| {
                            let avatar = avatar_url(user.avatar_url.as_deref());
                            view! {
                                <div class="me__card">
                                    <img class="me__avatar" src=avatar alt=user.name.clone() />
                                    <div class="me__identity">
                                        <h1 class="me__name">{user.name.clone()}</h1>
                                        {user
                                            .headline
                                            .clone()
                                            .map(|headline| {
                                                view! { <p class="me__headline">{headline}</p> }
                                            })}
                                    </div>
                                    <button class="me__edit" on:click=move |_| editing.set(true)>
                                        "Edit Profile"
                                    </button>
                                </div>
                            }
                        })
                }}

                <div class="me__tabs">
                    <button
                        class="me__tab"
                        class:me__tab--active=move || tab.get() == ProfileTab::Posts
                        on:click=move |_| tab.set(ProfileTab::Posts)
                    >
                        "Your Post"
                    </button>
                    <button
                        class="me__tab"
                        class:me__tab--active=move || tab.get() == ProfileTab::Password
                        on:click=move |_| tab.set(ProfileTab::Password)
                    >
                        "Change Password"
                    </button>
                </div>

                {move || match tab.get() {
                    ProfileTab::Posts => {
                        my_posts_section(posts, page, last_page, on_select, statistic_for, delete_for)
                            .into_any()
                    }
                    ProfileTab::Password => view! { <ChangePasswordForm /> }.into_any(),
                }}

                {move || {
                    statistic_for
                        .get()
                        .map(|article| {
                            view! { <StatisticModal article=article on_close=close_statistic /> }
                        })
                }}
                {move || {
                    delete_for
                        .get()
                        .map(|post_id| {
                            view! {
                                <DeletePostModal
                                    post_id=post_id
                                    on_close=close_delete
                                    on_deleted=on_deleted
                                />
                            }
                        })
                }}
                <Show when=move || editing.get()>
                    {move || {
                        session
                            .get()
                            .user
                            .map(|user| {
                                view! {
                                    <EditProfileModal
                                        user=user
                                        on_close=close_edit
                                        on_saved=on_profile_saved
                                    />
                                }
                            })
                    }}
                </Show>
            </Show>
        </main>
    }
}

fn my_posts_section(
    posts: LocalResource<Result<Paginated<Article>, ApiError>>,
    page: RwSignal<u32>,
    last_page: RwSignal<u32>,
    on_select: Callback<u32>,
    statistic_for: RwSignal<Option<Article>>,
    delete_for: RwSignal<Option<i64>>,
) -> impl IntoView {
    view! {
        <section class="me__posts">
            <Suspense fallback=move || {
                view! { <p class="me__state">"Loading..."</p> }
            }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(batch) => {
                                if batch.data.is_empty() {
                                    view! {
                                        <div class="me__empty">
                                            <h2>"Your writing journey starts here"</h2>
                                            <p>
                                                "No posts yet, but every great writer starts with the first one."
                                            </p>
                                            <a class="me__write" href="/write-post">
                                                "Write Post"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    let total = batch.total;
                                    let cards = batch
                                        .data
                                        .iter()
                                        .map(|article| {
                                            let stat_article = article.clone();
                                            let post_id = article.id;
                                            let edit_href = format!("/write-post/{post_id}");
                                            view! {
                                                <ArticleCard article=article.clone()>
                                                    <button
                                                        class="me__action"
                                                        on:click=move |_| {
                                                            statistic_for.set(Some(stat_article.clone()))
                                                        }
                                                    >
                                                        "Statistic"
                                                    </button>
                                                    <a class="me__action" href=edit_href>
                                                        "Edit"
                                                    </a>
                                                    <button
                                                        class="me__action me__action--danger"
                                                        on:click=move |_| delete_for.set(Some(post_id))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </ArticleCard>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <p class="me__total">{format!("{total} Post")}</p>
                                        <div class="me__list">{cards}</div>
                                        <Pagination page=page last_page=last_page on_select=on_select />
                                    }
                                        .into_any()
                                }
                            }
                            Err(_) => {
                                view! { <p class="me__state">"Failed to load your posts"</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
