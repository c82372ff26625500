//! Create/edit form for a post.
//!
//! DESIGN
//! ======
//! One form serves both flows: without an article it creates, with one
//! it edits and prefills. The payload goes up as multipart form data so
//! the cover image rides along with the text fields. On success the
//! browser is sent to the article's detail page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::content_editor::ContentEditor;
use crate::components::tag_input::TagInput;
#[cfg(feature = "hydrate")]
use crate::net::client::ApiClient;
use crate::net::types::Article;
use crate::util::image_url::normalize_image_url;

pub(crate) fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() { Err("Title is required") } else { Ok(()) }
}

pub(crate) fn validate_content(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() { Err("Content is required") } else { Ok(()) }
}

pub(crate) fn validate_tags(tags: &[String]) -> Result<(), &'static str> {
    if tags.is_empty() { Err("At least one tag is required") } else { Ok(()) }
}

/// A cover is mandatory on create; edits may keep the stored one.
pub(crate) fn validate_cover(has_new_file: bool, has_existing: bool) -> Result<(), &'static str> {
    if has_new_file || has_existing { Ok(()) } else { Err("Cover image is required") }
}

/// Tags travel as one comma-separated form field.
pub(crate) fn joined_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Post editor form. Pass `article` to edit an existing post.
#[component]
pub fn PostForm(#[prop(optional)] article: Option<Article>) -> impl IntoView {
    let title = RwSignal::new(article.as_ref().map(|post| post.title.clone()).unwrap_or_default());
    let content =
        RwSignal::new(article.as_ref().map(|post| post.content.clone()).unwrap_or_default());
    let tags = RwSignal::new(article.as_ref().map(|post| post.tags.clone()).unwrap_or_default());
    let existing_cover = article
        .as_ref()
        .and_then(|post| post.image_url.as_deref())
        .filter(|url| !url.is_empty())
        .map(normalize_image_url);

    #[cfg(feature = "hydrate")]
    let edit_id = article.as_ref().map(|post| post.id);
    #[cfg(feature = "hydrate")]
    let has_existing_cover = existing_cover.is_some();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();

    let title_error = RwSignal::new(None::<&'static str>);
    let content_error = RwSignal::new(None::<&'static str>);
    let tags_error = RwSignal::new(None::<&'static str>);
    let cover_error = RwSignal::new(None::<&'static str>);
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let file_ref = NodeRef::<leptos::html::Input>::new();
    let cover_preview = RwSignal::new(None::<String>);
    let shown_cover = move || cover_preview.get().or_else(|| existing_cover.clone());

    let on_cover_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let selected = file_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = selected {
                if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                    cover_preview.set(Some(url));
                }
                cover_error.set(None);
            }
        }
    };

    #[cfg(feature = "hydrate")]
    let nav = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let selected = file_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let title_value = title.get_untracked();
            let content_value = content.get_untracked();
            let tags_value = tags.get_untracked();

            title_error.set(validate_title(&title_value).err());
            content_error.set(validate_content(&content_value).err());
            tags_error.set(validate_tags(&tags_value).err());
            cover_error.set(validate_cover(selected.is_some(), has_existing_cover).err());
            if title_error.get_untracked().is_some()
                || content_error.get_untracked().is_some()
                || tags_error.get_untracked().is_some()
                || cover_error.get_untracked().is_some()
            {
                return;
            }

            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_str("title", title_value.trim());
            let _ = form.append_with_str("content", &content_value);
            let _ = form.append_with_str("tags", &joined_tags(&tags_value));
            if let Some(file) = selected {
                let _ = form.append_with_blob("image", &file);
            }

            busy.set(true);
            submit_error.set(None);
            let navigate = nav.clone();
            leptos::task::spawn_local(async move {
                let outcome = match edit_id {
                    Some(id) => api.update_post(id, form).await,
                    None => api.create_post(form).await,
                };
                busy.set(false);
                match outcome {
                    Ok(saved) => {
                        navigate(&format!("/detail/{}", saved.id), NavigateOptions::default());
                    }
                    Err(err) if err.is_unauthorized() => {
                        navigate("/sign-in", NavigateOptions::default());
                    }
                    Err(_) => {
                        submit_error.set(Some("Failed to save post. Please try again.".to_owned()));
                    }
                }
            });
        }
    };

    view! {
        <form class="post-form" on:submit=on_submit>
            <label class="post-form__label">"Title"</label>
            <input
                class="post-form__input"
                type="text"
                placeholder="Enter your title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            {move || title_error.get().map(|message| view! { <p class="post-form__error">{message}</p> })}

            <label class="post-form__label">"Content"</label>
            <ContentEditor value=content />
            {move || {
                content_error.get().map(|message| view! { <p class="post-form__error">{message}</p> })
            }}

            <label class="post-form__label">"Cover Image"</label>
            <div class="post-form__cover">
                {move || {
                    shown_cover()
                        .map(|src| {
                            view! { <img class="post-form__cover-preview" src=src alt="Cover preview" /> }
                        })
                }}
                <input
                    class="post-form__file"
                    type="file"
                    accept="image/*"
                    node_ref=file_ref
                    on:change=on_cover_change
                />
            </div>
            {move || cover_error.get().map(|message| view! { <p class="post-form__error">{message}</p> })}

            <label class="post-form__label">"Tags"</label>
            <TagInput tags=tags />
            {move || tags_error.get().map(|message| view! { <p class="post-form__error">{message}</p> })}

            {move || {
                submit_error
                    .get()
                    .map(|message| {
                        view! { <p class="post-form__error post-form__error--submit">{message}</p> }
                    })
            }}

            <button class="post-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Finish" }}
            </button>
        </form>
    }
}

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;
