//! Chip-style tag editor used by the post form.
//!
//! Enter adds the trimmed draft as a chip, Backspace on an empty draft
//! removes the last chip, and each chip carries its own remove button.
//! Duplicates are dropped silently.

use leptos::prelude::*;

/// Trimmed tag text, or `None` when the draft is effectively empty.
pub(crate) fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Appends the normalized tag unless it is blank or already present.
/// Returns whether the list changed.
pub(crate) fn add_tag(tags: &mut Vec<String>, raw: &str) -> bool {
    let Some(tag) = normalize_tag(raw) else {
        return false;
    };
    if tags.contains(&tag) {
        return false;
    }
    tags.push(tag);
    true
}

pub(crate) fn remove_tag(tags: &mut Vec<String>, tag: &str) {
    tags.retain(|existing| existing != tag);
}

/// Editable list of tags backed by the caller's signal.
#[component]
pub fn TagInput(tags: RwSignal<Vec<String>>) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                let raw = draft.get_untracked();
                tags.update(|tags| {
                    add_tag(tags, &raw);
                });
                draft.set(String::new());
            }
            "Backspace" => {
                if draft.get_untracked().is_empty() {
                    tags.update(|tags| {
                        tags.pop();
                    });
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="tag-input">
            <div class="tag-input__chips">
                {move || {
                    tags.get()
                        .into_iter()
                        .map(|tag| {
                            let label = tag.clone();
                            view! {
                                <span class="tag-input__chip">
                                    {label}
                                    <button
                                        type="button"
                                        class="tag-input__remove"
                                        aria-label="Remove tag"
                                        on:click=move |_| {
                                            tags.update(|tags| remove_tag(tags, &tag));
                                        }
                                    >
                                        "✕"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <input
                class="tag-input__field"
                type="text"
                placeholder="Enter your tags"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}

#[cfg(test)]
#[path = "tag_input_test.rs"]
mod tag_input_test;
