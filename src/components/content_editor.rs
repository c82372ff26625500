//! Markdown editor with a styling toolbar and live preview.
//!
//! DESIGN
//! ======
//! The editor stays a plain textarea over markdown source. Toolbar
//! buttons rewrite the source around the current selection instead of
//! driving a rich-text DOM, which keeps the transforms pure and
//! testable. The browser reports selections in UTF-16 code units, so
//! they are mapped to byte offsets before any slicing.

use leptos::prelude::*;

use crate::util::markdown::render_markdown;

/// Styling transforms offered by the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StyleCommand {
    Heading,
    Bold,
    Italic,
    BulletList,
}

/// Maps a UTF-16 selection offset to the byte index of the nearest char
/// boundary at or after it.
pub(crate) fn utf16_to_byte_index(text: &str, index: u32) -> usize {
    #[allow(clippy::cast_possible_truncation)]
    let target = index as usize;
    let mut seen = 0_usize;
    for (byte_idx, ch) in text.char_indices() {
        if seen >= target {
            return byte_idx;
        }
        seen += ch.len_utf16();
    }
    text.len()
}

/// Rewrites `text` around the byte range `start..end`, which must lie on
/// char boundaries. Heading and bullet commands toggle, the inline
/// markers always wrap.
pub(crate) fn apply_style(text: &str, start: usize, end: usize, command: StyleCommand) -> String {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start = start.min(text.len());
    let end = end.min(text.len());
    match command {
        StyleCommand::Bold => wrap(text, start, end, "**"),
        StyleCommand::Italic => wrap(text, start, end, "_"),
        StyleCommand::Heading => toggle_heading(text, start),
        StyleCommand::BulletList => toggle_bullets(text, start, end),
    }
}

fn wrap(text: &str, start: usize, end: usize, marker: &str) -> String {
    format!("{}{marker}{}{marker}{}", &text[..start], &text[start..end], &text[end..])
}

fn toggle_heading(text: &str, position: usize) -> String {
    let line_start = text[..position].rfind('\n').map_or(0, |idx| idx + 1);
    if text[line_start..].starts_with("# ") {
        format!("{}{}", &text[..line_start], &text[line_start + 2..])
    } else {
        format!("{}# {}", &text[..line_start], &text[line_start..])
    }
}

fn toggle_bullets(text: &str, start: usize, end: usize) -> String {
    let region_start = text[..start].rfind('\n').map_or(0, |idx| idx + 1);
    let region_end = text[end..].find('\n').map_or(text.len(), |idx| end + idx);
    let region = &text[region_start..region_end];
    if region.is_empty() {
        return format!("{}- {}", &text[..region_start], &text[region_end..]);
    }
    let all_bulleted = region.lines().all(|line| line.starts_with("- "));
    let rewritten = region
        .lines()
        .map(|line| {
            if all_bulleted {
                line.strip_prefix("- ").unwrap_or(line).to_owned()
            } else if line.starts_with("- ") {
                line.to_owned()
            } else {
                format!("- {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}{rewritten}{}", &text[..region_start], &text[region_end..])
}

/// Markdown source editor bound to the caller's content signal.
#[component]
pub fn ContentEditor(value: RwSignal<String>) -> impl IntoView {
    let preview = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let run_command = move |command: StyleCommand| {
        #[cfg(feature = "hydrate")]
        {
            let Some(textarea) = input_ref.get_untracked() else {
                return;
            };
            let start = textarea.selection_start().ok().flatten().unwrap_or(0);
            let end = textarea.selection_end().ok().flatten().unwrap_or(start);
            let text = value.get_untracked();
            let start = utf16_to_byte_index(&text, start);
            let end = utf16_to_byte_index(&text, end);
            value.set(apply_style(&text, start, end, command));
            let _ = textarea.focus();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = command;
    };

    view! {
        <div class="content-editor">
            <div class="content-editor__toolbar">
                <button
                    type="button"
                    class="content-editor__tool"
                    on:click=move |_| run_command(StyleCommand::Heading)
                >
                    "H1"
                </button>
                <button
                    type="button"
                    class="content-editor__tool"
                    on:click=move |_| run_command(StyleCommand::Bold)
                >
                    "B"
                </button>
                <button
                    type="button"
                    class="content-editor__tool"
                    on:click=move |_| run_command(StyleCommand::Italic)
                >
                    "I"
                </button>
                <button
                    type="button"
                    class="content-editor__tool"
                    on:click=move |_| run_command(StyleCommand::BulletList)
                >
                    "• List"
                </button>
                <button
                    type="button"
                    class="content-editor__tool content-editor__tool--preview"
                    class:content-editor__tool--active=move || preview.get()
                    on:click=move |_| preview.update(|show| *show = !*show)
                >
                    "Preview"
                </button>
            </div>
            <Show
                when=move || preview.get()
                fallback=move || {
                    view! {
                        <textarea
                            class="content-editor__input"
                            placeholder="Enter your content"
                            prop:value=move || value.get()
                            on:input=move |ev| value.set(event_target_value(&ev))
                            node_ref=input_ref
                        ></textarea>
                    }
                }
            >
                <div
                    class="content-editor__preview"
                    inner_html=move || render_markdown(&value.get())
                ></div>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "content_editor_test.rs"]
mod content_editor_test;
