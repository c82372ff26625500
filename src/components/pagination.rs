//! Numbered pagination controls for article lists.
//!
//! DESIGN
//! ======
//! The backend reports `lastPage` with every batch, but while a page
//! change is in flight the resource briefly has no value. Lists keep the
//! largest last-page they have seen via [`latched_last_page`] so the
//! controls do not collapse to a single button between fetches.

use leptos::prelude::*;

/// Largest last-page seen so far; never drops below 1.
pub fn latched_last_page(current: u32, fetched: u32) -> u32 {
    current.max(fetched).max(1)
}

/// Page buttons for the range `1..=last_page`.
pub(crate) fn page_numbers(last_page: u32) -> Vec<u32> {
    (1..=last_page.max(1)).collect()
}

/// Previous / numbered / next controls. `on_select` receives the
/// 1-based page to load.
#[component]
pub fn Pagination(
    page: RwSignal<u32>,
    last_page: RwSignal<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    let select_previous = move |_| {
        let current = page.get_untracked();
        if current > 1 {
            on_select.run(current - 1);
        }
    };
    let select_next = move |_| {
        let current = page.get_untracked();
        if current < last_page.get_untracked() {
            on_select.run(current + 1);
        }
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="pagination__step"
                disabled=move || page.get() <= 1
                on:click=select_previous
            >
                "Previous"
            </button>
            {move || {
                page_numbers(last_page.get())
                    .into_iter()
                    .map(|number| {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=move || page.get() == number
                                on:click=move |_| on_select.run(number)
                            >
                                {number}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination__step"
                disabled={move || page.get() >= last_page.get()}
                on:click=select_next
            >
                "Next"
            </button>
        </nav>
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;
