//! Static site footer.

use leptos::prelude::*;

use crate::config::APP_NAME;

/// Footer shown at the bottom of every page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__copy">{format!("© 2025 {APP_NAME}. All rights reserved.")}</p>
        </footer>
    }
}
