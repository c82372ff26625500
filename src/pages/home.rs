//! Home page: recommended feed plus the most liked sidebar.

use leptos::prelude::*;

use crate::components::most_liked_list::MostLikedList;
use crate::components::recommended_list::RecommendedList;

/// Landing page with the paginated recommended feed.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <div class="home__feed">
                <h1 class="home__heading">"Recommend For You"</h1>
                <RecommendedList />
            </div>
            <MostLikedList />
        </main>
    }
}
