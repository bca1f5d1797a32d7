//! Home Page
//!
//! Search form plus the current profile and its content.

use leptos::prelude::*;

use crate::components::{ProfileCard, TweetList, UserSearch};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <UserSearch />
            <ProfileCard />
            <TweetList />
        </div>
    }
}
