//! Profile Page
//!
//! Profile card and content list for the hydrated user.

use leptos::prelude::*;

use crate::components::{ProfileCard, TweetList};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <ProfileCard />
            <TweetList />
        </div>
    }
}
