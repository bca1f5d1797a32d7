//! Profile Card Component
//!
//! Banner, avatar, and account stats for the current user.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Compact engagement-count formatting (1.2K, 3.4M)
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[component]
pub fn ProfileCard() -> impl IntoView {
    let store = use_app_store();
    let current_user = move || store.user().read().current_user.clone();

    view! {
        {move || match current_user() {
            None => view! {
                <div class="card empty-state">
                    <p>"No user data available."</p>
                    <p class="hint">"Search for an account to get started."</p>
                </div>
            }.into_any(),
            Some(user) => {
                let joined = user.joined_date.clone()
                    .or_else(|| user.created_at.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                view! {
                    <div class="card profile-card">
                        {user.banner_image_url.clone().map(|url| view! {
                            <img class="profile-banner" src=url alt="banner" />
                        })}
                        <div class="profile-body">
                            {user.profile_image_url.clone().map(|url| view! {
                                <img class="profile-avatar" src=url alt=user.name.clone() />
                            })}
                            <div class="profile-names">
                                <span class="profile-name">
                                    {user.name.clone()}
                                    {user.verified.then(|| view! {
                                        <span class="verified-badge" title="Verified">"✔"</span>
                                    })}
                                </span>
                                <span class="profile-username">{format!("@{}", user.username)}</span>
                            </div>
                            {user.description.clone().map(|bio| view! {
                                <p class="profile-bio">{bio}</p>
                            })}
                            <div class="profile-meta">
                                {user.location.clone().map(|loc| view! {
                                    <span class="meta-item">{loc}</span>
                                })}
                                {user.url.clone().map(|url| view! {
                                    <a class="meta-item" href=url.clone() target="_blank" rel="noopener noreferrer">
                                        {url.clone()}
                                    </a>
                                })}
                                <span class="meta-item">{format!("Joined {}", joined)}</span>
                            </div>
                            <div class="profile-stats">
                                <span>
                                    <strong>{format_count(user.following_count)}</strong>
                                    " Following"
                                </span>
                                <span>
                                    <strong>{format_count(user.followers_count)}</strong>
                                    " Followers"
                                </span>
                            </div>
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}
