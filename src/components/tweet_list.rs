//! Tweet List Component
//!
//! Filterable, newest-first content list for the current user.

use leptos::prelude::*;

use crate::components::profile_card::format_count;
use crate::content::{visible_content, ContentFilter, CONTENT_FILTERS};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TweetList() -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(ContentFilter::All);

    let current_user = move || store.user().read().current_user.clone();
    // Derived view sequence, recomputed on every filter or data change.
    let content = move || visible_content(&store.user().read().tweets, filter.get());

    view! {
        {move || match current_user() {
            None => view! {
                <div class="card empty-state">
                    <p>"No user data available."</p>
                </div>
            }.into_any(),
            Some(user) => {
                let username = user.username.clone();
                let display_name = user.name.clone();
                view! {
                    <div class="card tweet-list">
                        <div class="card-header">
                            <div>
                                <h2>{format!("{}'s Posts", display_name)}</h2>
                                <p class="hint">
                                    {move || format!("{} posts found", content().len())}
                                </p>
                            </div>
                            <select
                                class="filter-select"
                                on:change=move |ev| {
                                    set_filter.set(ContentFilter::from_value(&event_target_value(&ev)));
                                }
                            >
                                {CONTENT_FILTERS.iter().map(|f| view! {
                                    <option value=f.value() selected=move || filter.get() == *f>
                                        {f.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>

                        {move || {
                            let items = content();
                            if items.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>"No posts found"</p>
                                        <p class="hint">"Try adjusting your filter or check back later"</p>
                                    </div>
                                }.into_any()
                            } else {
                                let username = username.clone();
                                view! {
                                    <For
                                        each=move || items.clone()
                                        key=|item| item.tweet_id.clone()
                                        children=move |item| {
                                            let link = format!(
                                                "https://twitter.com/{}/status/{}",
                                                username, item.tweet_id
                                            );
                                            view! {
                                                <div class="tweet-item">
                                                    <div class="tweet-header">
                                                        <span class="tweet-date">{item.posted_at.clone()}</span>
                                                    </div>
                                                    <p class="tweet-text">{item.text.clone()}</p>

                                                    {(!item.media_urls.is_empty()).then(|| view! {
                                                        <div class="media-grid">
                                                            {item.media_urls.iter().take(4).map(|url| view! {
                                                                <img class="media-thumb" src=url.clone() alt="media" />
                                                            }).collect_view()}
                                                            {(item.media_urls.len() > 4).then(|| view! {
                                                                <span class="media-more">
                                                                    {format!("+{}", item.media_urls.len() - 4)}
                                                                </span>
                                                            })}
                                                        </div>
                                                    })}

                                                    {(!item.hashtags.is_empty()).then(|| view! {
                                                        <div class="hashtags">
                                                            {item.hashtags.iter().map(|tag| view! {
                                                                <span class="hashtag">{tag.clone()}</span>
                                                            }).collect_view()}
                                                        </div>
                                                    })}

                                                    <div class="tweet-footer">
                                                        <span class="engagement">
                                                            {format!("💬 {}", format_count(item.reply_count))}
                                                        </span>
                                                        <span class="engagement">
                                                            {format!("🔁 {}", format_count(item.retweet_count))}
                                                        </span>
                                                        <span class="engagement">
                                                            {format!("❤ {}", format_count(item.like_count))}
                                                        </span>
                                                        <a
                                                            class="tweet-link"
                                                            href=link
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                        >
                                                            "View on X"
                                                        </a>
                                                    </div>
                                                </div>
                                            }
                                        }
                                    />
                                }.into_any()
                            }
                        }}
                    </div>
                }.into_any()
            }
        }}
    }
}
