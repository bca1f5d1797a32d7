//! User Search Component
//!
//! Search form for fetching an account's profile and recent content,
//! with client-side guards and search-history chips.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::{AppContext, ToastKind};
use crate::store::{use_app_store, AppStateStoreFields};

/// Client-side floor for the tweet count; the backend rejects less.
const MIN_TWEETS: u32 = 10;
const MAX_TWEETS: u32 = 200;
const DEFAULT_TWEETS: u32 = 50;

/// How many history chips to show
const HISTORY_CHIPS: usize = 5;

#[component]
pub fn UserSearch() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (max_tweets, set_max_tweets) = signal(DEFAULT_TWEETS.to_string());

    let loading = move || store.user().read().loading;
    let error = move || store.user().read().error.clone();
    let history = move || store.user().read().search_history.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let raw = username.get();
        if raw.trim().is_empty() {
            ctx.notify(ToastKind::Error, "Please enter a username");
            return;
        }
        let count = match max_tweets.get().trim().parse::<u32>() {
            Ok(n) if n >= MIN_TWEETS => n,
            _ => {
                ctx.notify(
                    ToastKind::Error,
                    format!("Minimum tweets count is {}", MIN_TWEETS),
                );
                return;
            }
        };

        store.user().write().clear_error();
        let clean = raw.trim().replace('@', "");
        ctx.notify(ToastKind::Info, "Fetching user data... This may take a moment");

        spawn_local(async move {
            match actions::fetch_user_data(store, clean, count).await {
                Ok(()) => {
                    ctx.notify(ToastKind::Success, "User data fetched successfully!");
                    set_username.set(String::new());
                }
                Err(message) => ctx.notify(ToastKind::Error, message),
            }
        });
    };

    let on_clear = move |_| {
        store.user().write().clear_user_data();
        set_username.set(String::new());
    };

    view! {
        <div class="card search-card">
            <div class="card-header">
                <div>
                    <h2>"Search X/Twitter User"</h2>
                    <p class="hint">"Analyze sentiment and political classification"</p>
                </div>
                <button class="clear-btn" title="Clear data" on:click=on_clear>
                    "×"
                </button>
            </div>

            {move || error().map(|message| view! {
                <div class="error-panel">
                    <p>{message}</p>
                </div>
            })}

            <form class="search-form" on:submit=on_submit>
                <div class="search-row">
                    <label>
                        "Username:"
                        <input
                            type="text"
                            placeholder="e.g. @elonmusk"
                            prop:value=move || username.get()
                            prop:disabled=loading
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Tweets to analyze:"
                        <input
                            type="number"
                            min=MIN_TWEETS.to_string()
                            max=MAX_TWEETS.to_string()
                            prop:value=move || max_tweets.get()
                            prop:disabled=loading
                            on:input=move |ev| set_max_tweets.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <button type="submit" class="primary-btn" prop:disabled=loading>
                    {move || if loading() { "Analyzing..." } else { "Fetch User Data" }}
                </button>
            </form>

            <Show when=loading>
                <div class="loading-panel">
                    <p>"Scraping user data..."</p>
                    <p class="hint">"This may take 30-60 seconds depending on the user's activity."</p>
                </div>
            </Show>

            <Show when=move || !history().is_empty()>
                <div class="search-history">
                    <h3>"Recent Searches"</h3>
                    <div class="history-chips">
                        {move || history().into_iter().take(HISTORY_CHIPS).map(|name| {
                            let fill = name.clone();
                            view! {
                                <button
                                    class="history-chip"
                                    on:click=move |_| set_username.set(fill.clone())
                                >
                                    {name.clone()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
