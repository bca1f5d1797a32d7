//! Users Page
//!
//! Paginated table of stored profiles with search, sorting, deletion, and
//! click-to-open. Opening a profile fetches it with its content and
//! hydrates the user slice directly before navigating.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api;
use crate::components::DeleteConfirmButton;
use crate::components::profile_card::format_count;
use crate::context::{AppContext, Page, ToastKind};
use crate::models::{Pagination, Profile, ProfileQuery};
use crate::store::use_app_store;

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("created_at", "Added"),
    ("username", "Username"),
    ("followers_count", "Followers"),
];

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (users, set_users) = signal(Vec::<Profile>::new());
    let (pagination, set_pagination) = signal(Pagination::default());
    let (loading, set_loading) = signal(true);
    let (opening, set_opening) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (query, set_query) = signal(ProfileQuery::default());

    // Reload whenever the query changes.
    Effect::new(move |_| {
        let current = query.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_profiles(&current).await {
                Ok(response) => {
                    set_users.set(response.users);
                    set_pagination.set(response.pagination);
                }
                Err(message) => {
                    ctx.notify(ToastKind::Error, format!("Failed to fetch users: {}", message));
                }
            }
            set_loading.set(false);
        });
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_query.update(|q| {
            q.search = search.get();
            q.page = 1;
        });
    };

    let on_sort = move |column: &'static str| {
        set_query.update(|q| {
            if q.sort_by == column {
                q.sort_order = if q.sort_order == "desc" { "asc".into() } else { "desc".into() };
            } else {
                q.sort_by = column.to_string();
                q.sort_order = "desc".to_string();
            }
            q.page = 1;
        });
    };

    let on_page = move |page: u32| {
        set_query.update(|q| q.page = page);
    };

    let delete_user = move |username: String| {
        spawn_local(async move {
            match api::delete_profile(&username).await {
                Ok(()) => {
                    ctx.notify(ToastKind::Success, format!("User @{} deleted", username));
                    // Re-run the current query.
                    set_query.update(|_| {});
                }
                Err(message) => {
                    ctx.notify(ToastKind::Error, format!("Failed to delete @{}: {}", username, message));
                }
            }
        });
    };

    // Hydrate the user slice via the direct setters; this flow does not
    // own the async lifecycle, so loading/error stay untouched.
    let open_user = move |username: String| {
        set_opening.set(Some(username.clone()));
        spawn_local(async move {
            match api::get_profile(&username).await {
                Ok(detail) => {
                    actions::hydrate_user(store, detail.profile, detail.tweets, detail.posts);
                    ctx.notify(ToastKind::Success, "Profile loaded!");
                    ctx.navigate(Page::Profile);
                }
                Err(message) => {
                    ctx.notify(ToastKind::Error, format!("Failed to load profile: {}", message));
                }
            }
            set_opening.set(None);
        });
    };

    view! {
        <div class="card users-page">
            <div class="card-header">
                <div>
                    <h2>"Stored Profiles"</h2>
                    <p class="hint">
                        {move || format!("{} profiles collected", pagination.get().total)}
                    </p>
                </div>
                <form class="users-search" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Search profiles..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button type="submit">"Search"</button>
                </form>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-panel">
                    <p>"Loading profiles..."</p>
                </div>
            </Show>

            <table class="users-table">
                <thead>
                    <tr>
                        {SORT_COLUMNS.iter().map(|(column, label)| {
                            let column = *column;
                            let indicator = move || {
                                let q = query.get();
                                if q.sort_by == column {
                                    if q.sort_order == "desc" { " ▼" } else { " ▲" }
                                } else {
                                    ""
                                }
                            };
                            view! {
                                <th class="sortable" on:click=move |_| on_sort(column)>
                                    {*label}
                                    {indicator}
                                </th>
                            }
                        }).collect_view()}
                        <th>"Verified"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| user.username.clone()
                        children=move |user| {
                            let username = user.username.clone();
                            let open_name = username.clone();
                            let delete_name = username.clone();
                            let is_opening = {
                                let username = username.clone();
                                move || opening.get().as_deref() == Some(username.as_str())
                            };
                            view! {
                                <tr
                                    class="user-row"
                                    class:opening=is_opening
                                    on:click=move |_| open_user(open_name.clone())
                                >
                                    <td>{user.created_at.clone().unwrap_or_default()}</td>
                                    <td>
                                        <span class="user-name">{user.name.clone()}</span>
                                        <span class="user-handle">{format!("@{}", username)}</span>
                                    </td>
                                    <td>{format_count(user.followers_count)}</td>
                                    <td>{if user.verified { "✔" } else { "" }}</td>
                                    <td>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |_| delete_user(delete_name.clone()))
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="pagination">
                <button
                    prop:disabled=move || !pagination.get().has_prev
                    on:click=move |_| on_page(pagination.get().page.saturating_sub(1))
                >
                    "Prev"
                </button>
                <span>
                    {move || {
                        let p = pagination.get();
                        format!("Page {} of {}", p.page, p.pages.max(1))
                    }}
                </span>
                <button
                    prop:disabled=move || !pagination.get().has_next
                    on:click=move |_| on_page(pagination.get().page + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
