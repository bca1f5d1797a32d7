//! PostPatrol Dashboard App
//!
//! Root component: store + context provisioning, header navigation, and
//! page switching.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AnalysisPage, Header, HomePage, ProfilePage, ToastHost, UsersPage};
use crate::context::{AppContext, Page, Toast};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let page = signal(Page::Home);
    let toast = signal::<Option<Toast>>(None);
    let ctx = AppContext::new(page, toast);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <Header />
            <ToastHost />
            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                    Page::Analysis => view! { <AnalysisPage /> }.into_any(),
                    Page::Users => view! { <UsersPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
