//! Header Component
//!
//! Top navigation bar with in-app page tabs.

use leptos::prelude::*;

use crate::context::{AppContext, PAGES};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="app-header">
            <div class="brand">
                <span class="brand-title">"PostPatrol"</span>
                <span class="brand-subtitle">"Multimodal sentiment dashboard"</span>
            </div>
            <nav class="page-tabs">
                {PAGES.iter().map(|page| {
                    let page = *page;
                    let is_active = move || ctx.page.get() == page;
                    let tab_class = move || {
                        if is_active() { "page-tab active" } else { "page-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| ctx.navigate(page)>
                            {page.title()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
