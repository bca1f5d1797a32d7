//! Toast Component
//!
//! Transient notification banner with auto-dismiss.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, ToastKind};

const DISMISS_AFTER_MS: u32 = 4000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Arm a dismiss timer whenever a new toast appears. The id check in
    // dismiss_toast keeps an old timer from hiding a newer message.
    Effect::new(move |_| {
        if let Some(toast) = ctx.toast.get() {
            let id = toast.id;
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                ctx.dismiss_toast(id);
            });
        }
    });

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
                ToastKind::Info => "toast toast-info",
            };
            let id = toast.id;
            view! {
                <div class=class>
                    <span class="toast-message">{toast.message.clone()}</span>
                    <button class="toast-close" on:click=move |_| ctx.dismiss_toast(id)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
