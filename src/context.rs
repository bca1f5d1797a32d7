//! Application Context
//!
//! Shared navigation and notification signals provided via Leptos Context.

use leptos::prelude::*;

/// Navigable views. Plain in-app switching; no URL routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Profile,
    Analysis,
    Users,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Profile => "Profile",
            Page::Analysis => "Analysis",
            Page::Users => "Users",
        }
    }
}

pub const PAGES: &[Page] = &[Page::Home, Page::Profile, Page::Analysis, Page::Users];

/// Transient notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A single transient notification. The id lets the toast view dismiss
/// only the message it armed the timer for.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Latest toast - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Latest toast - write
    set_toast: WriteSignal<Option<Toast>>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            toast: toast.0,
            set_toast: toast.1,
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Show a transient notification, replacing any visible one.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast_id.with_value(|id| *id + 1);
        self.next_toast_id.set_value(id);
        self.set_toast.set(Some(Toast {
            id,
            kind,
            message: message.into(),
        }));
    }

    /// Dismiss the toast, but only if it is still the given one.
    pub fn dismiss_toast(&self, id: u64) {
        self.set_toast.update(|toast| {
            if toast.as_ref().is_some_and(|t| t.id == id) {
                *toast = None;
            }
        });
    }
}
