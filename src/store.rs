//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The state is
//! split into the two slices from the backend contract: the user cache
//! and the analysis cache. All mutation goes through the slice reducers
//! at dispatch points; components only read.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::slices::{AnalysisSlice, UserSlice};

/// Application state, provided via context at the root
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub user: UserSlice,
    pub analysis: AnalysisSlice,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
