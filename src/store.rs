//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routing::AppRoute;

/// Dismissable error message shown above the page
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Page currently shown, parsed from the location hash
    pub route: AppRoute,
    pub alerts: Vec<Alert>,
    /// Id handed to the next alert
    pub next_alert_id: u32,
}

impl AppState {
    pub fn new(route: AppRoute) -> Self {
        Self { route, ..Default::default() }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_route(store: &AppStore, route: AppRoute) {
    store.route().set(route);
}

/// Shows an error message and logs it to the console
pub fn store_push_alert(store: &AppStore, message: impl Into<String>) {
    let message = message.into();
    web_sys::console::error_1(&message.clone().into());
    let id = store.next_alert_id().get_untracked();
    store.next_alert_id().set(id + 1);
    store.alerts().write().push(Alert { id, message });
}

pub fn store_dismiss_alert(store: &AppStore, alert_id: u32) {
    store.alerts().write().retain(|alert| alert.id != alert_id);
}
