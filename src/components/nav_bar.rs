//! Navigation Bar Component
//!
//! One tab per administered entity; the tab of the current page is active.

use entity_sync::views::EntityRoute;
use leptos::prelude::*;
use strum::IntoEnumIterator;

use crate::admin::EntityKind;
use crate::routing::{entity_href, AppRoute};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let active_kind = move || match store.route().get() {
        AppRoute::Entity { kind, .. } => Some(kind),
        _ => None,
    };

    view! {
        <nav class="entity-tab-bar">
            <a class="brand" href=AppRoute::Home.href()>"Juntos na Grana"</a>
            {EntityKind::iter().map(move |kind| {
                let tab_class = move || {
                    if active_kind() == Some(kind) { "entity-tab active" } else { "entity-tab" }
                };
                view! {
                    <a class=tab_class href=entity_href(kind, EntityRoute::List)>
                        {kind.title()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
