//! Juntos na Grana Admin App
//!
//! Root component: provides the store and context, follows the location hash
//! and renders the page of the current route.

use entity_sync::views::EntityRoute;
use leptos::prelude::*;
use reactive_stores::Store;
use strum::IntoEnumIterator;

use crate::admin::EntityKind;
use crate::components::{AlertBanner, EntityPage, NavBar, NotFound};
use crate::config::application_config;
use crate::context::AppContext;
use crate::models::{
    AppUser, DailyMission, Family, Goal, MissionStatusRecord, Transaction, Wallet,
};
use crate::routing::{current_location, entity_href, AppRoute};
use crate::store::{store_set_route, AppState, AppStateStoreFields, AppStore};

/// Route without its query; a change here remounts the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Entity(EntityKind, EntityRoute),
    NotFound,
}

impl From<&AppRoute> for Page {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Home => Page::Home,
            AppRoute::Entity { kind, route, .. } => Page::Entity(*kind, *route),
            AppRoute::NotFound => Page::NotFound,
        }
    }
}

fn current_page(store: &AppStore) -> Page {
    store.route().with(|route| Page::from(route))
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(AppRoute::parse(&current_location())));
    provide_context(store);
    provide_context(AppContext::new(application_config()));

    // Follow the location hash
    let handle = window_event_listener(leptos::ev::hashchange, move |_| {
        let route = AppRoute::parse(&current_location());
        web_sys::console::log_1(&format!("[APP] route {:?}", route).into());
        store_set_route(&store, route);
    });
    on_cleanup(move || handle.remove());

    let page = Memo::new(move |_| current_page(&store));
    let sort = Memo::new(move |_| {
        store.route().with(|route| match route {
            AppRoute::Entity { sort, .. } => sort.clone(),
            _ => None,
        })
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                <AlertBanner />
                {move || match page.get() {
                    Page::Home => view! { <Home /> }.into_any(),
                    Page::Entity(kind, route) => entity_page(kind, route, sort),
                    Page::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </main>
        </div>
    }
}

fn entity_page(kind: EntityKind, route: EntityRoute, sort: Memo<Option<String>>) -> AnyView {
    match kind {
        EntityKind::Family => view! { <EntityPage<Family> route=route sort=sort /> }.into_any(),
        EntityKind::AppUser => view! { <EntityPage<AppUser> route=route sort=sort /> }.into_any(),
        EntityKind::Wallet => view! { <EntityPage<Wallet> route=route sort=sort /> }.into_any(),
        EntityKind::Goal => view! { <EntityPage<Goal> route=route sort=sort /> }.into_any(),
        EntityKind::DailyMission => {
            view! { <EntityPage<DailyMission> route=route sort=sort /> }.into_any()
        }
        EntityKind::MissionStatusRecord => {
            view! { <EntityPage<MissionStatusRecord> route=route sort=sort /> }.into_any()
        }
        EntityKind::Transaction => {
            view! { <EntityPage<Transaction> route=route sort=sort /> }.into_any()
        }
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Juntos na Grana"</h1>
            <p class="lead">"Family finances, goals and daily missions."</p>
            <ul class="entity-links">
                {EntityKind::iter().map(|kind| view! {
                    <li><a href=entity_href(kind, EntityRoute::List)>{kind.title()}</a></li>
                }).collect_view()}
            </ul>
        </div>
    }
}
