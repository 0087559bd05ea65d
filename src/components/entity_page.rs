//! Entity Page Component
//!
//! Routes one entity's child path to its list, detail or update view. View
//! and edit routes resolve their record first; a missing one goes to 404.

use std::marker::PhantomData;

use entity_sync::views::{resolve, EntityRoute, Resolved};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::AdminEntity;
use crate::components::{EntityDetail, EntityList, EntityUpdate};
use crate::context::use_app_context;
use crate::routing::{navigate, AppRoute};
use crate::store::{store_push_alert, use_app_store};

#[component]
pub fn EntityPage<T: AdminEntity>(
    route: EntityRoute,
    sort: Memo<Option<String>>,
    #[prop(optional)] _entity: PhantomData<T>,
) -> impl IntoView {
    if route == EntityRoute::List {
        return view! { <EntityList<T> sort=sort /> }.into_any();
    }

    let ctx = use_app_context();
    let store = use_app_store();
    let (resolved, set_resolved) = signal::<Option<Resolved<T>>>(None);

    let id = route.id();
    spawn_local(async move {
        match resolve(&ctx.service::<T>(), id).await {
            Ok(Resolved::NotFound) => {
                web_sys::console::warn_1(&format!("[PAGE] {} {:?} not found", T::NAME, id).into());
                navigate(&AppRoute::NotFound.href());
            }
            Ok(found) => set_resolved.set(Some(found)),
            Err(e) => store_push_alert(&store, format!("Could not load {}: {}", T::NAME, e)),
        }
    });

    let editing = matches!(route, EntityRoute::New | EntityRoute::Edit(_));
    (move || match resolved.get() {
        Some(Resolved::Found(entity)) if editing => {
            view! { <EntityUpdate<T> entity=Some(entity) /> }.into_any()
        }
        Some(Resolved::Found(entity)) => view! { <EntityDetail<T> entity=entity /> }.into_any(),
        Some(Resolved::New) => view! { <EntityUpdate<T> entity=None /> }.into_any(),
        _ => view! { <p class="loading">"Loading..."</p> }.into_any(),
    })
    .into_any()
}
