//! Entity List Component
//!
//! Sortable table of every row of one entity. The sort lives in the route's
//! query string: a header click navigates, the route change re-sorts.

use std::marker::PhantomData;

use entity_sync::views::{detail_rows, CloseReason, DeleteDialog, EntityRoute, ListView};
use entity_sync::{SortOrder, ID_FIELD};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::{AdminEntity, DEFAULT_SORT};
use crate::components::DeleteConfirmDialog;
use crate::context::use_app_context;
use crate::routing::{entity_href, list_href, navigate};
use crate::store::{store_push_alert, use_app_store};

#[component]
pub fn EntityList<T: AdminEntity>(
    /// Raw `sort` query parameter of the current route
    sort: Memo<Option<String>>,
    #[prop(optional)] _entity: PhantomData<T>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let list = RwSignal::new(ListView::<T>::new());
    let dialog = RwSignal::new(DeleteDialog::<T>::new());

    let load = move || {
        let Some(options) = list.try_update(|list| list.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = ctx.service::<T>().query_page(&options).await;
            if let Some(Err(e)) = list.try_update(|list| list.finish_load(result)) {
                store_push_alert(&store, format!("Could not load {} list: {}", T::NAME, e));
            }
        });
    };

    // Load on first visit, re-sort when only the sort changed
    Effect::new(move |_| {
        let sort = sort.get();
        let needs_load = list
            .try_update(|list| list.on_route_change(sort.as_deref(), DEFAULT_SORT))
            .unwrap_or(false);
        let message = format!("[LIST] {} sort={:?} load={}", T::NAME, sort, needs_load);
        web_sys::console::log_1(&message.into());
        if needs_load {
            load();
        }
    });

    let on_header_click = move |field: &'static str| {
        let query = list.with_untracked(|list| list.toggle_sort(field));
        navigate(&list_href(T::KIND, &query));
    };

    let sort_marker = move |field: &'static str| {
        list.with(|list| {
            let sort = list.sort();
            match (sort.predicate.as_deref(), sort.order) {
                (Some(predicate), Some(SortOrder::Asc)) if predicate == field => " ▲",
                (Some(predicate), Some(SortOrder::Desc)) if predicate == field => " ▼",
                _ => "",
            }
        })
    };

    let on_closed = move |reason: CloseReason| {
        if list.with_untracked(|list| list.on_delete_closed(reason)) {
            load();
        }
    };

    let columns = std::iter::once(ID_FIELD).chain(T::FIELDS.iter().map(|field| field.name));

    view! {
        <div class="entity-list">
            <div class="list-header">
                <h2>{T::NAME}</h2>
                <button class="btn"
                    disabled=move || list.with(|list| list.is_loading())
                    on:click=move |_| load()>
                    "Refresh"
                </button>
                <a class="btn btn-primary" href=entity_href(T::KIND, EntityRoute::New)>
                    "Create a new " {T::NAME}
                </a>
            </div>

            <Show when=move || list.with(|list| list.is_loading())>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=move || list.with(|list| !list.is_loading() && list.entities().is_empty())>
                <p class="empty">"No " {T::NAME} " found"</p>
            </Show>

            <table class="table entity-table">
                <thead>
                    <tr>
                        {columns.map(move |field| view! {
                            <th class="sortable" on:click=move |_| on_header_click(field)>
                                {field} {move || sort_marker(field)}
                            </th>
                        }).collect_view()}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.with(|list| list.entities().to_vec())
                        key=|entity| entity.id
                        children=move |entity| {
                            let id = entity.id;
                            let cells = detail_rows(&entity);
                            view! {
                                <tr>
                                    {cells
                                        .into_iter()
                                        .map(|cell| view! { <td>{cell.value}</td> })
                                        .collect_view()}
                                    <td class="row-actions">
                                        <a class="btn btn-info"
                                            href=entity_href(T::KIND, EntityRoute::View(id))>
                                            "View"
                                        </a>
                                        <a class="btn btn-primary"
                                            href=entity_href(T::KIND, EntityRoute::Edit(id))>
                                            "Edit"
                                        </a>
                                        <button
                                            class="btn btn-danger"
                                            on:click=move |_| {
                                                dialog.update(|dialog| dialog.open(entity.clone()))
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <DeleteConfirmDialog<T> dialog=dialog on_closed=on_closed />
        </div>
    }
}
