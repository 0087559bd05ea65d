//! Read-only page of one persisted entity.

use entity_sync::views::{detail_rows, EntityRoute};
use entity_sync::Persisted;
use leptos::prelude::*;

use crate::admin::AdminEntity;
use crate::routing::{entity_href, navigate_back};

#[component]
pub fn EntityDetail<T: AdminEntity>(entity: Persisted<T>) -> impl IntoView {
    let edit_href = entity_href(T::KIND, EntityRoute::Edit(entity.id));
    let title = format!("{} {}", T::NAME, entity.id);
    let rows = detail_rows(&entity);

    view! {
        <div class="entity-detail">
            <h2>{title}</h2>
            <dl class="row-md jh-entity-details">
                {rows.into_iter().map(|row| view! {
                    <dt>{row.field}</dt>
                    <dd>{row.value}</dd>
                }).collect_view()}
            </dl>
            <div class="detail-actions">
                <button class="btn btn-info" on:click=move |_| navigate_back()>
                    "Back"
                </button>
                <a class="btn btn-primary" href=edit_href>"Edit"</a>
            </div>
        </div>
    }
}
