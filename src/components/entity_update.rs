//! Entity Update Component
//!
//! Create/edit form. A valid submit creates drafts and updates persisted
//! records, then goes back to the previous page.

use entity_sync::views::{persist, UpdateView};
use entity_sync::{Persisted, ID_FIELD};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::AdminEntity;
use crate::components::FieldInput;
use crate::context::use_app_context;
use crate::routing::navigate_back;
use crate::store::{store_push_alert, use_app_store};

#[component]
pub fn EntityUpdate<T: AdminEntity>(
    /// `None` opens a blank form
    entity: Option<Persisted<T>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = RwSignal::new(UpdateView::new(entity, chrono::Utc::now()));
    let (error, set_error) = signal::<Option<String>>(None);

    let heading = form.with_untracked(|form| match form.form().id() {
        Some(id) => format!("Edit {} {}", T::NAME, id),
        None => format!("Create a new {}", T::NAME),
    });
    let controls = form.with_untracked(|form| form.form().controls().to_vec());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let record = match form.try_update(|form| form.begin_save()) {
            Some(Ok(record)) => record,
            Some(Err(e)) => {
                set_error.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        set_error.set(None);
        spawn_local(async move {
            let result = persist(&ctx.service::<T>(), &record).await;
            match form.try_update(|form| form.finish_save(result)) {
                Some(Ok(outcome)) => {
                    let message = format!("[FORM] saved {} {}", T::NAME, outcome.entity().id);
                    web_sys::console::log_1(&message.into());
                    navigate_back();
                }
                Some(Err(e)) => {
                    store_push_alert(&store, format!("Could not save {}: {}", T::NAME, e))
                }
                None => {}
            }
        });
    };

    view! {
        <div class="entity-update">
            <h2>{heading}</h2>
            <form on:submit=on_submit novalidate=true>
                {controls.into_iter().map(move |control| {
                    if control.name == ID_FIELD && control.value.is_null() {
                        return ().into_any();
                    }
                    view! { <FieldInput<T> form=form control=control set_error=set_error /> }
                        .into_any()
                }).collect_view()}

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form-actions">
                    <button type="button" class="btn btn-secondary"
                        on:click=move |_| navigate_back()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary"
                        disabled=move || form.with(|form| form.is_saving())>
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}
