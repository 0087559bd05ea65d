//! Delete Confirm Dialog Component
//!
//! Modal confirmation in front of `DELETE /api/<resource>/{id}`.

use entity_sync::views::{CloseReason, DeleteDialog, DeletePhase};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::AdminEntity;
use crate::context::use_app_context;
use crate::store::{store_push_alert, use_app_store};

/// Delete confirmation for the row held by `dialog`
///
/// # Arguments
/// * `dialog` - Dialog state; opening it (`DeleteDialog::open`) shows the modal
/// * `on_closed` - Runs with the close reason once the dialog is closed
#[component]
pub fn DeleteConfirmDialog<T: AdminEntity>(
    dialog: RwSignal<DeleteDialog<T>>,
    #[prop(into)] on_closed: Callback<CloseReason>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let busy = move || dialog.with(|dialog| dialog.phase() == DeletePhase::Deleting);

    let on_confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(id) = dialog.try_update(|dialog| dialog.begin_delete()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = ctx.service::<T>().delete(id).await;
            match dialog.try_update(|dialog| dialog.finish_delete(result)) {
                Some(Ok(Some(reason))) => on_closed.run(reason),
                Some(Ok(None)) => {
                    store_push_alert(&store, format!("{} {} was not deleted", T::NAME, id))
                }
                Some(Err(e)) => store_push_alert(
                    &store,
                    format!("Could not delete {} {}: {}", T::NAME, id, e),
                ),
                None => {}
            }
        });
    };

    let on_cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(Some(reason)) = dialog.try_update(|dialog| dialog.cancel()) {
            on_closed.run(reason);
        }
    };

    let question = move || {
        dialog.with(|dialog| {
            dialog
                .target()
                .map(|target| format!("Are you sure you want to delete {} {}?", T::NAME, target.id))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || dialog.with(|dialog| dialog.is_open())>
            <div class="modal-backdrop">
                <div class="modal delete-confirm">
                    <p class="delete-confirm-text">{question}</p>
                    <div class="modal-actions">
                        <button class="cancel-btn" disabled=busy on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="confirm-btn" disabled=busy on:click=on_confirm>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
