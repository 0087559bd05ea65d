//! Alert Banner Component
//!
//! Error messages pushed by failed requests, each dismissable.

use leptos::prelude::*;

use crate::store::{store_dismiss_alert, use_app_store, AppStateStoreFields};

#[component]
pub fn AlertBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="alerts">
            <For
                each=move || store.alerts().get()
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div class="alert alert-danger" role="alert">
                            <span>{alert.message}</span>
                            <button class="close-btn"
                                on:click=move |_| store_dismiss_alert(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
