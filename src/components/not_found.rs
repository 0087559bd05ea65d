//! Not-found page, shown for unknown paths and missing records.

use leptos::prelude::*;

use crate::routing::AppRoute;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <p>"The page or record you asked for does not exist."</p>
            <a href=AppRoute::Home.href()>"Back to the start page"</a>
        </div>
    }
}
