//! Juntos na Grana Admin Frontend Entry Point

mod admin;
mod app;
mod components;
mod config;
mod context;
#[cfg(test)]
mod fixtures;
mod models;
mod routing;
mod services;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
