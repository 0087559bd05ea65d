//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use entity_sync::{ApplicationConfig, Entity, EntityService, ReqwestClient};
use leptos::prelude::*;

use crate::services::Service;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ApplicationConfig>,
    /// One transport shared by every service of the page
    client: StoredValue<ReqwestClient, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ApplicationConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            client: StoredValue::new_local(ReqwestClient::new()),
        }
    }

    pub fn config(&self) -> ApplicationConfig {
        self.config.get_value()
    }

    pub fn client(&self) -> ReqwestClient {
        self.client.get_value()
    }

    /// REST service of `T` against the configured server
    pub fn service<T: Entity>(&self) -> Service<T> {
        self.config.with_value(|config| EntityService::new(self.client(), config))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
