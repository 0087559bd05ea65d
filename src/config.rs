//! Runtime Configuration
//!
//! Where the REST API lives. A build can pin it with the `SERVER_API_URL`
//! environment variable; otherwise the page's own origin is used.

use entity_sync::ApplicationConfig;

const SERVER_API_URL: Option<&str> = option_env!("SERVER_API_URL");

pub fn application_config() -> ApplicationConfig {
    let prefix = configured_prefix(SERVER_API_URL).or_else(page_origin).unwrap_or_default();
    web_sys::console::log_1(&format!("[CONFIG] API endpoint prefix: {:?}", prefix).into());
    ApplicationConfig::new(prefix)
}

fn configured_prefix(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|url| !url.is_empty()).map(str::to_string)
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
