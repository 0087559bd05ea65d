//! Application Configuration
//!
//! Resolves resource URLs against the configured server prefix.

use serde::{Deserialize, Serialize};

/// Client-side configuration for reaching the REST API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationConfig {
    /// Prefix prepended to every API path, e.g. "http://localhost:8080/"
    pub endpoint_prefix: String,
}

impl ApplicationConfig {
    pub fn new(endpoint_prefix: impl Into<String>) -> Self {
        Self { endpoint_prefix: endpoint_prefix.into() }
    }

    /// Full URL for an API path such as "api/goals"
    pub fn endpoint_for(&self, api: &str) -> String {
        let api = api.trim_start_matches('/');
        if self.endpoint_prefix.is_empty() {
            return api.to_string();
        }
        format!("{}/{}", self.endpoint_prefix.trim_end_matches('/'), api)
    }
}
