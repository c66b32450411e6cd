//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::api::http::DEFAULT_BASE_URL;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    /// Cookie domain; host-only cookies when unset.
    pub domain: Option<String>,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout towards the backend; transport default when unset.
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
