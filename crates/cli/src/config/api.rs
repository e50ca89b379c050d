//! API Config

use std::time::Duration;

use clap::Args;
use siniestros_app::http::{ApiConfig, DEFAULT_BASE_URL};

/// Claims API connection settings.
#[derive(Debug, Args)]
pub(crate) struct ApiArgs {
    /// Claims API base URL
    #[arg(long, env = "SINIESTROS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds; requests wait indefinitely when unset
    #[arg(long, env = "SINIESTROS_REQUEST_TIMEOUT_SECONDS")]
    pub request_timeout_seconds: Option<u64>,
}

impl ApiArgs {
    /// Connection settings for the API client.
    #[must_use]
    pub(crate) fn to_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
            timeout: self.request_timeout_seconds.map(Duration::from_secs),
        }
    }
}
