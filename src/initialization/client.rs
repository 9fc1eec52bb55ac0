//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{DEFAULT_USER_AGENT, LIVENESS_TIMEOUT_SECS};

/// Initializes the HTTP client used for liveness checks.
///
/// Redirects are followed so a moved-but-reachable target still counts as
/// live; the per-request timeout matches the liveness budget.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(LIVENESS_TIMEOUT_SECS))
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
