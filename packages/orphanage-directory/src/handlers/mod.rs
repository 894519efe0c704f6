pub mod assets;
pub mod create;
pub mod pages;

use std::sync::Arc;

use anyhow::anyhow;
use axum::{response::IntoResponse, Json};

use crate::config::Config;
use crate::services::{OrphanageApi, SubmissionGuard};

pub use create::{create_form, create_submit};
pub use pages::{detail, landing, map_browser};

/// Shared, read-mostly state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: OrphanageApi,
    pub submissions: SubmissionGuard,
}

impl AppState {
    pub fn new(config: Config, api: OrphanageApi) -> anyhow::Result<Self> {
        let ttl = config.submission_token_ttl().ok_or_else(|| {
            anyhow!(
                "Submission token TTL of {} seconds is out of range",
                config.submission_token_ttl_secs
            )
        })?;
        Ok(Self {
            config: Arc::new(config),
            api,
            submissions: SubmissionGuard::new(ttl),
        })
    }
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "orphanage-directory",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_state_rejects_oversized_token_ttl() {
        let api = OrphanageApi::new("http://api.local/", Duration::from_secs(1)).unwrap();
        let config = Config {
            submission_token_ttl_secs: i64::MAX,
            ..Default::default()
        };
        assert!(AppState::new(config, api.clone()).is_err());
        assert!(AppState::new(Config::default(), api).is_ok());
    }
}
