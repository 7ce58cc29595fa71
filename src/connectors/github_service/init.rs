use actix_web::web;
use std::sync::Arc;

use super::{mock, GithubClient, GithubConnector};
use crate::connectors::config::ConnectorConfig;

/// Build the GitHub connector from settings.
///
/// An enabled config always yields the HTTP client, even without a token, so
/// that calls fail with "GitHub token not configured" instead of silently
/// reaching a mock.
pub fn init(connector_config: &ConnectorConfig) -> web::Data<Arc<dyn GithubConnector>> {
    let connector: Arc<dyn GithubConnector> =
        match connector_config.github.as_ref().filter(|c| c.enabled) {
            Some(config) => match GithubClient::new(config.clone()) {
                Ok(client) => {
                    if config.token.is_none() {
                        tracing::warn!("GITHUB_TOKEN is not set, repository actions will fail");
                    }
                    tracing::info!("Initializing GitHub connector: {}", config.base_url);
                    Arc::new(client)
                }
                Err(err) => {
                    tracing::error!("GitHub connector unavailable, using mock: {}", err);
                    Arc::new(mock::MockGithubConnector)
                }
            },
            None => {
                tracing::warn!("GitHub connector disabled - using mock");
                Arc::new(mock::MockGithubConnector)
            }
        };

    web::Data::new(connector)
}
