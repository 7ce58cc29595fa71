//! External Service Connectors
//!
//! Adapters for third-party APIs. Routes only ever see the connector trait, so
//! the HTTP implementation can be swapped for a mock in tests or when the
//! integration is disabled in configuration.
//!
//! 1. Trait in `{service}/connector.rs`
//! 2. HTTP client in `{service}/client.rs`
//! 3. Configuration in `config.rs`
//! 4. `init` builds the trait object that `startup` injects as `web::Data`

pub mod config;
pub mod errors;
pub mod github_service;

pub use config::{ConnectorConfig, GithubConfig};
pub use errors::ConnectorError;
pub use github_service::init as init_github;
pub use github_service::{CreateRepository, GithubClient, GithubConnector, RepositoryInfo};
