use super::types::{CreateRepository, RepositoryInfo};
use crate::connectors::errors::ConnectorError;

/// GitHub REST API operations used by the repository provisioning proxy.
#[async_trait::async_trait]
pub trait GithubConnector: Send + Sync {
    /// False when no server-held token is available.
    fn is_configured(&self) -> bool;

    /// Create a repository owned by the token holder
    async fn create_repository(
        &self,
        request: &CreateRepository,
    ) -> Result<RepositoryInfo, ConnectorError>;

    /// Invite `username` to `owner/repo` with one of `pull`, `push`, `admin`
    async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: &str,
    ) -> Result<(), ConnectorError>;
}
