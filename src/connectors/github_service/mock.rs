use super::connector::GithubConnector;
use super::types::{CreateRepository, RepositoryInfo, RepositoryOwner};
use crate::connectors::errors::ConnectorError;

/// Offline stand-in: every repository lands under the `componentry` account.
#[derive(Default)]
pub struct MockGithubConnector;

#[async_trait::async_trait]
impl GithubConnector for MockGithubConnector {
    fn is_configured(&self) -> bool {
        true
    }

    async fn create_repository(
        &self,
        request: &CreateRepository,
    ) -> Result<RepositoryInfo, ConnectorError> {
        Ok(RepositoryInfo {
            id: 1,
            name: request.name.clone(),
            html_url: format!("https://github.com/componentry/{}", request.name),
            private: request.private,
            owner: RepositoryOwner {
                login: "componentry".to_string(),
            },
        })
    }

    async fn add_collaborator(
        &self,
        _owner: &str,
        _repo: &str,
        _username: &str,
        _permission: &str,
    ) -> Result<(), ConnectorError> {
        Ok(())
    }
}
