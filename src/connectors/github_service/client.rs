use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{RequestBuilder, Response};
use tracing::Instrument;

use super::connector::GithubConnector;
use super::types::{CreateRepository, RepositoryInfo};
use crate::connectors::config::GithubConfig;
use crate::connectors::errors::ConnectorError;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// HTTP-based GitHub client. One call per operation: no retry, no backoff.
pub struct GithubClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) token: Option<String>,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ConnectorError::HttpError(format!("Failed to build client: {}", err)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            token: config.token,
        })
    }

    fn authorize(&self, req: RequestBuilder) -> Result<RequestBuilder, ConnectorError> {
        let token = self.token.as_ref().ok_or_else(|| {
            ConnectorError::NotConfigured("GitHub token not configured".to_string())
        })?;

        Ok(req
            .header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, "componentry"))
    }

    /// Turns a non-2xx answer into `ConnectorError::Upstream` keeping GitHub's body.
    async fn check_status(resp: Response) -> Result<Response, ConnectorError> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        let body = serde_json::from_str::<serde_json::Value>(&text)
            .unwrap_or(serde_json::Value::String(text));
        tracing::warn!(status, "GitHub request rejected: {}", body);

        Err(ConnectorError::Upstream { status, body })
    }
}

#[async_trait::async_trait]
impl GithubConnector for GithubClient {
    fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    async fn create_repository(
        &self,
        request: &CreateRepository,
    ) -> Result<RepositoryInfo, ConnectorError> {
        let span = tracing::info_span!("github_create_repository", name = %request.name);
        let url = format!("{}/user/repos", self.base_url);

        let resp = self
            .authorize(self.http_client.post(&url))?
            .json(request)
            .send()
            .instrument(span)
            .await?;
        let resp = Self::check_status(resp).await?;

        let text = resp
            .text()
            .await
            .map_err(|e| ConnectorError::HttpError(e.to_string()))?;
        serde_json::from_str::<RepositoryInfo>(&text)
            .map_err(|_| ConnectorError::InvalidResponse(text))
    }

    async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: &str,
    ) -> Result<(), ConnectorError> {
        let span = tracing::info_span!(
            "github_add_collaborator",
            owner = %owner,
            repo = %repo,
            username = %username
        );
        let url = format!(
            "{}/repos/{}/{}/collaborators/{}",
            self.base_url, owner, repo, username
        );

        let resp = self
            .authorize(self.http_client.put(&url))?
            .json(&serde_json::json!({ "permission": permission }))
            .send()
            .instrument(span)
            .await?;
        Self::check_status(resp).await?;

        Ok(())
    }
}
