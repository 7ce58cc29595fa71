use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub github: Option<GithubConfig>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            github: Some(GithubConfig::default()),
        }
    }
}

/// GitHub REST API connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Enable/disable the GitHub integration (a mock is used when disabled)
    pub enabled: bool,
    /// API base URL, overridable for GitHub Enterprise or tests
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Server-held token (from env: GITHUB_TOKEN)
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.github.com".to_string(),
            timeout_secs: 15,
            token: None,
        }
    }
}
