use crate::connectors::ConnectorConfig;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    /// Endpoint of the identity provider returning the user behind a bearer token
    pub auth_url: String,
    #[serde(default = "Settings::default_auth_cache_ttl")]
    pub auth_cache_ttl_secs: u64,
    #[serde(default)]
    pub subscription: SubscriptionSettings,
    #[serde(default)]
    pub connectors: ConnectorConfig,
}

impl Settings {
    const fn default_auth_cache_ttl() -> u64 {
        60
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubscriptionSettings {
    /// Validity window given to a freshly inserted subscription
    pub period_days: i64,
}

impl Default for SubscriptionSettings {
    fn default() -> Self {
        Self { period_days: 30 }
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // The GitHub token never lives in the yaml file
    if let Some(github) = config.connectors.github.as_mut() {
        if github.token.is_none() {
            github.token = std::env::var("GITHUB_TOKEN").ok();
        }
    }

    Ok(config)
}
