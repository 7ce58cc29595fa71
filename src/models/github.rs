use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, sqlx::FromRow)]
pub struct GithubRepository {
    pub id: Uuid,
    pub repo_name: String,
    pub repo_owner: String,
    pub repo_url: String,
    pub is_private: bool,
    pub github_repo_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, sqlx::FromRow)]
pub struct GithubCollaborator {
    pub id: Uuid,
    pub repository_id: Uuid,
    pub email: String,
    pub permission_level: String,
    pub created_at: Option<DateTime<Utc>>,
}
