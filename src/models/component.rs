use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, sqlx::FromRow)]
pub struct Component {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub language_type: String,
    pub category: String,
    pub is_premium: bool,
    pub code: String,
    pub preview_url: Option<String>,
    pub github_repo_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}
