use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Catalog entry. `code` is left out when the reader may not see it.
#[derive(Debug, Serialize, Default)]
pub struct Listed {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub language_type: String,
    pub category: String,
    pub is_premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub preview_url: Option<String>,
    pub github_repo_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Listed {
    /// `code_visible` is the caller's access to the component's resource type;
    /// free components always carry their code.
    pub fn new(component: models::Component, code_visible: bool) -> Self {
        let code = (!component.is_premium || code_visible).then_some(component.code);
        Self {
            id: component.id,
            name: component.name,
            description: component.description,
            language_type: component.language_type,
            category: component.category,
            is_premium: component.is_premium,
            code,
            preview_url: component.preview_url,
            github_repo_id: component.github_repo_id,
            created_at: component.created_at,
        }
    }
}
