use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

/// Filters of the component catalog query. Empty strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ComponentQuery {
    #[validate(max_length = 50)]
    pub language_type: Option<String>,
    #[validate(max_length = 100)]
    pub category: Option<String>,
    #[validate(max_length = 100)]
    pub search_query: Option<String>,
    pub is_premium: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveComponent {
    pub component_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRepository {
    pub repo_id: Uuid,
}
