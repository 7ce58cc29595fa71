use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

/// One cell of the plan × resource-type matrix. A missing cell means deny.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AccessPermission {
    #[serde(skip_serializing)]
    pub plan_id: Uuid,
    pub resource_type: String,
    pub can_access: bool,
}

pub const GITHUB_INTEGRATION: &str = "github-integration";

/// Resource type gating the components of one language, e.g. `React` -> `react-components`.
pub fn component_resource_type(language_type: &str) -> String {
    format!("{}-components", language_type.trim().to_lowercase())
}
