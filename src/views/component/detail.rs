use crate::models;
use serde::Serialize;

/// Full component as shown on its page. `saved` only for signed-in readers.
#[derive(Debug, Serialize)]
pub struct Detail {
    #[serde(flatten)]
    pub component: models::Component,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
}

impl From<models::Component> for Detail {
    fn from(component: models::Component) -> Self {
        Self {
            component,
            saved: None,
        }
    }
}
