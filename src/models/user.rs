use serde::{Deserialize, Serialize};

/// Identity resolved from the auth provider for the current request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}
