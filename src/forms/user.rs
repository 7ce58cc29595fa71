use crate::models::User as UserModel;
use serde_derive::{Deserialize, Serialize};

/// User object returned by the identity provider for a bearer token.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl TryInto<UserModel> for UserForm {
    type Error = String;

    fn try_into(self) -> Result<UserModel, Self::Error> {
        if self.id.trim().is_empty() {
            return Err("identity provider returned a user without id".to_string());
        }

        Ok(UserModel {
            id: self.id,
            email: self.email.unwrap_or_default(),
        })
    }
}
