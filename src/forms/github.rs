use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

/// Raw body of `POST /github`; `data` is interpreted per action.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRequest {
    pub action: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepo {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: String,
    #[serde(default)]
    #[validate(max_length = 350)]
    pub description: String,
    #[serde(default = "CreateRepo::default_private")]
    pub is_private: bool,
}

impl CreateRepo {
    const fn default_private() -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorPermission {
    Pull,
    #[default]
    Push,
    Admin,
}

impl CollaboratorPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCollaborator {
    pub repo_id: Uuid,
    /// GitHub login or e-mail of the invitee
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub email: String,
    #[serde(default)]
    pub permission: CollaboratorPermission,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCollaborators {
    pub repo_id: Uuid,
}

#[derive(Debug, Clone)]
pub enum GithubAction {
    CreateRepo(CreateRepo),
    AddCollaborator(AddCollaborator),
    ListRepos,
    ListCollaborators(ListCollaborators),
}

fn parse_data<T: serde::de::DeserializeOwned>(data: Option<serde_json::Value>) -> Result<T, String> {
    let data = data.ok_or_else(|| "Missing data".to_string())?;
    serde_json::from_value(data).map_err(|err| format!("Invalid data: {}", err))
}

impl TryFrom<GithubRequest> for GithubAction {
    type Error = String;

    fn try_from(request: GithubRequest) -> Result<Self, Self::Error> {
        let action = match request.action.as_str() {
            "create_repo" => {
                let form: CreateRepo = parse_data(request.data)?;
                form.validate().map_err(|err| err.to_string())?;
                GithubAction::CreateRepo(form)
            }
            "add_collaborator" => {
                let form: AddCollaborator = parse_data(request.data)?;
                form.validate().map_err(|err| err.to_string())?;
                GithubAction::AddCollaborator(form)
            }
            "list_repos" => GithubAction::ListRepos,
            "list_collaborators" => GithubAction::ListCollaborators(parse_data(request.data)?),
            _ => return Err("Invalid action".to_string()),
        };

        Ok(action)
    }
}
