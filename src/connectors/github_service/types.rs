use serde::{Deserialize, Serialize};

/// Body of `POST /user/repos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRepository {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub auto_init: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepositoryOwner {
    pub login: String,
}

/// Subset of the repository object GitHub returns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepositoryInfo {
    pub id: i64,
    pub name: String,
    pub html_url: String,
    pub private: bool,
    pub owner: RepositoryOwner,
}
