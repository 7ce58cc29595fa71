use crate::models;
use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub plan: Option<models::Plan>,
    pub saved_components: i64,
    pub projects: i64,
}
