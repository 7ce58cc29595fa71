pub mod component;
pub mod github;
pub mod permission;
pub mod plan;
pub mod project;
pub mod subscription;
pub mod user_component;
