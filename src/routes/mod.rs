pub mod access;
pub mod component;
pub mod dashboard;
pub mod github;
pub mod health_checks;
pub mod plan;
pub mod profile;
pub mod project;
pub mod subscription;

pub use health_checks::*;
