pub mod component;
pub mod github;
pub mod permission;
pub mod plan;
pub mod project;
pub mod subscription;
pub mod user;

pub use component::*;
pub use github::*;
pub use permission::*;
pub use plan::*;
pub use project::*;
pub use subscription::*;
pub use user::*;
