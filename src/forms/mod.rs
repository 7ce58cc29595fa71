pub mod component;
pub mod github;
pub mod subscription;
pub mod user;

pub use component::*;
pub use github::*;
pub use subscription::*;
pub use user::*;
