pub mod component;
pub mod profile;
