pub mod access;

pub use access::{AccessError, AccessResolver, PermissionSource, PgPermissionSource};
