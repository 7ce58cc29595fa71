//! Subscription-tier access control.
//!
//! A user may read a gated resource iff one of their active, unexpired
//! subscriptions belongs to a plan whose permission row for that resource type
//! has `can_access = true`. Every missing link, and every storage error,
//! resolves to deny.

mod resolver;
mod source;

#[cfg(test)]
pub(crate) mod memory;

pub use resolver::AccessResolver;
pub use source::{AccessError, PermissionSource, PgPermissionSource};
