mod client;
mod connector;
pub mod init;
pub mod mock;
mod types;

#[cfg(test)]
mod tests;

pub use client::GithubClient;
pub use connector::GithubConnector;
pub use init::init;
pub use types::{CreateRepository, RepositoryInfo, RepositoryOwner};
