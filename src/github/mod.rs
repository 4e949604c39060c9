// GitHub API module.
// Provides the client and types for the user, repository, and search endpoints.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::*;
