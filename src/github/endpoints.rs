// GitHub API endpoint functions.
// Typed methods for the three read-only lookups the app performs.

use crate::error::{GhError, Result};

use super::client::GitHubClient;
use super::types::{Profile, Repository, SearchUsersResponse, Suggestion};

impl GitHubClient {
    /// Get a user profile by handle.
    pub async fn get_user(&self, handle: &str) -> Result<Profile> {
        let response = self.get(&user_path(handle, "")?).await?;
        let profile: Profile = response.json().await?;
        Ok(profile)
    }

    /// Get public repositories for a user, in the order GitHub returns them.
    pub async fn get_user_repos(&self, handle: &str) -> Result<Vec<Repository>> {
        let response = self.get(&user_path(handle, "/repos")?).await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Search users matching a free-text query.
    pub async fn search_users(&self, query: &str) -> Result<Vec<Suggestion>> {
        let params = [("q", query)];
        let response = self.get_with_params("/search/users", &params).await?;
        let wrapper: SearchUsersResponse = response.json().await?;
        Ok(wrapper.items)
    }
}

/// `/users/{handle}{suffix}` with the handle kept as one path segment.
fn user_path(handle: &str, suffix: &str) -> Result<String> {
    // Dot segments survive encoding and would be collapsed by the URL parser
    if matches!(handle, "" | "." | "..") {
        return Err(GhError::Other(format!("Invalid handle: {:?}", handle)));
    }
    Ok(format!("/users/{}{}", urlencoding::encode(handle), suffix))
}
