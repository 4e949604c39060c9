// GitHub API response types.
// Defines structs for deserializing user, repository, and user search responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub user profile as returned by `/users/{handle}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<u64>,
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub location: Option<String>,
}

impl Profile {
    /// Name to show in the header, falling back to the handle.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}

/// License attached to a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: Option<String>,
    pub spdx_id: Option<String>,
}

/// GitHub repository as listed by `/users/{handle}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub license: Option<License>,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

impl Repository {
    /// Upper-cased license key (e.g. "MIT", "APACHE-2.0").
    pub fn license_code(&self) -> Option<String> {
        self.license
            .as_ref()
            .map(|license| license.key.to_uppercase())
    }
}

/// Lightweight user record shown in the search dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Response wrapper for `/search/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchUsersResponse {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_with_nulls() {
        let json = r#"{
            "id": 9919,
            "login": "github",
            "name": null,
            "bio": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/9919?v=4",
            "followers": 54321,
            "following": 0,
            "location": null,
            "public_repos": 500
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, Some(9919));
        assert_eq!(profile.display_name(), "github");
        assert_eq!(profile.followers, 54321);
        assert!(profile.bio.is_none());
        assert!(profile.location.is_none());
    }

    #[test]
    fn test_profile_display_name() {
        let json = r#"{
            "login": "octocat",
            "name": "The Octocat",
            "bio": "Mascot",
            "avatar_url": "https://example.com/a.png",
            "location": "San Francisco"
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name(), "The Octocat");
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
    }

    #[test]
    fn test_repository_license_code() {
        let json = r#"{
            "id": 1,
            "name": "linguist",
            "description": null,
            "license": { "key": "mit", "name": "MIT License", "spdx_id": "MIT" },
            "forks_count": 4000,
            "stargazers_count": 12000,
            "updated_at": "2024-05-01T12:00:00Z",
            "html_url": "https://github.com/github/linguist"
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.license_code().as_deref(), Some("MIT"));
        assert!(repo.description.is_none());

        let unlicensed = Repository {
            license: None,
            ..repo
        };
        assert_eq!(unlicensed.license_code(), None);
    }

    #[test]
    fn test_search_response() {
        let json = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                { "id": 1, "login": "octocat", "avatar_url": "https://example.com/1.png", "type": "User" },
                { "id": 2, "login": "octo-org", "avatar_url": "https://example.com/2.png", "type": "Organization" }
            ]
        }"#;

        let response: SearchUsersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].login, "octocat");
        assert!(response.items[1].bio.is_none());
    }
}
