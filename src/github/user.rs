// src/github/user.rs
// =============================================================================
// A GitHub user's public profile, as returned by `GET /users/{username}`.
//
// Only the fields shown in the profile header above the repository list are
// kept; serde drops the rest (avatar, urls, timestamps, ...).
// =============================================================================

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::record::normalize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    /// The handle, e.g. "octocat"
    pub login: String,
    /// Display name, e.g. "The Octocat"
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

impl UserProfile {
    /// Same cleanup as Repository::normalized: blank text becomes None,
    /// a blank login is an error
    pub fn normalized(mut self) -> Result<Self> {
        self.login = normalize(Some(self.login))
            .ok_or_else(|| anyhow!("User {} has no login", self.id))?;
        self.name = normalize(self.name);
        self.bio = normalize(self.bio);
        self.location = normalize(self.location);
        Ok(self)
    }
}
