// src/github/record.rs
// =============================================================================
// The repository record: one entry from GitHub's "list user repositories"
// endpoint, reduced to the fields we actually display.
//
// GitHub sends a lot more (owner, urls, timestamps, ...). serde ignores any
// field we don't declare, so the struct stays small.
//
// Rust concepts:
// - serde derive: Generate JSON (de)serialization from the struct definition
// - #[serde(rename)]: Map GitHub's field names onto our own
// - Option<T>: Fields GitHub may send as null
// =============================================================================

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// One remote repository.
///
/// Records are never mutated after a fetch builds them; a new fetch replaces
/// the whole list instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// GitHub's numeric repository id
    pub id: u64,
    /// Repository name (without the owner prefix)
    pub name: String,
    /// Free-form description, `None` when the repo has none
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language as detected by GitHub
    #[serde(default)]
    pub language: Option<String>,
    /// Star count, sent by GitHub as `stargazers_count`
    #[serde(rename = "stargazers_count", alias = "stars", default)]
    pub stars: u32,
    /// Fork count, sent by GitHub as `forks_count`
    #[serde(rename = "forks_count", alias = "forks", default)]
    pub forks: u32,
}

impl Repository {
    /// Cleans up the text fields and checks the name.
    ///
    /// GitHub occasionally returns `""` or whitespace instead of null. We
    /// treat those exactly like a missing value so the placeholders
    /// ("No description", "Unknown") kick in at render time. A repository
    /// without a name can't be shown or handed off, so that's an error.
    pub fn normalized(mut self) -> Result<Self> {
        self.name = normalize(Some(self.name))
            .ok_or_else(|| anyhow!("Repository {} has no name", self.id))?;
        self.description = normalize(self.description);
        self.language = normalize(self.language);
        Ok(self)
    }
}

// Trims a string and turns "nothing left" into None
pub(super) fn normalize(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
