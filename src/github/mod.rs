// src/github/mod.rs
// =============================================================================
// This module handles talking to GitHub.
//
// Currently implements:
// - The Repository record (what one repo looks like to us)
// - The RepoFetcher trait (the capability "list repos for a username")
// - GithubClient, the reqwest-based implementation of that trait, which
//   also fetches single repositories and user profiles
// - UserProfile, the public profile shown above the list
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod record;
mod user;

// Re-export so callers can write `github::Repository`
pub use fetch::{parse_repo_slug, GithubClient, RepoFetcher};
pub use record::Repository;
pub use user::UserProfile;
