// src/github/fetch.rs
// =============================================================================
// This module fetches data from the GitHub REST API.
//
// Endpoints (all public, no authentication):
// - GET /users/{username}/repos   a user's repositories (via RepoFetcher)
// - GET /repos/{owner}/{repo}     one repository
// - GET /users/{username}         a user's profile
//
// Strategy for the repository list:
// - Build `{api_url}/users/{username}/repos` with the url crate so the
//   username is escaped as a single path segment
// - Send one GET request (no pagination, no retry: first page only)
// - Deserialize the JSON array straight into Repository records
//
// The fetch is exposed through the RepoFetcher trait. The state holder only
// knows about the trait, so tests can swap the real HTTP client for a fake.
//
// Rust concepts:
// - Traits: An interface the state holder depends on
// - BoxFuture: A heap-allocated future, needed for async methods on trait objects
// - async functions: For network I/O
// - Result + Context: For error handling with a readable message chain
// =============================================================================

use anyhow::{anyhow, Context, Result};
use futures::future::{BoxFuture, FutureExt};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::record::Repository;
use super::user::UserProfile;
use crate::config::Config;

/// Media type GitHub recommends for REST API requests
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
/// Pinned REST API version
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Anything that can list a user's repositories.
///
/// One call means one remote request. The returned list keeps the order the
/// remote service used; nothing is re-sorted locally.
pub trait RepoFetcher: Send + Sync {
    fn fetch_repositories<'a>(&'a self, username: &'a str)
        -> BoxFuture<'a, Result<Vec<Repository>>>;
}

/// The real fetcher: talks to api.github.com (or whatever the config says)
pub struct GithubClient {
    client: Client,
    api_url: Url,
}

impl GithubClient {
    // Creates an HTTP client with the headers GitHub expects on every call
    //
    // We reuse this client for all requests (connection pooling)
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    // Appends path segments to the API base URL, escaping each one
    //
    // Example:
    //   api_url = https://api.github.com/, segments = ["users", "octocat", "repos"]
    //   -> https://api.github.com/users/octocat/repos
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API URL cannot take a path: {}", self.api_url))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    // Builds the "list repositories for a user" endpoint
    fn repos_url(&self, username: &str) -> Result<Url> {
        let username = required("Username", username)?;
        self.endpoint(&["users", username, "repos"])
    }

    // Sends a GET request and parses the JSON body into T
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch {}: HTTP {}",
                url,
                response.status()
            ));
        }

        response
            .json()
            .await
            .with_context(|| format!("Unexpected response body from {}", url))
    }

    // Fetches the list endpoint and cleans up every record
    async fn get_repositories(&self, url: Url) -> Result<Vec<Repository>> {
        let repos: Vec<Repository> = self.get_json(url).await?;
        debug!("received {} repositories", repos.len());

        repos
            .into_iter()
            .map(Repository::normalized)
            .collect::<Result<Vec<_>>>()
    }

    /// Fetches one repository (`GET /repos/{owner}/{repo}`)
    pub async fn fetch_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let url = self.endpoint(&[
            "repos",
            required("Owner", owner)?,
            required("Repository name", repo)?,
        ])?;

        let record: Repository = self
            .get_json(url)
            .await
            .with_context(|| format!("Could not fetch repository '{}/{}'", owner, repo))?;
        record.normalized()
    }

    /// Fetches a user's public profile (`GET /users/{username}`)
    pub async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let url = self.endpoint(&["users", required("Username", username)?])?;

        let user: UserProfile = self
            .get_json(url)
            .await
            .with_context(|| format!("Could not fetch profile for '{}'", username))?;
        user.normalized()
    }
}

impl RepoFetcher for GithubClient {
    fn fetch_repositories<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Repository>>> {
        async move {
            let url = self.repos_url(username)?;
            self.get_repositories(url)
                .await
                .with_context(|| format!("Could not list repositories for '{}'", username))
        }
        .boxed()
    }
}

// Trims a path value and rejects it when nothing is left
fn required<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(anyhow!("{} must not be empty", what));
    }
    Ok(value)
}

/// Splits a repository reference into (owner, repo)
///
/// Supported formats:
///   - owner/repo
///   - https://github.com/owner/repo
///   - https://github.com/owner/repo.git
///   - github.com/owner/repo
pub fn parse_repo_slug(input: &str) -> Result<(String, String)> {
    // Remove common prefixes
    let path = input
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");
    let path = path.strip_prefix("github.com/").unwrap_or(path);

    let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    if parts.len() != 2 {
        return Err(anyhow!("Expected owner/repo, got: {}", input));
    }

    let owner = parts[0].to_string();
    let repo = parts[1].trim_end_matches(".git").to_string();
    if repo.is_empty() {
        return Err(anyhow!("Expected owner/repo, got: {}", input));
    }

    Ok((owner, repo))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BoxFuture instead of `async fn` in the trait?
//    - The state holder stores the fetcher as Arc<dyn RepoFetcher>
//    - Trait objects need every method to return a concrete type
//    - BoxFuture<'a, T> is Pin<Box<dyn Future<Output = T> + Send + 'a>>,
//      one concrete type no matter which implementation produced it
//    - .boxed() (from FutureExt) turns an async block into a BoxFuture
//
// 2. Why path_segments_mut() instead of format!()?
//    - format!("{}/users/{}/repos", ...) would let a username like "a/b"
//      change the request path
//    - path_segments_mut().extend(...) percent-encodes each segment
//
// 3. What does .with_context() do?
//    - Wraps an error with a higher-level message
//    - Printing with {:#} shows the whole chain:
//      "Could not list repositories for 'x': Failed to fetch ...: HTTP 404"
// -----------------------------------------------------------------------------
