// src/config.rs
// =============================================================================
// Runtime configuration for talking to the GitHub API.
//
// Values come from environment variables first, then command-line flags
// override them (see main.rs). Everything has a sensible default, so running
// with no configuration at all talks to api.github.com.
//
// Environment variables:
//   GITHUB_API_URL           base URL of the REST API
//   REPO_LENS_TIMEOUT_SECS   per-request timeout in seconds
//   REPO_LENS_USER_AGENT     User-Agent header (GitHub rejects requests without one)
// =============================================================================

use anyhow::{anyhow, Context, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("repo-lens/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API, always ending in '/'
    pub api_url: Url,
    /// Timeout applied to every request
    pub timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Reads settings through a lookup function so tests don't have to touch
    // the real (process-global) environment
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("GITHUB_API_URL") {
            config = config.with_api_url(&raw)?;
        }

        if let Some(raw) = lookup("REPO_LENS_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("REPO_LENS_TIMEOUT_SECS is not a number: {}", raw))?;
            config = config.with_timeout_secs(secs)?;
        }

        if let Some(agent) = lookup("REPO_LENS_USER_AGENT") {
            if !agent.trim().is_empty() {
                config.user_agent = agent.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Replaces the API base URL.
    ///
    /// A trailing slash is added when missing; without it `Url::join` would
    /// drop the last path segment of something like `https://host/api/v3`.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self> {
        let mut normalized = raw.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let url = Url::parse(&normalized)
            .map_err(|e| anyhow!("Invalid API URL '{}': {}", raw, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!("API URL must be http or https: {}", raw));
        }

        self.api_url = url;
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(anyhow!("Timeout must be at least 1 second"));
        }
        self.timeout = Duration::from_secs(secs);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("repo-lens/"));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
            ("REPO_LENS_TIMEOUT_SECS", "5"),
            ("REPO_LENS_USER_AGENT", "my-agent"),
        ]))
        .unwrap();

        assert_eq!(config.api_url.as_str(), "https://ghe.example.com/api/v3/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "my-agent");
    }

    #[test]
    fn test_invalid_timeout() {
        let result = Config::from_lookup(lookup_from(&[("REPO_LENS_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());

        let result = Config::from_lookup(lookup_from(&[("REPO_LENS_TIMEOUT_SECS", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_api_url() {
        assert!(Config::default().with_api_url("not a url").is_err());
        assert!(Config::default().with_api_url("ftp://example.com").is_err());
    }
}
