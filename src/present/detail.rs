// src/present/detail.rs
// =============================================================================
// The detail view for a single repository.
//
// It never fetches anything. Everything it shows comes from the HandOff
// payload produced when a row in the list is activated, which mirrors the
// flat key/value "extras" a list screen passes to its detail screen.
//
// Rust concepts:
// - serde rename / default: Flat payload keys and defaults for missing counts
// - From trait: Convert a Repository into a HandOff
// - impl Write: Render into stdout, a file, or a Vec<u8> in tests
// =============================================================================

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use super::list::NO_DESCRIPTION;
use crate::github::Repository;

pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Fields handed from an activated list row to the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOff {
    #[serde(rename = "repo_name", default)]
    pub name: Option<String>,
    #[serde(rename = "repo_description", default)]
    pub description: Option<String>,
    #[serde(rename = "repo_language", default)]
    pub language: Option<String>,
    /// Defaults to 0 when the payload doesn't carry it
    #[serde(rename = "repo_stars", default)]
    pub stars: u32,
    #[serde(rename = "repo_forks", default)]
    pub forks: u32,
}

impl From<&Repository> for HandOff {
    fn from(repo: &Repository) -> Self {
        Self {
            name: Some(repo.name.clone()),
            description: repo.description.clone(),
            language: repo.language.clone(),
            stars: repo.stars,
            forks: repo.forks,
        }
    }
}

/// The formatted text of each line on the detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: String,
    pub forks: String,
}

impl DetailView {
    pub fn new(payload: &HandOff) -> Self {
        Self {
            name: payload.name.clone().unwrap_or_default(),
            description: payload
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            language: format!(
                "Language: {}",
                payload.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE)
            ),
            stars: format!("⭐ Stars: {}", payload.stars),
            forks: format!("🍴 Forks: {}", payload.forks),
        }
    }

    pub fn lines(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.description.as_str(),
            self.language.as_str(),
            self.stars.as_str(),
            self.forks.as_str(),
        ]
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "📦 {}", self.name)?;
        writeln!(out, "{}", "=".repeat(40))?;
        for line in &self.lines()[1..] {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_language_is_unknown() {
        let view = DetailView::new(&HandOff {
            name: Some("demo".to_string()),
            ..HandOff::default()
        });
        assert_eq!(view.language, "Language: Unknown");
        assert_eq!(view.description, "No description");
    }

    #[test]
    fn test_all_fields_present() {
        let view = DetailView::new(&HandOff {
            name: Some("hello-world".to_string()),
            description: Some("My first repository".to_string()),
            language: Some("C".to_string()),
            stars: 1500,
            forks: 300,
        });
        assert_eq!(
            view.lines(),
            [
                "hello-world",
                "My first repository",
                "Language: C",
                "⭐ Stars: 1500",
                "🍴 Forks: 300"
            ]
        );
    }

    #[test]
    fn test_payload_counts_default_to_zero() {
        let payload: HandOff = serde_json::from_str(r#"{"repo_name": "bare"}"#).unwrap();
        assert_eq!(payload.stars, 0);
        assert_eq!(payload.forks, 0);

        let view = DetailView::new(&payload);
        assert_eq!(view.stars, "⭐ Stars: 0");
        assert_eq!(view.forks, "🍴 Forks: 0");
    }

    #[test]
    fn test_payload_uses_flat_keys() {
        let payload = HandOff {
            name: Some("x".to_string()),
            description: None,
            language: Some("Go".to_string()),
            stars: 2,
            forks: 3,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["repo_name"], "x");
        assert_eq!(value["repo_language"], "Go");
        assert_eq!(value["repo_stars"], 2);
        assert_eq!(value["repo_forks"], 3);
        assert!(value["repo_description"].is_null());
    }

    #[test]
    fn test_render() {
        let view = DetailView::new(&HandOff {
            name: Some("demo".to_string()),
            ..HandOff::default()
        });
        let mut out = Vec::new();
        view.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("📦 demo\n"));
        assert!(text.contains("Language: Unknown\n"));
        assert!(text.ends_with("🍴 Forks: 0\n"));
    }
}
