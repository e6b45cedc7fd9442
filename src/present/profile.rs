// src/present/profile.rs
// =============================================================================
// The profile header printed above a user's repository list.
// =============================================================================

use std::io::{self, Write};

use crate::github::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeader {
    pub title: String,
    /// Bio and location, whichever the user filled in
    pub details: Vec<String>,
    pub counts: String,
}

impl ProfileHeader {
    pub fn new(user: &UserProfile) -> Self {
        let title = match &user.name {
            Some(name) => format!("👤 {} ({})", name, user.login),
            None => format!("👤 {}", user.login),
        };

        let mut details = Vec::new();
        if let Some(bio) = &user.bio {
            details.push(bio.clone());
        }
        if let Some(location) = &user.location {
            details.push(format!("📍 {}", location));
        }

        Self {
            title,
            details,
            counts: format!(
                "📚 {} repos · 👥 {} followers · {} following",
                user.public_repos, user.followers, user.following
            ),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.title)?;
        for line in &self.details {
            writeln!(out, "   {}", line)?;
        }
        writeln!(out, "   {}", self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octocat() -> UserProfile {
        UserProfile {
            id: 583231,
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            bio: None,
            location: Some("San Francisco".to_string()),
            public_repos: 8,
            followers: 9000,
            following: 9,
        }
    }

    #[test]
    fn test_header_with_display_name() {
        let header = ProfileHeader::new(&octocat());
        assert_eq!(header.title, "👤 The Octocat (octocat)");
        assert_eq!(header.details, vec!["📍 San Francisco".to_string()]);
        assert_eq!(header.counts, "📚 8 repos · 👥 9000 followers · 9 following");
    }

    #[test]
    fn test_header_without_optional_fields() {
        let mut user = octocat();
        user.name = None;
        user.location = None;

        let header = ProfileHeader::new(&user);
        assert_eq!(header.title, "👤 octocat");
        assert!(header.details.is_empty());

        let mut out = Vec::new();
        header.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "👤 octocat\n   📚 8 repos · 👥 9000 followers · 9 following\n"
        );
    }
}
