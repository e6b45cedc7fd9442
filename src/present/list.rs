// src/present/list.rs
// =============================================================================
// The list adapter: turns a list of repositories into rows on screen.
//
// Each row shows:
// - the repository name
// - the description, or "No description"
// - the star count with a ⭐ in front
//
// Activating a row (picking it by index) doesn't fetch anything. It hands
// the row's fields over to the detail view.
//
// update_data() swaps the whole list and redraws every row. There is no
// diffing; lists here are one page of a user's repos, so it stays cheap.
// =============================================================================

use std::io::{self, Write};
use std::sync::Arc;

use super::detail::HandOff;
use crate::github::Repository;

pub const NO_DESCRIPTION: &str = "No description";

/// The text shown for one repository in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRow {
    pub name: String,
    pub description: String,
    pub stars: String,
}

impl RepoRow {
    fn new(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            stars: format!("⭐ {}", repo.stars),
        }
    }
}

#[derive(Debug, Default)]
pub struct ListAdapter {
    repos: Arc<Vec<Repository>>,
    rows: Vec<RepoRow>,
}

impl ListAdapter {
    pub fn new(repos: Arc<Vec<Repository>>) -> Self {
        let mut adapter = Self::default();
        adapter.update_data(repos);
        adapter
    }

    /// Replaces the bound list and redraws every row
    pub fn update_data(&mut self, repos: Arc<Vec<Repository>>) {
        self.rows = repos.iter().map(RepoRow::new).collect();
        self.repos = repos;
    }

    pub fn item_count(&self) -> usize {
        self.repos.len()
    }

    pub fn rows(&self) -> &[RepoRow] {
        &self.rows
    }

    /// Row activation: the payload for the detail view, or None when
    /// `index` (0-based) is past the end of the list
    pub fn activate(&self, index: usize) -> Option<HandOff> {
        self.repos.get(index).map(HandOff::from)
    }

    /// Prints the rows as a numbered list (numbers start at 1)
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.rows().is_empty() {
            writeln!(out, "⚠️  No repositories found")?;
            return Ok(());
        }

        for (i, row) in self.rows().iter().enumerate() {
            writeln!(out, "{:>3}. {:<50} {}", i + 1, row.name, row.stars)?;
            writeln!(out, "     {}", row.description)?;
        }
        Ok(())
    }
}
