// src/present/mod.rs
// =============================================================================
// Terminal presentation for repositories.
//
// Submodules:
// - list: ListAdapter binds a list of repositories to rows
// - detail: DetailView formats one repository from a row's HandOff
// - profile: ProfileHeader formats the user shown above the list
//
// Nothing in here does I/O other than writing to the io::Write it's given,
// which keeps all of it easy to test.
// =============================================================================

mod detail;
mod list;
mod profile;

pub use detail::{DetailView, HandOff};
pub use list::ListAdapter;
pub use profile::ProfileHeader;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Repository;
    use std::sync::Arc;

    // Walks the whole path from a fetched record to the detail screen
    #[test]
    fn test_row_to_detail_scenario() {
        let adapter = ListAdapter::new(Arc::new(vec![Repository {
            id: 1,
            name: "hello-world".to_string(),
            description: None,
            language: Some("C".to_string()),
            stars: 1500,
            forks: 300,
        }]));

        let row = &adapter.rows()[0];
        assert_eq!(row.name, "hello-world");
        assert_eq!(row.description, "No description");
        assert_eq!(row.stars, "⭐ 1500");

        let view = DetailView::new(&adapter.activate(0).unwrap());
        assert_eq!(view.language, "Language: C");
        assert_eq!(view.stars, "⭐ Stars: 1500");
        assert_eq!(view.forks, "🍴 Forks: 300");
    }
}
