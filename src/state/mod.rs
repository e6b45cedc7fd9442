// src/state/mod.rs
// =============================================================================
// Observable state for the repository list.
//
// The holder sits between the GitHub fetcher and whoever displays the list:
// it runs fetches, keeps the latest list, and lets observers subscribe to
// changes.
// =============================================================================

mod holder;

pub use holder::{FetchOutcome, RepoListHolder, RepoListState};
