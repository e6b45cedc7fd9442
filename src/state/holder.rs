// src/state/holder.rs
// =============================================================================
// The repository list state holder.
//
// It owns the list of repositories currently on screen and publishes every
// change through a tokio `watch` channel. Anyone interested (the CLI, tests)
// calls subscribe() and gets a Receiver that always holds the latest
// snapshot. Dropping the Receiver is all it takes to unsubscribe.
//
// A fetch works like this:
// 1. fetch_repositories() bumps the in-flight counter (observers see "loading")
// 2. A tokio task calls the RepoFetcher
// 3. On success the whole list is swapped for the new one
//    On failure the list is left alone and the error is recorded
// 4. Either way observers are notified
//
// Overlapping fetches are not coordinated: each runs to completion and the
// one that finishes last decides what's on screen.
//
// Rust concepts:
// - Arc: Shared ownership between the holder and its spawned tasks
// - watch channel: Single-value broadcast, readers always see a full snapshot
// - JoinSet: A set of tasks that are all aborted when the set is dropped
// =============================================================================

use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinSet};

use crate::github::{RepoFetcher, Repository};

/// How the most recent fetch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced with `count` repositories of `username`
    Success { username: String, count: usize },
    /// The fetch failed; the list kept its previous value
    Failure { username: String, reason: String },
}

/// One snapshot of everything an observer can see
#[derive(Debug, Clone, Default)]
pub struct RepoListState {
    /// The current list, replaced as a whole on every successful fetch
    pub repos: Arc<Vec<Repository>>,
    /// Number of fetches that have been started but not finished
    pub in_flight: usize,
    /// Result of the fetch that finished last, if any
    pub last_outcome: Option<FetchOutcome>,
}

impl RepoListState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// The failure reason when the last finished fetch failed
    pub fn error(&self) -> Option<&str> {
        match &self.last_outcome {
            Some(FetchOutcome::Failure { reason, .. }) => Some(reason),
            _ => None,
        }
    }
}

pub struct RepoListHolder {
    fetcher: Arc<dyn RepoFetcher>,
    state: Arc<watch::Sender<RepoListState>>,
    // Dropping the holder drops this set, which aborts every running fetch.
    // That keeps results from being published after the owner is gone.
    tasks: JoinSet<()>,
}

impl RepoListHolder {
    /// Creates a holder with an empty list and no fetch running
    pub fn new(fetcher: Arc<dyn RepoFetcher>) -> Self {
        let (sender, _receiver) = watch::channel(RepoListState::default());
        Self {
            fetcher,
            state: Arc::new(sender),
            tasks: JoinSet::new(),
        }
    }

    /// Registers a new observer; drop the receiver to unsubscribe
    pub fn subscribe(&self) -> watch::Receiver<RepoListState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state (cheap: the list is behind an Arc)
    pub fn state(&self) -> RepoListState {
        self.state.borrow().clone()
    }

    /// Starts fetching `username`'s repositories in the background.
    ///
    /// Returns immediately. Must be called from inside a tokio runtime.
    pub fn fetch_repositories(&mut self, username: &str) {
        // Drop the handles of fetches that already finished, so a long-lived
        // holder doesn't keep one per fetch
        while let Some(joined) = self.tasks.try_join_next() {
            self.settle(joined);
        }

        let username = username.to_string();
        debug!("starting fetch for '{}'", username);

        self.state.send_modify(|state| state.in_flight += 1);

        let fetcher = Arc::clone(&self.fetcher);
        let state = Arc::clone(&self.state);

        self.tasks.spawn(async move {
            let result = fetcher.fetch_repositories(&username).await;

            // send_modify publishes even when nobody is subscribed, so the
            // holder's own snapshot stays current
            state.send_modify(|current| {
                current.in_flight = current.in_flight.saturating_sub(1);

                match result {
                    Ok(repos) => {
                        info!("fetched {} repositories for '{}'", repos.len(), username);
                        current.last_outcome = Some(FetchOutcome::Success {
                            username,
                            count: repos.len(),
                        });
                        current.repos = Arc::new(repos);
                    }
                    Err(e) => {
                        let reason = format!("{:#}", e);
                        warn!("fetch for '{}' failed: {}", username, reason);
                        current.last_outcome = Some(FetchOutcome::Failure { username, reason });
                    }
                }
            });
        });
    }

    /// Waits until every fetch started so far has finished
    pub async fn wait_idle(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            self.settle(joined);
        }
    }

    // Bookkeeping for a task taken out of the JoinSet
    fn settle(&self, joined: Result<(), JoinError>) {
        if let Err(e) = joined {
            // A panicking fetcher never reached its own bookkeeping
            warn!("fetch task ended abnormally: {}", e);
            self.state
                .send_modify(|state| state.in_flight = state.in_flight.saturating_sub(1));
        }
    }
}
