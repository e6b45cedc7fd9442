// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and configuration
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = fetch failed, 2 = error)
//
// For `repos` the pieces fit together like this:
//   RepoListHolder fetches --> watch channel --> settled state --> ListAdapter rows
//   --open N activates a row --> HandOff --> DetailView
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - API URL, timeout, user agent
mod github;        // src/github/ - GitHub API access
mod present;       // src/present/ - list rows and detail view
mod state;         // src/state/ - observable repository list

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, warn};

use cli::{Cli, Commands};
use config::Config;
use github::{parse_repo_slug, GithubClient};
use present::{DetailView, HandOff, ListAdapter, ProfileHeader};
use state::{FetchOutcome, RepoListHolder, RepoListState};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = success
//   Ok(1) = the fetch failed
//   Err   = bad input or unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_api_url(url)?;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs)?;
    }
    debug!("using {:?}", config);

    match cli.command {
        Commands::Repos {
            username,
            json,
            open,
            no_profile,
        } => handle_repos(&username, json, open, !no_profile, &config).await,
        Commands::Detail {
            repo,
            payload,
            name,
            description,
            language,
            stars,
            forks,
        } => {
            let payload = match (repo, payload) {
                (Some(slug), _) => {
                    let (owner, repo) = parse_repo_slug(&slug)?;
                    let client = GithubClient::new(&config)?;
                    let record = client.fetch_repository(&owner, &repo).await?;
                    HandOff::from(&record)
                }
                (None, Some(raw)) => serde_json::from_str::<HandOff>(&raw)
                    .context("Invalid hand-off payload")?,
                (None, None) => HandOff {
                    name,
                    description,
                    language,
                    stars: stars.unwrap_or(0),
                    forks: forks.unwrap_or(0),
                },
            };
            handle_detail(&payload)
        }
    }
}

// Handles the 'repos' subcommand
//
// Parameters:
//   username: whose repositories to list
//   json: print the records as JSON instead of rows
//   open: 1-based row to activate after the list is shown
//   profile: print the user's profile header above the list
async fn handle_repos(
    username: &str,
    json: bool,
    open: Option<u64>,
    profile: bool,
    config: &Config,
) -> Result<i32> {
    let client = Arc::new(GithubClient::new(config)?);
    let mut holder = RepoListHolder::new(client.clone());
    let mut observer = holder.subscribe();

    if !json {
        println!("🔍 Fetching repositories for {}", username);
    }

    // The list loads in the background while the profile is fetched here
    holder.fetch_repositories(username);

    if profile && !json {
        match client.fetch_user(username).await {
            Ok(user) => {
                ProfileHeader::new(&user).render(&mut io::stdout().lock())?;
                println!();
            }
            // The header is optional, the list decides the exit code
            Err(e) => warn!("No profile header: {:#}", e),
        }
    }

    // Wait until the observer sees a settled list. wait_idle is raced
    // alongside so a fetch task that dies without publishing still ends
    // the wait.
    let state: RepoListState = tokio::select! {
        biased;
        seen = async { observer.wait_for(|s| !s.is_loading()).await.map(|s| (*s).clone()) } => {
            seen.map_err(|_| anyhow!("Repository list closed before loading finished"))?
        }
        _ = holder.wait_idle() => holder.state(),
    };

    if let Some(reason) = state.error() {
        eprintln!("❌ {}", reason);
        return Ok(1);
    }
    if let Some(FetchOutcome::Success { username, count }) = &state.last_outcome {
        debug!("loaded {} repositories for {}", count, username);
    }

    let adapter = ListAdapter::new(Arc::clone(&state.repos));

    if json {
        let json_output = serde_json::to_string_pretty(&*state.repos)?;
        println!("{}", json_output);
        return Ok(0);
    }

    println!("📄 Found {} repositories\n", adapter.item_count());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    adapter.render(&mut out)?;

    if let Some(row) = open {
        let index = usize::try_from(row - 1)?;
        let payload = adapter.activate(index).ok_or_else(|| {
            anyhow!(
                "Row {} does not exist (the list has {} rows)",
                row,
                adapter.item_count()
            )
        })?;

        writeln!(out)?;
        DetailView::new(&payload).render(&mut out)?;
    }

    Ok(0)
}

// Handles the 'detail' subcommand
fn handle_detail(payload: &HandOff) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    DetailView::new(payload).render(&mut out)?;
    Ok(0)
}
