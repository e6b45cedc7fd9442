// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - repos:  list a user's repositories (optionally open one of them)
// - detail: show the detail view for a repository, either fetched by
//           owner/repo or described on the command line
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "repo-lens",
    version,
    about = "List a GitHub user's repositories and inspect each one",
    long_about = "repo-lens fetches the public repositories of a GitHub user and shows them \
                  as a list. Pick a row with --open to see that repository's details."
)]
pub struct Cli {
    /// Show debug logging (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the GitHub REST API (overrides GITHUB_API_URL)
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides REPO_LENS_TIMEOUT_SECS)
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a user's repositories
    ///
    /// Example: repo-lens repos octocat --open 1
    Repos {
        /// GitHub username (e.g., octocat)
        username: String,

        /// Output the repositories as JSON instead of a list
        #[arg(long, conflicts_with = "open")]
        json: bool,

        /// Open the detail view for row N of the list (1-based)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        open: Option<u64>,

        /// Skip the profile header above the list
        #[arg(long)]
        no_profile: bool,
    },

    /// Show the detail view for one repository
    ///
    /// Example: repo-lens detail --repo octocat/hello-world
    /// Example: repo-lens detail --name hello-world --language C --stars 1500
    Detail {
        /// Fetch the repository from GitHub (owner/repo or a github.com URL)
        #[arg(
            long,
            value_name = "OWNER/REPO",
            conflicts_with_all = ["payload", "name", "description", "language", "stars", "forks"]
        )]
        repo: Option<String>,

        /// The whole hand-off payload as JSON,
        /// e.g. '{"repo_name":"hello-world","repo_stars":1500}'
        #[arg(long, conflicts_with_all = ["name", "description", "language", "stars", "forks"])]
        payload: Option<String>,

        /// Repository name
        #[arg(long, required_unless_present_any = ["payload", "repo"])]
        name: Option<String>,

        /// Repository description
        #[arg(long)]
        description: Option<String>,

        /// Primary language
        #[arg(long)]
        language: Option<String>,

        /// Star count
        #[arg(long)]
        stars: Option<u32>,

        /// Fork count
        #[arg(long)]
        forks: Option<u32>,
    },
}
