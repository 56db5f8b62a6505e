// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is described with Rust structs
// and attributes, and clap generates all the parsing code, --help text and
// error messages from them.
//
// Two subcommands share the same positional argument:
// - report: fetch, classify and print the static report
// - browse: fetch and open the interactive tree browser
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "repo-lens",
    version,
    about = "Inspect the structure of a GitHub repository without cloning it",
    long_about = "repo-lens fetches a repository's metadata and file tree from the GitHub API \
                  and renders a heuristic summary: layout, languages, dependency manifests \
                  and files that look like committed secrets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

// The subcommands the user can run
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a structural/security report for a repository
    ///
    /// Example: repo-lens report rust-lang/rust
    Report {
        /// The repository to inspect, in 'owner/repo' format
        ///
        /// This is a positional argument (required, no flag needed)
        repo: String,

        /// Output the full findings as JSON instead of a report
        #[arg(long)]
        json: bool,

        /// GitHub bearer token; raises the API rate limit
        ///
        /// Falls back to the GITHUB_TOKEN environment variable. Without a
        /// token everything still works, just against the anonymous quota.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Explore a repository's file tree interactively
    ///
    /// Example: repo-lens browse rust-lang/rust
    Browse {
        /// The repository to explore, in 'owner/repo' format
        repo: String,

        /// GitHub bearer token; raises the API rate limit
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}
