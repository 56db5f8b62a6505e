// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Fetch, classify, render
// 4. Exit with proper code:
//      0 = success
//      1 = repository (or both branch names) could not be fetched
//      2 = malformed owner/repo argument, or an internal error
//
// The malformed-argument case is checked before any network call, so a typo
// never burns a request against the rate limit.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod classify; // src/classify/ - the path classification engine
mod cli; // src/cli.rs - command-line parsing
mod github; // src/github/ - GitHub API access
mod report; // src/report/ - static report rendering
mod tui; // src/tui/ - interactive tree browser

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // RUST_LOG=debug surfaces the fetch layer's request logging
    env_logger::init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // An unexpected error: print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { repo, json, token } => {
            handle_report(&repo, json, token.as_deref()).await
        }
        Commands::Browse { repo, token } => handle_browse(&repo, token.as_deref()).await,
    }
}

// Handles the 'report' subcommand
//
// Fetches metadata and the file tree, classifies the paths, prints the
// report. Metadata failures downgrade to placeholders; a tree that cannot
// be fetched under either branch name is fatal.
async fn handle_report(repo: &str, json: bool, token: Option<&str>) -> Result<i32> {
    let (owner, name) = match github::parse_repo(repo) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Ok(2);
        }
    };

    let client = github::build_client(token)?;

    let summary = match github::fetch_metadata(&client, &owner, &name).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            eprintln!("⚠️  Could not fetch repository metadata: {}", e);
            None
        }
    };

    let listing = match github::fetch_tree_with_fallback(&client, &owner, &name).await {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("❌ Could not retrieve the file tree for {}: {}", repo, e);
            eprintln!("   - Check that the repository is public and the name is correct.");
            eprintln!("   - The default branch might not be 'main' or 'master'.");
            return Ok(1);
        }
    };

    let classification = classify::classify(&listing.entries);
    report::print_report(repo, summary.as_ref(), &listing, &classification, json)?;

    Ok(0)
}

// Handles the 'browse' subcommand
//
// The browser reports fetch failures inside the UI; its exit code mirrors
// report mode (1 when the fetch never resolved).
async fn handle_browse(repo: &str, token: Option<&str>) -> Result<i32> {
    let (owner, name) = match github::parse_repo(repo) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Ok(2);
        }
    };

    tui::run_browser(&owner, &name, token).await
}
