// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific:
//
// - Parsing the "owner/repo" argument
// - Fetching repository metadata (stars, forks, description)
// - Fetching the full recursive file tree, with the main -> master
//   branch fallback
//
// The rest of the application never builds a URL or inspects an HTTP status;
// it consumes the decoded types re-exported here.
// =============================================================================

mod fetch;
mod types;

// Re-export the public API so callers write `github::fetch_tree_with_fallback`
// instead of reaching into submodules
pub use fetch::{
    build_client, fetch_metadata, fetch_tree, fetch_tree_with_fallback, parse_repo, FetchError,
};
pub use types::{EntryKind, PathEntry, RepoSummary, TreeListing};
