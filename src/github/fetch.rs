// src/github/fetch.rs
// =============================================================================
// This module talks to the GitHub API.
//
// Strategy:
// - Parse the "owner/repo" argument before touching the network
// - Fetch repository metadata from /repos/{owner}/{repo}
// - Fetch the full recursive file tree from /repos/{owner}/{repo}/git/trees
// - Try the "main" branch first; if it does not exist, retry once with
//   "master"; any other failure is reported as-is with no retry
//
// Authentication:
// - An optional bearer token raises the API rate limit. Without it the tool
//   still works, just against the lower anonymous quota.
//
// Rust concepts:
// - async functions: For network I/O
// - thiserror: A typed error enum so callers can tell "not found" apart
//   from "rate limited" or "network down"
// - Result and the ? operator: For error propagation
// =============================================================================

use anyhow::{anyhow, Result};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use super::types::{RepoSummary, TreeListing, TreeResponse};

// How the two fetch operations can fail
//
// The taxonomy matters for behavior: NotFound triggers the branch fallback
// (and eventually exit code 1), while everything else surfaces immediately
// with its cause and no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The repository or branch does not exist (HTTP 404)
    #[error("not found")]
    NotFound,

    /// The API rate limit was exhausted (HTTP 403/429)
    ///
    /// Setting GITHUB_TOKEN raises the limit considerably
    #[error("rate limited by the GitHub API (set GITHUB_TOKEN to raise the limit)")]
    RateLimited,

    /// Any other unexpected HTTP status
    #[error("unexpected HTTP status {0}")]
    Api(StatusCode),

    /// The request never completed (DNS failure, timeout, TLS error, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    /// Returns true for the "not found" class of failures, which is the only
    /// class that triggers the master-branch fallback
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

// Parses an "owner/repo" argument into its two halves
//
// Accepted: exactly one '/', with non-empty text on both sides.
// Anything else is a user-input error, raised before any network call.
//
// Example:
//   "rust-lang/rust" -> ("rust-lang", "rust")
pub fn parse_repo(arg: &str) -> Result<(String, String)> {
    let mut parts = arg.split('/');

    // split() always yields at least one item, so these two reads are safe;
    // the third read tells us whether there was more than one '/'
    let owner = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();

    if owner.is_empty() || name.is_empty() || parts.next().is_some() {
        return Err(anyhow!(
            "Invalid repository format '{}'. Expected 'owner/repo'.",
            arg
        ));
    }

    Ok((owner.to_string(), name.to_string()))
}

// Builds the HTTP client shared by all requests
//
// GitHub rejects requests without a User-Agent, so we always set one.
// The token, when present, is attached as a bearer Authorization header.
pub fn build_client(token: Option<&str>) -> Result<Client> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
    );

    if let Some(token) = token {
        let mut value = reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| anyhow!("GitHub token contains invalid header characters"))?;
        value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, value);
    }

    let client = Client::builder()
        .user_agent(concat!("repo-lens/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10)) // One bounded wait per call
        .default_headers(headers)
        .build()?;

    Ok(client)
}

// Fetches general repository metadata (stars, forks, description, ...)
//
// Parameters:
//   client: the shared HTTP client
//   owner, name: the two halves of the repository identifier
//
// Returns: RepoSummary on success, FetchError otherwise. The caller treats
// any failure here as "no summary available" and keeps going.
pub async fn fetch_metadata(
    client: &Client,
    owner: &str,
    name: &str,
) -> Result<RepoSummary, FetchError> {
    let url = format!("https://api.github.com/repos/{}/{}", owner, name);
    debug!("GET {}", url);

    let response = client.get(&url).send().await?;
    let summary = check_status(response)?.json::<RepoSummary>().await?;
    Ok(summary)
}

// Fetches the complete recursive file tree for one branch
//
// Parameters:
//   branch: the branch name to list (e.g. "main")
//
// Returns: a TreeListing recording the branch, every path entry in the
// API's order, and whether the API truncated the listing.
pub async fn fetch_tree(
    client: &Client,
    owner: &str,
    name: &str,
    branch: &str,
) -> Result<TreeListing, FetchError> {
    let url = format!(
        "https://api.github.com/repos/{}/{}/git/trees/{}?recursive=1",
        owner, name, branch
    );
    debug!("GET {}", url);

    let response = client.get(&url).send().await?;
    let decoded = check_status(response)?.json::<TreeResponse>().await?;

    Ok(TreeListing {
        branch: branch.to_string(),
        entries: decoded.tree,
        truncated: decoded.truncated,
    })
}

// Fetches the tree, trying "main" first and falling back to "master"
//
// Only a not-found failure triggers the fallback; a rate limit or network
// error on the first attempt surfaces immediately, because retrying under a
// different branch name would not help.
//
// The returned listing records which branch resolved, so a fallback fetch is
// indistinguishable from a direct one apart from the branch name.
pub async fn fetch_tree_with_fallback(
    client: &Client,
    owner: &str,
    name: &str,
) -> Result<TreeListing, FetchError> {
    match fetch_tree(client, owner, name, "main").await {
        Ok(listing) => Ok(listing),
        Err(e) if e.is_not_found() => {
            warn!(
                "branch 'main' not found for {}/{}, trying 'master'",
                owner, name
            );
            fetch_tree(client, owner, name, "master").await
        }
        Err(e) => Err(e),
    }
}

// Maps an HTTP response status onto our error taxonomy
//
// GitHub signals an exhausted rate limit as 403 (classic) or 429; both are
// reported as RateLimited so the user gets the token hint.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(FetchError::NotFound),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited),
        status => Err(FetchError::Api(status)),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a typed error enum here but anyhow everywhere else?
//    - Callers need to branch on the failure kind (the fallback only fires
//      on NotFound), and matching on an enum is how Rust expresses that
//    - anyhow::Error is fine when the only consumer is an error message;
//      thiserror is for errors that code needs to inspect
//    - #[from] gives us a free conversion, so ? still works on reqwest calls
//
// 2. What does set_sensitive(true) do?
//    - Marks the Authorization header so debug output never prints the token
//
// 3. Why does fetch_tree take the branch as a parameter?
//    - The main-then-master fallback is policy, not mechanics; keeping
//      fetch_tree branch-agnostic keeps the policy in one visible place
// -----------------------------------------------------------------------------
