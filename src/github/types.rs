// src/github/types.rs
// =============================================================================
// This module defines the data types we decode from the GitHub API.
//
// Two endpoints feed the whole tool:
// - The repository endpoint (stars, forks, issues, description, branch)
// - The recursive tree endpoint (a flat list of every path in the repo)
//
// Everything here is immutable once decoded: the fetcher builds these values,
// hands them to the classifier and the presentation layer, and nothing
// mutates them afterwards.
//
// Rust concepts:
// - Derive macros: serde generates the JSON decoding code for us
// - Enums: EntryKind models the "type" discriminator of a tree entry
// - Default values: #[serde(default)] tolerates fields the API omits
// =============================================================================

use serde::{Deserialize, Serialize};

// One record from the recursive tree listing
//
// The API returns more fields (sha, mode, size, url) but the inspector only
// ever looks at the path and the blob/tree discriminator, so that is all we
// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Path relative to the repository root, e.g. "src/main.rs"
    pub path: String,
    /// Whether this entry is a file (blob) or a directory (tree)
    ///
    /// The API field is called "type", which is a reserved word in Rust,
    /// so we rename it during (de)serialization
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl PathEntry {
    /// Convenience constructor, mostly used by tests
    pub fn blob(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: EntryKind::Blob,
        }
    }

    /// Convenience constructor for directory entries
    pub fn tree(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: EntryKind::Tree,
        }
    }

    /// Returns true if this entry is a file
    pub fn is_blob(&self) -> bool {
        matches!(self.kind, EntryKind::Blob)
    }
}

// The "type" discriminator of a tree entry
//
// Submodule pointers show up as "commit"; anything we don't recognize is
// folded into Other instead of failing the whole decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    #[serde(other)]
    Other,
}

// The decoded tree endpoint response
//
// This is the raw JSON shape; the fetcher converts it into a TreeListing
// (below) which also records which branch actually resolved.
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    /// The flat, recursive list of entries
    pub tree: Vec<PathEntry>,
    /// Set by the API when the repository is too large to list completely.
    /// We surface this to the user instead of silently dropping it.
    #[serde(default)]
    pub truncated: bool,
}

// A complete tree listing, ready for classification
#[derive(Debug, Clone)]
pub struct TreeListing {
    /// The branch that actually resolved ("main" or the "master" fallback)
    pub branch: String,
    /// Every path in the repository, in the API's order
    pub entries: Vec<PathEntry>,
    /// True when the API could not return the complete listing
    pub truncated: bool,
}

// General repository metadata
//
// Sourced verbatim from the repository endpoint. Absent fields decode to
// zero/None and render as placeholders; there are no derived invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_path_entry() {
        let entry: PathEntry =
            serde_json::from_str(r#"{"path": "src/main.rs", "type": "blob"}"#).unwrap();
        assert_eq!(entry.path, "src/main.rs");
        assert_eq!(entry.kind, EntryKind::Blob);
        assert!(entry.is_blob());
    }

    #[test]
    fn test_decode_unknown_kind() {
        // Submodules come back as "commit"; the decode must not fail
        let entry: PathEntry =
            serde_json::from_str(r#"{"path": "vendor/lib", "type": "commit"}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::Other);
        assert!(!entry.is_blob());
    }

    #[test]
    fn test_decode_tree_response_without_truncated() {
        // "truncated" defaults to false when the API omits it
        let response: TreeResponse =
            serde_json::from_str(r#"{"tree": [{"path": "README.md", "type": "blob"}]}"#).unwrap();
        assert_eq!(response.tree.len(), 1);
        assert!(!response.truncated);
    }

    #[test]
    fn test_decode_summary_with_missing_fields() {
        let summary: RepoSummary = serde_json::from_str(r#"{"stargazers_count": 7}"#).unwrap();
        assert_eq!(summary.stargazers_count, 7);
        assert_eq!(summary.forks_count, 0);
        assert_eq!(summary.description, None);
    }
}
