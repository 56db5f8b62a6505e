// src/classify/manifests.rs
// =============================================================================
// This module finds dependency manifests by exact filename.
//
// The recognized set is a pinned list, not a pattern: adding a new ecosystem
// means adding its filename here and nowhere else. Every occurrence is
// recorded with its full path, so a monorepo with ten package.json files
// yields ten hits; display layers can deduplicate, the data never does.
// =============================================================================

use super::file_name;
use crate::github::PathEntry;

// The pinned manifest filename set. Lockfiles are listed alongside their
// manifests because a lockfile without its manifest is still a strong
// dependency signal.
const MANIFEST_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "requirements.txt",
    "pyproject.toml",
    "Pipfile",
    "Pipfile.lock",
    "poetry.lock",
    "go.mod",
    "go.sum",
    "Cargo.toml",
    "Cargo.lock",
    "pom.xml",
    "build.gradle",
    "Gemfile",
    "Gemfile.lock",
    "composer.json",
    "composer.lock",
];

// Records every manifest occurrence, full path included, in input order
pub fn find_manifests(entries: &[PathEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| MANIFEST_FILES.contains(&file_name(&e.path)))
        .map(|e| e.path.clone())
        .collect()
}
