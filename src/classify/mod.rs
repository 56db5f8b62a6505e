// src/classify/mod.rs
// =============================================================================
// This module is the core of the tool: a pure, rule-based classifier over
// the flat list of repository paths.
//
// Submodules, one per concern:
// - layout: architecture tags (src layout, monorepo, Django, Docker, CI)
// - manifests: dependency-manifest filenames, every occurrence recorded
// - languages: extension -> language histogram
// - security: sensitive-looking filenames
//
// classify() composes the four passes into one Classification. There is no
// I/O, no state and no error path anywhere in this module: the same input
// always produces the same output, and an empty input produces an empty
// (but valid) result.
//
// Rust concepts:
// - Pure functions: Every pass is a function over &[PathEntry]
// - Composition: classify() is nothing more than the four passes glued
//   together into a struct
// =============================================================================

mod languages;
mod layout;
mod manifests;
mod security;

pub use languages::LanguageCount;
pub use layout::{TAG_CI, TAG_DJANGO, TAG_DOCKERIZED, TAG_MONOREPO, TAG_SRC_LAYOUT};

use crate::github::PathEntry;
use serde::Serialize;

// The structured findings for one repository
//
// Everything a consumer needs: ordered tags, every manifest occurrence,
// the language histogram in first-seen order, and flagged paths in input
// order. Serializes directly into the --json report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Classification {
    /// Detected architecture tags, in fixed rule order
    pub architecture: Vec<String>,
    /// Full path of every recognized dependency manifest, duplicates kept
    pub manifests: Vec<String>,
    /// Language histogram in first-seen order
    pub languages: Vec<LanguageCount>,
    /// Sensitive-looking paths, in input order
    pub security_flags: Vec<String>,
}

impl Classification {
    /// The top `n` languages by file count, descending.
    ///
    /// The sort is stable, so languages with equal counts keep their
    /// first-seen order.
    pub fn top_languages(&self, n: usize) -> Vec<&LanguageCount> {
        let mut ranked: Vec<&LanguageCount> = self.languages.iter().collect();
        ranked.sort_by(|a, b| b.files.cmp(&a.files));
        ranked.truncate(n);
        ranked
    }
}

// Classifies a complete path listing
//
// Deterministic and total: never fails, never looks at anything beyond the
// entries it is given.
pub fn classify(entries: &[PathEntry]) -> Classification {
    Classification {
        architecture: layout::detect_architecture(entries),
        manifests: manifests::find_manifests(entries),
        languages: languages::count_languages(entries),
        security_flags: security::flag_sensitive_paths(entries),
    }
}

// The final segment of a path: "src/main.rs" -> "main.rs"
//
// Shared by every pass that matches on filenames.
pub(crate) fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the classifier split into four modules?
//    - Each rule family is independent: a path can be a manifest AND a
//      security flag at the same time, and no pass reads another's output
//    - Independent passes are trivially testable in isolation
//
// 2. Why Vec instead of HashMap for the histogram?
//    - Iteration order of a HashMap is random, and we promise first-seen
//      order so repeated runs print identical reports
//    - The histogram holds at most a couple dozen languages; a linear scan
//      is nowhere near a bottleneck at that size
//
// 3. What does pub(crate) mean?
//    - Visible to the whole crate but not to external users
//    - file_name is an implementation detail shared by the passes
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::PathEntry;
    use pretty_assertions::assert_eq;

    fn blobs(paths: &[&str]) -> Vec<PathEntry> {
        paths.iter().map(|p| PathEntry::blob(p)).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let result = classify(&[]);
        assert_eq!(result, Classification::default());
    }

    #[test]
    fn test_typical_typescript_repository() {
        let entries = blobs(&[
            "src/index.ts",
            "src/app.ts",
            "package.json",
            ".github/workflows/ci.yml",
            "Dockerfile",
        ]);
        let result = classify(&entries);

        assert_eq!(
            result.architecture,
            vec![TAG_SRC_LAYOUT, TAG_DOCKERIZED, TAG_CI]
        );
        assert_eq!(result.manifests, vec!["package.json"]);
        assert_eq!(
            result.languages,
            vec![LanguageCount {
                language: "TypeScript".to_string(),
                files: 2
            }]
        );
        assert!(result.security_flags.is_empty());
    }

    #[test]
    fn test_secret_files_flag_without_language() {
        let entries = blobs(&[".env", "id_rsa", "notes.txt"]);
        let result = classify(&entries);

        assert_eq!(result.security_flags, vec![".env", "id_rsa"]);
        // None of the three maps to a language: .env and id_rsa are flagged
        // names, and .txt is deliberately not in the extension table
        assert!(result.languages.is_empty());
        assert!(result.architecture.is_empty());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let entries = blobs(&[
            "src/a.rs",
            "src/b.rs",
            "Cargo.toml",
            ".env.local",
            "docs/readme.md",
        ]);
        assert_eq!(classify(&entries), classify(&entries));
    }

    #[test]
    fn test_concatenation_merges_consistently() {
        // Classifying first ++ second must be a superset-consistent merge of
        // classifying each half: counts add, tags union, lists concatenate
        let first = blobs(&["src/a.py", "creds/secret.yaml", "requirements.txt"]);
        let second = blobs(&["tools/b.py", ".env", "go.mod"]);

        let combined_input: Vec<PathEntry> =
            first.iter().chain(second.iter()).cloned().collect();
        let combined = classify(&combined_input);
        let left = classify(&first);
        let right = classify(&second);

        // Language counts add up
        let py_combined = combined
            .languages
            .iter()
            .find(|c| c.language == "Python")
            .unwrap();
        assert_eq!(py_combined.files, 2);

        // Tag sets union (both halves carry "src layout" evidence only in
        // the first; the union is exactly the first's tags here)
        for tag in left.architecture.iter().chain(right.architecture.iter()) {
            assert!(combined.architecture.contains(tag));
        }

        // Flag and manifest lists concatenate, first half before second
        let mut expected_flags = left.security_flags.clone();
        expected_flags.extend(right.security_flags.clone());
        assert_eq!(combined.security_flags, expected_flags);

        let mut expected_manifests = left.manifests.clone();
        expected_manifests.extend(right.manifests.clone());
        assert_eq!(combined.manifests, expected_manifests);
    }

    #[test]
    fn test_top_languages_ranking_and_ties() {
        let entries = blobs(&["a.py", "b.rs", "c.rs", "d.go", "e.py", "f.md"]);
        let result = classify(&entries);

        let top = result.top_languages(2);
        assert_eq!(top.len(), 2);
        // Python and Rust both have 2 files; Python was seen first, and the
        // stable sort keeps it ahead
        assert_eq!(top[0].language, "Python");
        assert_eq!(top[1].language, "Rust");
    }

    #[test]
    fn test_one_path_can_satisfy_multiple_rules() {
        // A manifest with a suspicious name counts for both passes
        let entries = blobs(&["secrets/package.json"]);
        let result = classify(&entries);

        assert_eq!(result.manifests, vec!["secrets/package.json"]);
        // The filename itself is harmless; only a sensitive final segment
        // flags, and "package.json" is not one
        assert!(result.security_flags.is_empty());

        let entries = blobs(&["secret-config/.env"]);
        let result = classify(&entries);
        assert_eq!(result.security_flags, vec!["secret-config/.env"]);
    }
}
