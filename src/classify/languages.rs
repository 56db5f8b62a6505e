// src/classify/languages.rs
// =============================================================================
// This module builds the language histogram.
//
// Only file entries count; directories have no extension worth mapping.
// The extension table is pinned: an unrecognized or absent extension simply
// drops the file from the histogram. Plain text (.txt) is deliberately not
// in the table, so a repository of notes reports no language at all.
//
// Ordering matters twice:
// - The histogram itself is kept in first-seen order, which makes counting
//   over two concatenated listings add up cleanly
// - top_languages() sorts by count with a stable sort, so ties keep their
//   first-seen order
// =============================================================================

use crate::github::PathEntry;
use serde::Serialize;

// The pinned extension -> language table
const LANGUAGE_TABLE: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".jsx", "JavaScript"),
    (".ts", "TypeScript"),
    (".tsx", "TypeScript"),
    (".go", "Go"),
    (".rs", "Rust"),
    (".java", "Java"),
    (".rb", "Ruby"),
    (".c", "C"),
    (".h", "C"),
    (".cpp", "C++"),
    (".md", "Markdown"),
    (".html", "HTML"),
    (".css", "CSS"),
    (".yml", "YAML"),
    (".yaml", "YAML"),
    (".json", "JSON"),
    (".sh", "Shell"),
    (".toml", "TOML"),
];

// One histogram bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub files: usize,
}

// Counts recognized file extensions per language, in first-seen order
pub fn count_languages(entries: &[PathEntry]) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();

    for entry in entries {
        if !entry.is_blob() {
            continue;
        }

        let Some(language) = language_for(&entry.path) else {
            continue;
        };

        // The table is small, so a linear scan beats a map here and keeps
        // the first-seen ordering for free
        match counts.iter_mut().find(|c| c.language == language) {
            Some(bucket) => bucket.files += 1,
            None => counts.push(LanguageCount {
                language: language.to_string(),
                files: 1,
            }),
        }
    }

    counts
}

// Maps a path's extension through the table
//
// The extension is everything from the final '.' of the final segment, so
// "archive.tar.gz" has extension ".gz" and a bare ".env" has extension
// ".env" (which the table does not contain).
fn language_for(path: &str) -> Option<&'static str> {
    let name = super::file_name(path);
    let dot = name.rfind('.')?;
    let ext = &name[dot..];

    LANGUAGE_TABLE
        .iter()
        .find(|(table_ext, _)| *table_ext == ext)
        .map(|(_, language)| *language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::PathEntry;

    #[test]
    fn test_counts_aggregate_per_language() {
        let entries = vec![
            PathEntry::blob("src/index.ts"),
            PathEntry::blob("src/app.tsx"),
            PathEntry::blob("scripts/build.py"),
        ];
        let counts = count_languages(&entries);
        assert_eq!(
            counts,
            vec![
                LanguageCount {
                    language: "TypeScript".to_string(),
                    files: 2
                },
                LanguageCount {
                    language: "Python".to_string(),
                    files: 1
                },
            ]
        );
    }

    #[test]
    fn test_unrecognized_extensions_are_excluded() {
        let entries = vec![
            PathEntry::blob("notes.txt"),
            PathEntry::blob("Makefile"),
            PathEntry::blob(".env"),
        ];
        assert!(count_languages(&entries).is_empty());
    }

    #[test]
    fn test_directories_do_not_count() {
        // A directory named like a source file stays out of the histogram
        let entries = vec![PathEntry::tree("tools.py")];
        assert!(count_languages(&entries).is_empty());
    }

    #[test]
    fn test_only_final_extension_counts() {
        let entries = vec![PathEntry::blob("dist/archive.tar.gz")];
        assert!(count_languages(&entries).is_empty());
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let entries = vec![
            PathEntry::blob("b.rs"),
            PathEntry::blob("a.py"),
            PathEntry::blob("c.rs"),
        ];
        let counts = count_languages(&entries);
        assert_eq!(counts[0].language, "Rust");
        assert_eq!(counts[0].files, 2);
        assert_eq!(counts[1].language, "Python");
    }
}
