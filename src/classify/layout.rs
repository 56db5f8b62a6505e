// src/classify/layout.rs
// =============================================================================
// This module detects architecture signals from the shape of the file tree.
//
// Five independent rules, reported in a fixed order:
// 1. A top-level `src` segment        -> "src layout"
// 2. packages/ or apps/ with two or
//    more distinct subdirectories     -> "monorepo"
// 3. manage.py anywhere               -> "Django project"
// 4. Dockerfile or docker-compose     -> "Dockerized"
// 5. Anything under .github/workflows -> "CI/CD configured (GitHub Actions)"
//
// Each rule is a pure predicate over the full path list; a path may satisfy
// several rules at once. The fixed order keeps the output deterministic no
// matter what order the API returned the entries in.
// =============================================================================

use super::file_name;
use crate::github::PathEntry;
use std::collections::HashSet;

pub const TAG_SRC_LAYOUT: &str = "src layout";
pub const TAG_MONOREPO: &str = "monorepo";
pub const TAG_DJANGO: &str = "Django project";
pub const TAG_DOCKERIZED: &str = "Dockerized";
pub const TAG_CI: &str = "CI/CD configured (GitHub Actions)";

// Detects architecture tags for the whole path list
//
// Returns: tags in the fixed rule order above, each at most once
pub fn detect_architecture(entries: &[PathEntry]) -> Vec<String> {
    let mut tags = Vec::new();

    if entries.iter().any(|e| top_segment(&e.path) == "src") {
        tags.push(TAG_SRC_LAYOUT.to_string());
    }

    if is_monorepo(entries) {
        tags.push(TAG_MONOREPO.to_string());
    }

    if entries.iter().any(|e| file_name(&e.path) == "manage.py") {
        tags.push(TAG_DJANGO.to_string());
    }

    if entries.iter().any(|e| is_container_file(&e.path)) {
        tags.push(TAG_DOCKERIZED.to_string());
    }

    if entries
        .iter()
        .any(|e| e.path.starts_with(".github/workflows/"))
    {
        tags.push(TAG_CI.to_string());
    }

    tags
}

// The first path segment, e.g. "src" for "src/main.rs" (and for "src" itself)
fn top_segment(path: &str) -> &str {
    path.split('/').next().unwrap_or(path)
}

// A repository is tagged as a monorepo when a top-level packages/ or apps/
// directory contains two or more distinct immediate subdirectories. One
// lonely package under packages/ is just a directory name, not a monorepo.
fn is_monorepo(entries: &[PathEntry]) -> bool {
    for namespace in ["packages", "apps"] {
        let mut children: HashSet<&str> = HashSet::new();

        for entry in entries {
            let mut segments = entry.path.split('/');
            if segments.next() == Some(namespace) {
                if let Some(child) = segments.next() {
                    children.insert(child);
                }
            }
        }

        if children.len() >= 2 {
            return true;
        }
    }

    false
}

fn is_container_file(path: &str) -> bool {
    matches!(
        file_name(path),
        "Dockerfile" | "docker-compose.yml" | "docker-compose.yaml"
    )
}
