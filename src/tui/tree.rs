// src/tui/tree.rs
// =============================================================================
// This module reshapes the flat path listing into a nested tree.
//
// The API hands us every path as a flat string ("src/checker/http.rs"); the
// browser wants nested nodes it can expand and collapse. Building that is a
// pure data-shaping step: split each path on '/', walk/create intermediate
// directories, attach the leaf. No decision logic lives here.
//
// Entries are sorted by path first so siblings always come out in
// lexicographic order regardless of the API's ordering.
//
// Rust concepts:
// - Recursion over owned structures: each node owns its children
// - Borrowed views: flattening produces rows that borrow from the tree
// =============================================================================

use crate::github::PathEntry;
use std::collections::HashSet;

// One node of the nested tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// The final path segment, shown as the row label
    pub name: String,
    /// The full path from the repository root, used as the expand/collapse key
    pub path: String,
    /// Directories can be expanded; files are leaves
    pub is_dir: bool,
    pub children: Vec<TreeNode>,
}

// One visible row after applying the expand/collapse state
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    /// Nesting depth, used for indentation
    pub depth: usize,
    pub node: &'a TreeNode,
}

// Folds the flat listing into a nested tree
//
// Returns: the top-level nodes, sorted by path. Intermediate directories are
// created on demand, so the result is well-formed even when the API omits
// (or truncates away) some tree entries.
pub fn build_tree(entries: &[PathEntry]) -> Vec<TreeNode> {
    let mut sorted: Vec<&PathEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.path.cmp(&b.path));

    let mut roots: Vec<TreeNode> = Vec::new();

    for entry in sorted {
        insert_path(&mut roots, &entry.path, entry.is_blob());
    }

    roots
}

// Walks (and creates) the directory chain for one path, attaching the leaf
fn insert_path(roots: &mut Vec<TreeNode>, path: &str, is_blob: bool) {
    let mut current = roots;
    let mut walked = String::new();
    let mut segments = path.split('/').peekable();

    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            continue;
        }

        if !walked.is_empty() {
            walked.push('/');
        }
        walked.push_str(segment);

        let is_last = segments.peek().is_none();
        let is_dir = !is_last || !is_blob;

        let position = match current.iter().position(|n| n.name == segment) {
            Some(i) => {
                // Seeing a path through an existing node proves it is a
                // directory, even if it first appeared as a bare entry
                if !is_last {
                    current[i].is_dir = true;
                }
                i
            }
            None => {
                current.push(TreeNode {
                    name: segment.to_string(),
                    path: walked.clone(),
                    is_dir,
                    children: Vec::new(),
                });
                current.len() - 1
            }
        };

        current = &mut current[position].children;
    }
}

// Flattens the tree into the rows the browser should draw
//
// A directory's children are visible only while its path is in `expanded`.
// Top-level nodes are always visible.
pub fn visible_rows<'a>(
    roots: &'a [TreeNode],
    expanded: &HashSet<String>,
) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    push_visible(roots, expanded, 0, &mut rows);
    rows
}

fn push_visible<'a>(
    nodes: &'a [TreeNode],
    expanded: &HashSet<String>,
    depth: usize,
    rows: &mut Vec<VisibleRow<'a>>,
) {
    for node in nodes {
        rows.push(VisibleRow { depth, node });
        if node.is_dir && expanded.contains(&node.path) {
            push_visible(&node.children, expanded, depth + 1, rows);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does VisibleRow borrow instead of cloning the node?
//    - The rows are rebuilt every frame; cloning whole subtrees 10 times a
//      second would be wasted allocation
//    - The lifetime 'a ties each row to the tree it came from, so the
//      compiler proves the rows never outlive the tree
//
// 2. What is the reborrow dance in insert_path?
//    - `current = &mut current[position].children` moves the mutable
//      reference one level deeper; it is the same pattern used to walk any
//      owned tree (tries, JSON values, ...) without recursion
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::PathEntry;

    fn sample() -> Vec<PathEntry> {
        vec![
            PathEntry::blob("src/main.rs"),
            PathEntry::tree("src"),
            PathEntry::blob("README.md"),
            PathEntry::blob("src/cli.rs"),
        ]
    }

    #[test]
    fn test_builds_nested_structure() {
        let roots = build_tree(&sample());

        // Sorted by path: README.md before src
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].name, "README.md");
        assert!(!roots[0].is_dir);

        assert_eq!(roots[1].name, "src");
        assert!(roots[1].is_dir);
        let children: Vec<&str> = roots[1].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(children, vec!["cli.rs", "main.rs"]);
    }

    #[test]
    fn test_missing_intermediate_directories_are_created() {
        // No tree entry for "a" or "a/b", only the deep blob
        let entries = vec![PathEntry::blob("a/b/c.txt")];
        let roots = build_tree(&entries);

        assert_eq!(roots.len(), 1);
        assert!(roots[0].is_dir);
        assert_eq!(roots[0].path, "a");
        assert_eq!(roots[0].children[0].path, "a/b");
        assert!(!roots[0].children[0].children[0].is_dir);
    }

    #[test]
    fn test_collapsed_directories_hide_children() {
        let roots = build_tree(&sample());
        let expanded = HashSet::new();

        let rows = visible_rows(&roots, &expanded);
        let names: Vec<&str> = rows.iter().map(|r| r.node.name.as_str()).collect();
        assert_eq!(names, vec!["README.md", "src"]);
    }

    #[test]
    fn test_expanded_directories_show_children_with_depth() {
        let roots = build_tree(&sample());
        let mut expanded = HashSet::new();
        expanded.insert("src".to_string());

        let rows = visible_rows(&roots, &expanded);
        let names: Vec<(usize, &str)> = rows
            .iter()
            .map(|r| (r.depth, r.node.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![(0, "README.md"), (0, "src"), (1, "cli.rs"), (1, "main.rs")]
        );
    }
}
