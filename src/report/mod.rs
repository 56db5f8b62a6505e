// src/report/mod.rs
// =============================================================================
// This module renders the static report.
//
// It consumes one Classification and one (optional) RepoSummary and prints
// either a colored terminal report or pretty JSON. Nothing here makes
// decisions about the repository; all the logic lives in the classifier,
// and this layer only arranges its output.
//
// Missing metadata is not an error: counts render as zero and the
// description falls back to a placeholder, exactly as the values arrived.
// =============================================================================

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::HashSet;

use crate::classify::Classification;
use crate::github::{RepoSummary, TreeListing};

// How many languages the human-readable report surfaces.
// The JSON output always carries the full histogram.
const TOP_LANGUAGES: usize = 5;

// The complete document emitted by --json
#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    repository: &'a str,
    branch: &'a str,
    truncated: bool,
    summary: Option<&'a RepoSummary>,
    classification: &'a Classification,
}

// Prints the report in the requested format
//
// Parameters:
//   repo: the "owner/repo" argument as the user typed it
//   summary: repository metadata, if the metadata fetch succeeded
//   listing: the tree listing (for the branch name and truncation flag)
//   classification: the classifier's findings
//   json: emit JSON instead of the human-readable report
pub fn print_report(
    repo: &str,
    summary: Option<&RepoSummary>,
    listing: &TreeListing,
    classification: &Classification,
    json: bool,
) -> Result<()> {
    if json {
        let document = ReportDocument {
            repository: repo,
            branch: &listing.branch,
            truncated: listing.truncated,
            summary,
            classification,
        };
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    print_header(repo, summary, listing);
    print_findings(classification);
    Ok(())
}

// The header block: title, star/fork/issue counts, description
fn print_header(repo: &str, summary: Option<&RepoSummary>, listing: &TreeListing) {
    println!();
    println!(
        "🔭 {} {}",
        "Report for".bold(),
        format!("https://github.com/{}", repo).cyan().underline()
    );

    let (stars, forks, issues) = match summary {
        Some(s) => (s.stargazers_count, s.forks_count, s.open_issues_count),
        None => (0, 0, 0),
    };
    println!("   ⭐ {} │ 🍴 {} │ 🐞 {} issues", stars, forks, issues);

    let description = summary
        .and_then(|s| s.description.as_deref())
        .unwrap_or("No description.");
    println!("   {}", description.italic());

    println!("   {} {}", "branch:".dimmed(), listing.branch);

    if summary.is_none() {
        println!(
            "   {}",
            "⚠️  Metadata unavailable; counts above are placeholders.".yellow()
        );
    }

    if listing.truncated {
        println!(
            "   {}",
            "⚠️  The API truncated this listing; findings may be incomplete."
                .yellow()
                .bold()
        );
    }

    println!();
}

// The findings block: languages, architecture, manifests, flags
fn print_findings(classification: &Classification) {
    let top = classification.top_languages(TOP_LANGUAGES);
    if !top.is_empty() {
        let line = top
            .iter()
            .map(|c| format!("{} ({} files)", c.language, c.files))
            .collect::<Vec<_>>()
            .join(", ");
        print_row("🗣️  Top Languages", &line);
    }

    if !classification.architecture.is_empty() {
        for (i, tag) in classification.architecture.iter().enumerate() {
            let label = if i == 0 { "🏛️  Architecture" } else { "" };
            print_row(label, tag);
        }
    }

    if !classification.manifests.is_empty() {
        // Every occurrence is in the data; the report shows each filename once
        print_row(
            "📦 Dependencies",
            &format!("Found: {}", dedup_filenames(&classification.manifests).cyan()),
        );
    }

    if classification.security_flags.is_empty() {
        print_row("🚩 Red Flags", &"✅ No obvious secret files found.".green());
    } else {
        print_row(
            "🚩 Red Flags",
            &format!(
                "Potential secrets or config found in: {}",
                classification.security_flags.join(", ")
            )
            .yellow(),
        );
    }

    println!();
}

// One aligned label/value row
fn print_row(label: &str, value: &dyn std::fmt::Display) {
    println!("{:<20} {}", label.magenta().bold(), value);
}

// Collapses duplicate manifest paths down to unique filenames for display
fn dedup_filenames(paths: &[String]) -> String {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for path in paths {
        let name = path.rsplit('/').next().unwrap_or(path);
        if seen.insert(name) {
            names.push(name);
        }
    }

    names.join(", ")
}
