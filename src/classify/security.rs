// src/classify/security.rs
// =============================================================================
// This module flags paths that look like committed secrets.
//
// Matching is deliberately simple and pinned, not a glob engine. All rules
// run against the lowercased final path segment:
//
// | Category            | Match rule                                        |
// |---------------------|---------------------------------------------------|
// | env files           | name equals ".env" or starts with ".env."         |
// | key/cert files      | extension is ".pem" or ".key"                     |
// | SSH private keys    | name is id_rsa, id_dsa, id_ecdsa or id_ed25519    |
// | generic secret hints| name contains "secret", "credential", "password"  |
//
// A path is flagged once even when several rules match. Flags come out in
// input order, so reports are stable and two concatenated listings flag as
// the concatenation of their individual flags.
// =============================================================================

use super::file_name;
use crate::github::PathEntry;

const SSH_KEY_NAMES: &[&str] = &["id_rsa", "id_dsa", "id_ecdsa", "id_ed25519"];
const SECRET_HINTS: &[&str] = &["secret", "credential", "password"];

// Flags sensitive-looking paths, full path recorded, input order preserved
pub fn flag_sensitive_paths(entries: &[PathEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| is_sensitive(&e.path))
        .map(|e| e.path.clone())
        .collect()
}

// Applies the pinned rule table to one path
fn is_sensitive(path: &str) -> bool {
    let name = file_name(path).to_lowercase();

    if name == ".env" || name.starts_with(".env.") {
        return true;
    }

    if name.ends_with(".pem") || name.ends_with(".key") {
        return true;
    }

    if SSH_KEY_NAMES.contains(&name.as_str()) {
        return true;
    }

    SECRET_HINTS.iter().any(|hint| name.contains(hint))
}
