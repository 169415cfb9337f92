//! Case-insensitive genre set-merge primitives.
//!
//! Pure functions shared by the add/remove genre operations. Comparison
//! folds to Unicode lowercase; storage order and input order are both
//! preserved by every function here.

use std::collections::HashSet;

fn fold(genre: &str) -> String {
    genre.to_lowercase()
}

/// Splits `incoming` into tags not yet present in `existing` and tags that
/// already are, comparing case-insensitively.
///
/// Input order is preserved in both outputs; no tag appears in both.
pub fn partition(existing: &[String], incoming: &[String]) -> (Vec<String>, Vec<String>) {
    let present: HashSet<String> = existing.iter().map(|g| fold(g)).collect();

    let mut additions = Vec::new();
    let mut duplicates = Vec::new();
    for genre in incoming {
        if present.contains(&fold(genre)) {
            duplicates.push(genre.clone());
        } else {
            additions.push(genre.clone());
        }
    }

    (additions, duplicates)
}

/// Removes every case-insensitive match of `to_remove` from `existing`.
///
/// Returns the surviving tags in their original relative order, plus the
/// requested tags that actually matched (in request order).
pub fn remove_matches(existing: &[String], to_remove: &[String]) -> (Vec<String>, Vec<String>) {
    let present: HashSet<String> = existing.iter().map(|g| fold(g)).collect();

    let matched: Vec<String> = to_remove
        .iter()
        .filter(|genre| present.contains(&fold(genre)))
        .cloned()
        .collect();

    let removal: HashSet<String> = matched.iter().map(|g| fold(g)).collect();
    let remaining: Vec<String> = existing
        .iter()
        .filter(|genre| !removal.contains(&fold(genre)))
        .cloned()
        .collect();

    (remaining, matched)
}
