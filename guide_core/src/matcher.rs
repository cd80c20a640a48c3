//! Token matcher over the command catalog.
//!
//! Splits the query on single spaces and keeps every catalog entry whose
//! task or description contains at least one token, case-insensitively.
//! There is no scoring and no reordering; hits come back in catalog order.

use serde::Serialize;

use crate::catalog::CommandEntry;

/// The display projection of a matched catalog entry. The task label stays
/// internal; only the command text and its description are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub command: &'static str,
    pub description: &'static str,
}

/// Search the catalog for entries matching any query token.
///
/// Note: splitting on single spaces means consecutive spaces yield empty
/// tokens, and an empty token is a substring of every string, so an empty or
/// all-space query returns the whole catalog.
///
/// Any string input is valid; this never fails and has no side effects.
pub fn search(query: &str, catalog: &[CommandEntry]) -> Vec<Match> {
    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split(' ').collect();

    catalog
        .iter()
        .filter(|entry| {
            let task = entry.task.to_lowercase();
            let description = entry.description.to_lowercase();

            terms
                .iter()
                .any(|term| task.contains(term) || description.contains(term))
        })
        .map(|entry| Match {
            command: entry.command,
            description: entry.description,
        })
        .collect()
}
