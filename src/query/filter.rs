//! Search and view filtering over the note list.

use crate::domain::{Note, View};

/// Returns the notes to display for `view` and `query`.
///
/// 1. A non-empty query keeps notes whose title or content contains it,
///    ignoring case.
/// 2. `Favorites` keeps favorites only; `Categories` and `Tags` show
///    management screens and return nothing; `Notes` keeps everything.
///
/// The input order is preserved.
pub fn filter_notes<'a>(notes: &'a [Note], view: View, query: &str) -> Vec<&'a Note> {
    if !view.lists_notes() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|n| needle.is_empty() || matches_query(n, &needle))
        .filter(|n| view != View::Favorites || n.is_favorite())
        .collect()
}

/// `needle` must already be lowercase.
fn matches_query(note: &Note, needle: &str) -> bool {
    note.title().to_lowercase().contains(needle) || note.content().to_lowercase().contains(needle)
}
