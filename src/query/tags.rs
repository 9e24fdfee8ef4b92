//! Tag usage counts derived from notes.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Note;

/// A tag name with the number of notes carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagUsage {
    name: String,
    count: usize,
}

impl TagUsage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Counts tag usage across `notes`.
///
/// Tags are grouped by exact spelling, so `Work` and `work` are listed
/// separately. Entries come back in the order each tag is first seen while
/// scanning notes front to back. Nothing is cached; every call rescans.
///
/// # Examples
///
/// ```
/// use mdnotes::domain::{Note, NoteId, Tag};
/// use mdnotes::query::all_tags;
/// use chrono::Utc;
///
/// let note = Note::builder(NoteId::new(), "n", Utc::now())
///     .tags(vec![Tag::new("rust").unwrap()])
///     .build();
/// let tags = all_tags(&[note]);
/// assert_eq!(tags[0].name(), "rust");
/// assert_eq!(tags[0].count(), 1);
/// ```
pub fn all_tags(notes: &[Note]) -> Vec<TagUsage> {
    let mut usages: Vec<TagUsage> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for tag in notes.iter().flat_map(|n| n.tags()) {
        match positions.get(tag.as_str()) {
            Some(&i) => usages[i].count += 1,
            None => {
                positions.insert(tag.as_str(), usages.len());
                usages.push(TagUsage {
                    name: tag.as_str().to_string(),
                    count: 1,
                });
            }
        }
    }

    usages
}

/// Returns the first existing tag equal to `name` ignoring case.
pub fn find_tag_ignore_case<'a>(notes: &'a [Note], name: &str) -> Option<&'a str> {
    notes
        .iter()
        .flat_map(|n| n.tags())
        .find(|t| t.matches(name))
        .map(|t| t.as_str())
}
