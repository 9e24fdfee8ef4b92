//! Note record: a short markdown document with organizational metadata.

use crate::domain::{NoteId, Tag, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A note with its metadata.
///
/// This is the persisted record shape; serialization uses camelCase keys
/// (`createdAt`, `updatedAt`) so stored data stays readable by other tools.
///
/// # Fields
/// - `id`: unique identifier
/// - `title`: human-readable title (may be empty while being edited)
/// - `content`: raw markdown
/// - `created_at` / `updated_at`: timestamps, `updated_at >= created_at`
/// - `category`: category *name*, empty when uncategorized
/// - `tags`: ordered, duplicate-free list of tags
/// - `favorite`: favorite flag
///
/// # Examples
///
/// ```
/// use mdnotes::domain::{Note, NoteId, Tag};
/// use chrono::Utc;
///
/// let note = Note::builder(NoteId::new(), "API Design", Utc::now())
///     .content("# Endpoints")
///     .tags(vec![Tag::new("work").unwrap()])
///     .build();
/// assert_eq!(note.title(), "API Design");
/// assert!(note.has_tag("Work"));
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(with = "timestamp")]
    created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    updated_at: DateTime<Utc>,
    #[serde(default)]
    category: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    tags: Vec<Tag>,
    #[serde(default)]
    favorite: bool,
}

impl Note {
    /// Creates an empty note created (and last updated) at `created`.
    pub fn new(id: NoteId, title: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            created_at: created,
            updated_at: created,
            category: String::new(),
            tags: Vec::new(),
            favorite: false,
        }
    }

    /// Creates a builder for constructing a Note with optional fields.
    pub fn builder(id: NoteId, title: impl Into<String>, created: DateTime<Utc>) -> NoteBuilder {
        NoteBuilder {
            note: Self::new(id, title, created),
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw markdown content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the note was last modified.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the category name, empty when uncategorized.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the note's tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns whether the note is a favorite.
    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Returns true if any tag matches `name`, ignoring case.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.matches(name))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }

    /// Replaces all tags, dropping exact duplicates (first occurrence kept).
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = deduplicate_tags(tags);
    }

    /// Appends a tag unless the exact same tag is already present.
    ///
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes every tag matching `name`, ignoring case.
    ///
    /// Returns whether anything was removed.
    pub fn remove_tag(&mut self, name: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| !t.matches(name));
        self.tags.len() != before
    }

    /// Refreshes `updated_at`, never moving it before `created_at`.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("category", &self.category)
            .field("tags", &self.tags)
            .field("favorite", &self.favorite)
            .finish()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    note: Note,
}

impl NoteBuilder {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.note.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.note.category = category.into();
        self
    }

    /// Sets the tags. Exact duplicates are removed (first occurrence kept).
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.note.tags = deduplicate_tags(tags);
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.note.favorite = favorite;
        self
    }

    /// Sets the last-modified time, clamped to the creation time.
    pub fn updated_at(mut self, updated: DateTime<Utc>) -> Self {
        self.note.updated_at = updated.max(self.note.created_at);
        self
    }

    pub fn build(self) -> Note {
        self.note
    }
}

fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = Vec::new();
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

/// Reads a tag list, skipping blank entries instead of failing the note.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    let tags = raw
        .iter()
        .filter_map(|s| match Tag::new(s) {
            Ok(tag) => Some(tag),
            Err(e) => {
                log::warn!("dropping stored tag {:?}: {}", s, e);
                None
            }
        })
        .collect();
    Ok(deduplicate_tags(tags))
}
