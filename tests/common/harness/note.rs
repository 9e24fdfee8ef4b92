//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Utc};
use mdnotes::domain::{Note, NoteId, Tag, timestamp};

/// Builder for creating test notes with sensible defaults.
///
/// Automatically generates an ID and timestamps, with a fluent API
/// for setting optional fields.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    title: String,
    created: DateTime<Utc>,
    category: String,
    tags: Vec<Tag>,
    favorite: bool,
    content: String,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            created: timestamp::now(),
            category: String::new(),
            tags: Vec::new(),
            favorite: false,
            content: String::new(),
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Sets the category name.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.push(Tag::new(tag.as_ref()).expect("Invalid tag"));
        self
    }

    /// Marks the note as a favorite.
    pub fn favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Sets the markdown content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Returns the 10-character ID prefix.
    pub fn id_prefix(&self) -> String {
        self.id.prefix().to_string()
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ID.
    pub fn note_id(&self) -> &NoteId {
        &self.id
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::builder(self.id.clone(), self.title.as_str(), self.created)
            .content(self.content.as_str())
            .category(self.category.as_str())
            .tags(self.tags.clone())
            .favorite(self.favorite)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_new_with_title() {
        let note = TestNote::new("My Test Note");
        assert_eq!(note.title(), "My Test Note");
    }

    #[test]
    fn test_note_generates_id() {
        let note = TestNote::new("Test");
        assert_eq!(note.note_id().as_str().len(), 26, "Should generate a valid ULID");
        assert_eq!(note.id_prefix().len(), 10);
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Architecture Decisions")
            .category("Work")
            .tag("adr")
            .favorite()
            .content("# ADR-001\n\nWe chose Rust.");

        let domain_note = note.to_note();
        assert_eq!(domain_note.title(), "Architecture Decisions");
        assert_eq!(domain_note.content(), "# ADR-001\n\nWe chose Rust.");
        assert_eq!(domain_note.category(), "Work");
        assert_eq!(domain_note.tags()[0].as_str(), "adr");
        assert!(domain_note.is_favorite());
    }

    #[test]
    fn test_note_explicit_id() {
        let note = TestNote::new("Fixed").id("01HQ3K5M7NXJK4QZPW8V2R6T9Y");
        assert_eq!(note.id_prefix(), "01HQ3K5M7N");
    }
}
