//! In-memory repositories backed by the key-value store.

mod categories;
mod notes;

pub use categories::{CategoryChange, CategoryMatch, CategoryRepository};
pub use notes::{
    DEFAULT_NOTE_TITLE, NoteRepository, ResolveResult, TAGGED_NOTE_TITLE, TagPlacement,
};
