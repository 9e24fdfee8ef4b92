//! Core types: Note, Category, Tag, ids, views, timestamps

mod category;
mod note;
mod note_id;
mod tag;
pub mod timestamp;
mod view;

pub use category::{Category, DEFAULT_CATEGORY_COLOR, ParseCategoryError};
pub use note::{Note, NoteBuilder};
pub use note_id::{CategoryId, NoteId, ParseIdError};
pub use tag::{ParseTagError, Tag};
pub use view::{ParseViewError, ThemeMode, View};
