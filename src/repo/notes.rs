//! In-memory note collection with selection tracking.

use crate::domain::{Note, NoteId, Tag, timestamp};
use crate::error::{NotebookError, NotebookResult};
use crate::query::find_tag_ignore_case;
use crate::store::{self, Store, StoreError, StoreKey};

/// Title given to notes created by [`NoteRepository::create`].
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// Title given to the note synthesized when a tag is added with no selection.
pub const TAGGED_NOTE_TITLE: &str = "New Tagged Note";

/// Minimum length for an id prefix to be considered during resolution.
const MIN_ID_PREFIX_LEN: usize = 4;

/// Result of resolving a user-supplied note reference.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Where [`NoteRepository::add_tag`] put the new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPlacement {
    /// Appended to the selected note.
    Selected(NoteId),
    /// A new note was created to carry it.
    NewNote(NoteId),
}

/// The note collection and the current selection.
///
/// Notes are kept newest-created first: creation inserts at the head.
/// The selection, when present, always names a note in the collection.
#[derive(Debug, Default, Clone)]
pub struct NoteRepository {
    notes: Vec<Note>,
    selected: Option<NoteId>,
}

impl NoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from existing notes.
    ///
    /// `selected` is honored if it names one of the notes; otherwise the
    /// first note (if any) is selected.
    pub fn from_notes(notes: Vec<Note>, selected: Option<NoteId>) -> Self {
        let selected = selected
            .filter(|id| notes.iter().any(|n| n.id() == id))
            .or_else(|| notes.first().map(|n| n.id().clone()));
        Self { notes, selected }
    }

    /// Loads notes and the last selection from the store.
    ///
    /// Malformed stored notes are logged and ignored; the repository then
    /// starts empty.
    pub fn load(store: &dyn Store) -> Self {
        let notes: Vec<Note> = store::load_collection(store, StoreKey::Notes);
        let selected = store::read_string(store, StoreKey::LastSelected)
            .and_then(|s| s.parse::<NoteId>().ok());
        Self::from_notes(notes, selected)
    }

    /// Rewrites the `notes` and `lastSelected` entries.
    pub fn persist(&self, store: &mut dyn Store) -> Result<(), StoreError> {
        store::save_collection(store, StoreKey::Notes, &self.notes)?;
        match &self.selected {
            Some(id) => store.set(StoreKey::LastSelected, id.as_str()),
            None => store.remove(StoreKey::LastSelected),
        }
    }

    /// Returns all notes, newest-created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn selected_id(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Note> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Selects a note. Returns false (and keeps the selection) if `id` is unknown.
    pub fn select(&mut self, id: &NoteId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    /// Creates an empty note at the head of the list and selects it.
    pub fn create(&mut self) -> Note {
        let note = Note::new(NoteId::new(), DEFAULT_NOTE_TITLE, timestamp::now());
        self.insert(note.clone());
        note
    }

    /// Inserts a fully-formed note at the head of the list and selects it.
    pub fn insert(&mut self, note: Note) {
        self.selected = Some(note.id().clone());
        self.notes.insert(0, note);
    }

    /// Replaces the stored note having `note`'s id and refreshes `updated_at`.
    ///
    /// Returns false, changing nothing, if no note has that id.
    pub fn update(&mut self, mut note: Note) -> bool {
        let Some(slot) = self.notes.iter_mut().find(|n| n.id() == note.id()) else {
            log::debug!("update ignored: no note {}", note.id());
            return false;
        };
        note.touch(timestamp::now());
        *slot = note;
        true
    }

    /// Removes a note. If it was selected, the new first note is selected.
    ///
    /// Returns false if no note has that id.
    pub fn delete(&mut self, id: &NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id() != id);
        if self.notes.len() == before {
            log::debug!("delete ignored: no note {}", id);
            return false;
        }
        if self.selected.as_ref() == Some(id) {
            self.selected = self.notes.first().map(|n| n.id().clone());
        }
        true
    }

    /// Flips the favorite flag. Returns the new value, or `None` if unknown.
    pub fn toggle_favorite(&mut self, id: &NoteId) -> Option<bool> {
        let note = self.notes.iter_mut().find(|n| n.id() == id)?;
        let favorite = !note.is_favorite();
        note.set_favorite(favorite);
        note.touch(timestamp::now());
        Some(favorite)
    }

    /// Adds a brand-new tag.
    ///
    /// The tag goes on the selected note, or on a freshly created note when
    /// nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::InvalidTag` for a blank name, and
    /// `NotebookError::DuplicateTag` if any note already has a tag equal to
    /// `name` ignoring case. Nothing is changed on error.
    pub fn add_tag(&mut self, name: &str) -> NotebookResult<TagPlacement> {
        let tag = Tag::new(name)?;
        if let Some(existing) = find_tag_ignore_case(&self.notes, tag.as_str()) {
            return Err(NotebookError::DuplicateTag {
                name: tag.to_string(),
                existing: existing.to_string(),
            });
        }

        if let Some(mut note) = self.selected().cloned() {
            let id = note.id().clone();
            note.add_tag(tag);
            self.update(note);
            return Ok(TagPlacement::Selected(id));
        }

        let note = Note::builder(NoteId::new(), TAGGED_NOTE_TITLE, timestamp::now())
            .tags(vec![tag])
            .build();
        let id = note.id().clone();
        self.insert(note);
        Ok(TagPlacement::NewNote(id))
    }

    /// Removes every tag matching `name` (ignoring case) from every note.
    ///
    /// Returns the number of notes changed.
    pub fn delete_tag(&mut self, name: &str) -> usize {
        self.modify_each(|note| note.remove_tag(name))
    }

    /// Rewrites `category == from` to `to` on every note.
    ///
    /// Returns the number of notes changed.
    pub fn rename_category(&mut self, from: &str, to: &str) -> usize {
        self.modify_each(|note| {
            if note.category() != from {
                return false;
            }
            note.set_category(to);
            true
        })
    }

    /// Clears `category` on every note referencing `name`.
    ///
    /// Returns the number of notes changed.
    pub fn clear_category(&mut self, name: &str) -> usize {
        self.modify_each(|note| {
            if note.category() != name {
                return false;
            }
            note.set_category("");
            true
        })
    }

    /// Applies `f` to every note, touching the ones it reports as changed.
    fn modify_each(&mut self, mut f: impl FnMut(&mut Note) -> bool) -> usize {
        let now = timestamp::now();
        let mut changed = 0;
        for note in &mut self.notes {
            if f(note) {
                note.touch(now);
                changed += 1;
            }
        }
        changed
    }

    /// Resolves a user-supplied reference to a note.
    ///
    /// Resolution order:
    /// 1. Exact id
    /// 2. Id prefix (at least 4 characters)
    /// 3. Exact title, ignoring case
    ///
    /// An exact id, or a single id-prefix hit, wins outright. Otherwise all
    /// prefix and title matches are candidates.
    pub fn resolve(&self, query: &str) -> ResolveResult<'_> {
        let query = query.trim();
        if query.is_empty() {
            return ResolveResult::NotFound;
        }

        if let Some(note) = self.notes.iter().find(|n| n.id().as_str() == query) {
            return ResolveResult::Unique(note);
        }

        let mut candidates: Vec<&Note> = Vec::new();

        if query.chars().count() >= MIN_ID_PREFIX_LEN {
            let upper = query.to_uppercase();
            let id_matches: Vec<&Note> = self
                .notes
                .iter()
                .filter(|n| n.id().as_str().to_uppercase().starts_with(&upper))
                .collect();
            if id_matches.len() == 1 {
                return ResolveResult::Unique(id_matches[0]);
            }
            candidates.extend(id_matches);
        }

        let lower = query.to_lowercase();
        for note in self.notes.iter().filter(|n| n.title().to_lowercase() == lower) {
            if !candidates.iter().any(|c| c.id() == note.id()) {
                candidates.push(note);
            }
        }

        match candidates.len() {
            0 => ResolveResult::NotFound,
            1 => ResolveResult::Unique(candidates[0]),
            _ => ResolveResult::Ambiguous(candidates),
        }
    }
}
