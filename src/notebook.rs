//! The process-wide notebook context.
//!
//! A [`Notebook`] is built once from a store at start-up and handed to
//! whatever drives it. Every mutation goes through here so that category
//! cascades reach the notes and every changed collection is written back.

use crate::domain::{Category, CategoryId, Note, NoteId, ThemeMode, View};
use crate::error::NotebookResult;
use crate::query::{self, TagUsage};
use crate::repo::{CategoryChange, CategoryRepository, NoteRepository, TagPlacement};
use crate::store::{self, Store, StoreKey};

/// Notes, categories, selection, active view and theme, bound to a store.
#[derive(Debug)]
pub struct Notebook<S: Store> {
    store: S,
    notes: NoteRepository,
    categories: CategoryRepository,
    view: View,
    theme: ThemeMode,
}

impl<S: Store> Notebook<S> {
    /// Rehydrates the notebook from `store`.
    ///
    /// Never fails: unreadable or malformed entries are logged and replaced
    /// by defaults (empty collections, `notes` view, light theme).
    pub fn open(store: S) -> Self {
        let notes = NoteRepository::load(&store);
        let categories = CategoryRepository::load(&store);
        let view = load_parsed(&store, StoreKey::LastActiveView);
        let theme = load_parsed(&store, StoreKey::Theme);

        log::info!(
            "opened notebook: {} note(s), {} categor(ies), view {}, theme {}",
            notes.len(),
            categories.categories().len(),
            view,
            theme
        );

        Self {
            store,
            notes,
            categories,
            view,
            theme,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn notes(&self) -> &NoteRepository {
        &self.notes
    }

    pub fn categories(&self) -> &CategoryRepository {
        &self.categories
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// The note list for the active view, narrowed by `search`.
    pub fn visible_notes(&self, search: &str) -> Vec<&Note> {
        query::filter_notes(self.notes.notes(), self.view, search)
    }

    /// Tag usage counts, recomputed on each call.
    pub fn all_tags(&self) -> Vec<TagUsage> {
        query::all_tags(self.notes.notes())
    }

    // ===========================================
    // Notes
    // ===========================================

    /// Creates and selects an empty note, switching to the notes view.
    pub fn create_note(&mut self) -> NotebookResult<Note> {
        let note = self.notes.create();
        log::info!("created note {}", note.id());
        self.persist_notes()?;
        self.set_view(View::Notes)?;
        Ok(note)
    }

    /// Inserts a prepared note at the head and selects it.
    pub fn insert_note(&mut self, note: Note) -> NotebookResult<()> {
        log::info!("inserted note {}", note.id());
        self.notes.insert(note);
        self.persist_notes()
    }

    /// Replaces a note by id. Returns false if the id is unknown.
    pub fn update_note(&mut self, note: Note) -> NotebookResult<bool> {
        let id = note.id().clone();
        if !self.notes.update(note) {
            return Ok(false);
        }
        log::debug!("updated note {}", id);
        self.persist_notes()?;
        Ok(true)
    }

    /// Deletes a note by id. Returns false if the id is unknown.
    pub fn delete_note(&mut self, id: &NoteId) -> NotebookResult<bool> {
        if !self.notes.delete(id) {
            return Ok(false);
        }
        log::info!("deleted note {}", id);
        self.persist_notes()?;
        Ok(true)
    }

    /// Flips the favorite flag. Returns the new value, or `None` if unknown.
    pub fn toggle_favorite(&mut self, id: &NoteId) -> NotebookResult<Option<bool>> {
        let result = self.notes.toggle_favorite(id);
        if result.is_some() {
            self.persist_notes()?;
        }
        Ok(result)
    }

    /// Changes the selection. Returns false if the id is unknown.
    pub fn select_note(&mut self, id: &NoteId) -> NotebookResult<bool> {
        if !self.notes.select(id) {
            return Ok(false);
        }
        self.store.set(StoreKey::LastSelected, id.as_str())?;
        Ok(true)
    }

    // ===========================================
    // Categories
    // ===========================================

    pub fn add_category(&mut self, name: &str, color: &str) -> NotebookResult<Category> {
        let category = self.categories.add(name, color)?;
        log::info!("added category '{}' ({})", category.name(), category.id());
        self.persist_categories()?;
        Ok(category)
    }

    /// Replaces a category by id, renaming notes if its name changed.
    ///
    /// Returns the number of notes re-labelled, or `None` if the id is unknown.
    pub fn update_category(&mut self, category: Category) -> NotebookResult<Option<usize>> {
        if self.categories.get(category.id()).is_none() {
            return Ok(None);
        }
        let change = self.categories.update(category);
        self.persist_categories()?;
        let relabelled = match change {
            Some(change) => self.apply_category_change(&change)?,
            None => 0,
        };
        Ok(Some(relabelled))
    }

    /// Deletes a category and clears it from every note that used its name.
    ///
    /// Returns the number of notes cleared, or `None` if the id is unknown.
    pub fn delete_category(&mut self, id: &CategoryId) -> NotebookResult<Option<usize>> {
        let Some(change) = self.categories.delete(id) else {
            return Ok(None);
        };
        self.persist_categories()?;
        self.apply_category_change(&change).map(Some)
    }

    fn apply_category_change(&mut self, change: &CategoryChange) -> NotebookResult<usize> {
        let changed = match change {
            CategoryChange::Renamed { from, to } => {
                let n = self.notes.rename_category(from, to);
                log::info!("renamed category '{}' to '{}' on {} note(s)", from, to, n);
                n
            }
            CategoryChange::Removed { name } => {
                let n = self.notes.clear_category(name);
                log::info!("cleared category '{}' from {} note(s)", name, n);
                n
            }
        };
        if changed > 0 {
            self.persist_notes()?;
        }
        Ok(changed)
    }

    // ===========================================
    // Tags
    // ===========================================

    /// Adds a new tag (see [`NoteRepository::add_tag`]) and switches to the
    /// tags view.
    pub fn add_tag(&mut self, name: &str) -> NotebookResult<TagPlacement> {
        let placement = self.notes.add_tag(name)?;
        self.persist_notes()?;
        self.set_view(View::Tags)?;
        Ok(placement)
    }

    /// Removes a tag from every note. Returns the number of notes changed.
    pub fn delete_tag(&mut self, name: &str) -> NotebookResult<usize> {
        let changed = self.notes.delete_tag(name);
        if changed > 0 {
            log::info!("removed tag '{}' from {} note(s)", name.trim(), changed);
            self.persist_notes()?;
        }
        Ok(changed)
    }

    // ===========================================
    // View and theme
    // ===========================================

    /// Sets the active view. Always written, even if unchanged.
    pub fn set_view(&mut self, view: View) -> NotebookResult<()> {
        self.view = view;
        self.store.set(StoreKey::LastActiveView, view.as_str())?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> NotebookResult<()> {
        self.theme = theme;
        self.store.set(StoreKey::Theme, theme.as_str())?;
        Ok(())
    }

    /// Switches between light and dark. Returns the new mode.
    pub fn toggle_theme(&mut self) -> NotebookResult<ThemeMode> {
        let theme = self.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    fn persist_notes(&mut self) -> NotebookResult<()> {
        self.notes.persist(&mut self.store)?;
        Ok(())
    }

    fn persist_categories(&mut self) -> NotebookResult<()> {
        self.categories.persist(&mut self.store)?;
        Ok(())
    }
}

/// Reads a plain-string entry, falling back to the default when absent or unknown.
fn load_parsed<T>(store: &dyn Store, key: StoreKey) -> T
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = store::read_string(store, key) else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|e| {
        log::warn!("ignoring stored '{}': {}", key, e);
        T::default()
    })
}
