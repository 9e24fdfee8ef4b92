//! Resolution of user-supplied note and category references.

use anyhow::{Result, bail};

use crate::domain::{Category, Note};
use crate::notebook::Notebook;
use crate::repo::{CategoryMatch, ResolveResult};
use crate::store::Store;

/// Prints enough of each candidate to tell them apart.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[&Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id().prefix(), note.title());
        if !note.category().is_empty() {
            eprintln!("      category: {}", note.category());
        }
        if !note.tags().is_empty() {
            let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
            eprintln!("      tags: {}", tags.join(", "));
        }
    }
    eprintln!();
    eprintln!("Use the ID prefix to specify which note you mean.");
}

/// Resolves a note reference or fails with a user-facing message.
pub(crate) fn resolve_note<S: Store>(notebook: &Notebook<S>, identifier: &str) -> Result<Note> {
    match notebook.notes().resolve(identifier) {
        ResolveResult::Unique(note) => Ok(note.clone()),
        ResolveResult::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Resolves an optional reference, falling back to the selected note.
pub(crate) fn resolve_note_or_selected<S: Store>(
    notebook: &Notebook<S>,
    identifier: Option<&str>,
) -> Result<Note> {
    match identifier {
        Some(identifier) => resolve_note(notebook, identifier),
        None => match notebook.notes().selected() {
            Some(note) => Ok(note.clone()),
            None => bail!("no note selected; pass a note ID or title"),
        },
    }
}

/// Resolves a category reference or fails with a user-facing message.
pub(crate) fn resolve_category<S: Store>(
    notebook: &Notebook<S>,
    identifier: &str,
) -> Result<Category> {
    match notebook.categories().resolve(identifier) {
        CategoryMatch::Unique(category) => Ok(category.clone()),
        CategoryMatch::Ambiguous(categories) => {
            eprintln!(
                "Ambiguous: '{}' matches {} categories:",
                identifier,
                categories.len()
            );
            for c in categories {
                eprintln!("  {} - {} ({})", c.id().prefix(), c.name(), c.color());
            }
            bail!("ambiguous category identifier");
        }
        CategoryMatch::NotFound => bail!("category not found: '{}'", identifier),
    }
}
