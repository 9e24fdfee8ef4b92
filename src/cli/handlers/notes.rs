//! Handlers for note commands: new, ls, show, select, edit, rm, fav.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

use super::truncate_str;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, OutputFormat, print_json};
use crate::cli::{EditArgs, FavoriteArgs, ListArgs, NewArgs, RemoveArgs, SelectArgs, ShowArgs};
use crate::domain::{Note, NoteId, Tag, View, timestamp};
use crate::notebook::Notebook;
use crate::query;
use crate::repo::DEFAULT_NOTE_TITLE;
use crate::store::Store;

use super::resolve::{resolve_note, resolve_note_or_selected};

/// Launches an editor on a file (mocked in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Runs the configured editor command, which may carry arguments.
pub(crate) struct CommandEditor<'a>(pub(crate) &'a Config);

impl EditorLauncher for CommandEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        let editor = self.0.editor();
        let parts: Vec<&str> = editor.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            bail!("editor command is empty");
        };

        let status = Command::new(cmd)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", editor))?;

        if !status.success() {
            bail!("editor '{}' exited with non-zero status", editor);
        }
        Ok(())
    }
}

/// Round-trips `content` through the editor via a scratch `.md` file.
pub(crate) fn edit_content<E: EditorLauncher>(content: &str, editor: &E) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("mdnotes-")
        .suffix(".md")
        .tempfile()
        .context("failed to create scratch file for editing")?;
    std::fs::write(file.path(), content)
        .with_context(|| format!("failed to write {}", file.path().display()))?;

    editor.open(file.path())?;

    std::fs::read_to_string(file.path())
        .with_context(|| format!("failed to read {}", file.path().display()))
}

fn print_note_line(prefix: &str, note: &Note) {
    println!("{}: {} [{}]", prefix, note.title(), note.id().prefix());
}

fn warn_unknown_category<S: Store>(notebook: &Notebook<S>, name: &str) {
    if !name.is_empty() && notebook.categories().find_by_name(name).is_none() {
        log::warn!("no category named '{}'; the note still records it", name);
    }
}

// ===========================================
// new
// ===========================================

pub(crate) fn handle_new_impl<S: Store, E: EditorLauncher>(
    args: &NewArgs,
    notebook: &mut Notebook<S>,
    editor: &E,
) -> Result<Note> {
    let tags = args
        .tags
        .iter()
        .map(|t| Tag::new(t).with_context(|| format!("invalid tag: '{}'", t)))
        .collect::<Result<Vec<_>>>()?;

    // Nothing is stored until the editor (if any) has succeeded.
    let mut note = Note::new(NoteId::new(), DEFAULT_NOTE_TITLE, timestamp::now());
    if let Some(title) = &args.title {
        note.set_title(title.trim());
    }
    if let Some(content) = &args.content {
        note.set_content(content.as_str());
    }
    if let Some(category) = &args.category {
        warn_unknown_category(notebook, category.trim());
        note.set_category(category.trim());
    }
    if !tags.is_empty() {
        note.set_tags(tags);
    }
    if args.edit {
        let edited = edit_content(note.content(), editor)?;
        note.set_content(edited);
    }

    notebook
        .insert_note(note.clone())
        .context("failed to save note")?;
    notebook
        .set_view(View::Notes)
        .context("failed to save view")?;
    Ok(note)
}

pub fn handle_new<S: Store>(
    args: &NewArgs,
    notebook: &mut Notebook<S>,
    config: &Config,
) -> Result<()> {
    let note = handle_new_impl(args, notebook, &CommandEditor(config))?;
    match args.format {
        OutputFormat::Human => print_note_line("Created", &note),
        OutputFormat::Json => print_json(&note)?,
        OutputFormat::Ids => println!("{}", note.id()),
    }
    Ok(())
}

// ===========================================
// ls
// ===========================================

pub fn handle_list<S: Store>(args: &ListArgs, notebook: &Notebook<S>) -> Result<()> {
    let view = args.view.unwrap_or_else(|| notebook.view());
    if !view.lists_notes() {
        bail!(
            "the '{}' view has no note list; use `mdnotes {}` instead",
            view,
            view
        );
    }

    let search = args.search.as_deref().unwrap_or("");
    let notes = query::filter_notes(notebook.notes().notes(), view, search);
    let selected = notebook.notes().selected_id();

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }
            println!(
                "  {:<10}  {:<40}  {:<15}  {:>10}",
                "ID", "Title", "Category", "Updated"
            );
            println!(
                "  {:<10}  {:<40}  {:<15}  {:>10}",
                "----------",
                "----------------------------------------",
                "---------------",
                "----------"
            );
            for note in &notes {
                let marker = match (Some(note.id()) == selected, note.is_favorite()) {
                    (true, _) => '>',
                    (false, true) => '*',
                    (false, false) => ' ',
                };
                println!(
                    "{} {:<10}  {:<40}  {:<15}  {:>10}",
                    marker,
                    note.id().prefix(),
                    truncate_str(note.title(), 40),
                    truncate_str(note.category(), 15),
                    note.updated_at().format("%Y-%m-%d")
                );
            }
            println!();
            println!("{} note(s)", notes.len());
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .map(|n| NoteListing::new(n, Some(n.id()) == selected))
                .collect();
            print_json(listings)?;
        }
        OutputFormat::Ids => {
            for note in &notes {
                println!("{}", note.id());
            }
        }
    }
    Ok(())
}

// ===========================================
// show / select
// ===========================================

pub fn handle_show<S: Store>(args: &ShowArgs, notebook: &Notebook<S>) -> Result<()> {
    let note = resolve_note_or_selected(notebook, args.note.as_deref())?;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();
            println!(
                "ID: {}  Created: {}  Updated: {}{}",
                note.id().prefix(),
                note.created_at().format("%Y-%m-%d %H:%M"),
                note.updated_at().format("%Y-%m-%d %H:%M"),
                if note.is_favorite() { "  ★" } else { "" }
            );
            if !note.category().is_empty() {
                println!("Category: {}", note.category());
            }
            if !note.tags().is_empty() {
                let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
                println!("Tags: {}", tags.join(", "));
            }
            println!();
            if !note.content().is_empty() {
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => print_json(&note)?,
        OutputFormat::Ids => println!("{}", note.id()),
    }
    Ok(())
}

pub fn handle_select<S: Store>(args: &SelectArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let note = resolve_note(notebook, &args.note)?;
    notebook
        .select_note(note.id())
        .context("failed to save selection")?;
    print_note_line("Selected", &note);
    Ok(())
}

// ===========================================
// edit
// ===========================================

pub(crate) fn handle_edit_impl<S: Store, E: EditorLauncher>(
    args: &EditArgs,
    notebook: &mut Notebook<S>,
    editor: &E,
) -> Result<Note> {
    let mut note = resolve_note(notebook, &args.note)?;

    if args.has_field_changes() {
        if let Some(title) = &args.title {
            note.set_title(title.trim());
        }
        if let Some(content) = &args.content {
            note.set_content(content.as_str());
        }
        if let Some(category) = &args.category {
            warn_unknown_category(notebook, category.trim());
            note.set_category(category.trim());
        }
        if args.clear_category {
            note.set_category("");
        }
        if let Some(favorite) = args.favorite {
            note.set_favorite(favorite);
        }
    } else {
        let edited = edit_content(note.content(), editor)?;
        if edited == note.content() {
            log::info!("content unchanged; note not updated");
            return Ok(note);
        }
        note.set_content(edited);
    }

    let id = note.id().clone();
    notebook.update_note(note).context("failed to save note")?;
    notebook
        .notes()
        .get(&id)
        .cloned()
        .with_context(|| format!("note {} vanished during edit", id))
}

pub fn handle_edit<S: Store>(
    args: &EditArgs,
    notebook: &mut Notebook<S>,
    config: &Config,
) -> Result<()> {
    let note = handle_edit_impl(args, notebook, &CommandEditor(config))?;
    print_note_line("Edited", &note);
    Ok(())
}

// ===========================================
// rm / fav
// ===========================================

pub fn handle_remove<S: Store>(args: &RemoveArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let note = resolve_note(notebook, &args.note)?;
    notebook
        .delete_note(note.id())
        .context("failed to delete note")?;
    print_note_line("Deleted", &note);
    Ok(())
}

pub fn handle_favorite<S: Store>(args: &FavoriteArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let note = resolve_note(notebook, &args.note)?;
    match notebook
        .toggle_favorite(note.id())
        .context("failed to save favorite flag")?
    {
        Some(true) => print_note_line("Favorited", &note),
        Some(false) => print_note_line("Unfavorited", &note),
        None => bail!("note not found: '{}'", args.note),
    }
    Ok(())
}
