//! Command handlers for the CLI.
//!
//! Each handler takes its parsed arguments and the notebook, performs one
//! intent and prints the result.

mod categories;
mod export;
mod notes;
mod resolve;
mod settings;
mod tags;


use anyhow::Result;
use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};

pub use categories::{handle_categories, handle_category};
pub use export::{ExportResult, handle_export, handle_import};
pub use notes::{
    handle_edit, handle_favorite, handle_list, handle_new, handle_remove, handle_select,
    handle_show,
};
pub use settings::{handle_theme, handle_view};
pub use tags::{handle_tag, handle_tags};

// Re-export for tests
#[cfg(test)]
pub(crate) use export::{note_from_markdown, output_file};
#[cfg(test)]
pub(crate) use notes::{EditorLauncher, edit_content, handle_edit_impl, handle_new_impl};
#[cfg(test)]
pub(crate) use resolve::{resolve_category, resolve_note, resolve_note_or_selected};

/// Writes shell completions for `mdnotes` to stdout.
pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "mdnotes", &mut std::io::stdout());
    Ok(())
}

// ===========================================
// Shared Utilities
// ===========================================

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
