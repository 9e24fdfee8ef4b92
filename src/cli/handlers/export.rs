//! Handlers for the `export` and `import` commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::config::Config;
use crate::cli::output::{OutputFormat, print_json};
use crate::cli::{ExportArgs, ImportArgs};
use crate::domain::{Note, NoteId, timestamp};
use crate::export::{
    CommandRenderer, ExportArtifact, ExportFormat, ExportOptions, PdfRenderer, export_note,
    parse_markdown_export,
};
use crate::notebook::Notebook;
use crate::store::Store;

use super::resolve::resolve_note_or_selected;

/// Result of an export operation.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub id: String,
    pub title: String,
    pub format: String,
    pub mime_type: String,
    /// Output path (absent when written to stdout)
    pub path: Option<String>,
    pub bytes: usize,
}

/// Where an artifact should be written.
///
/// An existing directory, a trailing `/`, or a path without an extension is
/// treated as a directory and gets the artifact's own filename.
pub(crate) fn output_file(output: &Path, filename: &str) -> PathBuf {
    let is_dir = output.is_dir()
        || output.to_string_lossy().ends_with('/')
        || output.extension().is_none();
    if is_dir {
        output.join(filename)
    } else {
        output.to_path_buf()
    }
}

fn write_artifact(path: &Path, artifact: &ExportArtifact) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, &artifact.bytes)
        .with_context(|| format!("failed to write {}", path.display()))
}

pub fn handle_export<S: Store>(
    args: &ExportArgs,
    notebook: &Notebook<S>,
    config: &Config,
) -> Result<()> {
    let note = resolve_note_or_selected(notebook, args.note.as_deref())?;
    let format = ExportFormat::from(args.export_format);

    let renderer = match format {
        ExportFormat::Pdf => Some(CommandRenderer::new(config.pdf_command())?),
        _ => None,
    };
    let options = ExportOptions {
        template_path: args.template.as_deref(),
        theme: config.export_theme(args.theme.as_deref()),
        pdf_renderer: renderer.as_ref().map(|r| r as &dyn PdfRenderer),
    };

    let artifact = export_note(&note, format, &options)
        .with_context(|| format!("failed to export '{}' as {}", note.title(), format))?;

    // Text formats stream to stdout; binary ones land in the working
    // directory under their download name.
    let path = match &args.output {
        Some(output) => Some(output_file(output, &artifact.filename)),
        None if format.is_text() => None,
        None => Some(PathBuf::from(&artifact.filename)),
    };

    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&artifact.bytes)
            .context("failed to write to stdout")?;
        stdout.flush().context("failed to write to stdout")?;
        return Ok(());
    };

    write_artifact(&path, &artifact)?;
    log::info!("wrote {} bytes to {}", artifact.bytes.len(), path.display());

    print_result(
        args.cli_format,
        ExportResult {
            id: note.id().to_string(),
            title: note.title().to_string(),
            format: format.to_string(),
            mime_type: artifact.mime_type.to_string(),
            path: Some(path.display().to_string()),
            bytes: artifact.bytes.len(),
        },
        &format!("Exported '{}' to {}", note.title(), path.display()),
    )
}

fn print_result(format: OutputFormat, result: ExportResult, human_message: &str) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", human_message),
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Ids => println!("{}", result.id),
    }
    Ok(())
}

/// Builds a note from a markdown export.
///
/// Without a level-1 heading the file stem becomes the title.
pub(crate) fn note_from_markdown(path: &Path, text: &str, category: Option<&str>) -> Note {
    let (title, body) = parse_markdown_export(text);
    let title = title.unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    Note::builder(NoteId::new(), title, timestamp::now())
        .content(body)
        .category(category.map(str::trim).unwrap_or_default())
        .build()
}

pub fn handle_import<S: Store>(args: &ImportArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let note = note_from_markdown(&args.file, &text, args.category.as_deref());
    notebook
        .insert_note(note.clone())
        .context("failed to save imported note")?;

    match args.format {
        OutputFormat::Human => println!(
            "Imported: {} [{}] from {}",
            note.title(),
            note.id().prefix(),
            args.file.display()
        ),
        OutputFormat::Json => print_json(&note)?,
        OutputFormat::Ids => println!("{}", note.id()),
    }
    Ok(())
}
