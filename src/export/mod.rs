//! Export of single notes to Markdown, plain text, HTML and PDF.
//!
//! Text formats are pure functions of the note. PDF renders the HTML
//! export with a print stylesheet and hands it to a [`PdfRenderer`].

mod markdown;
mod pdf;
mod template;
mod theme;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::domain::Note;

pub use markdown::{escape_html, markdown_to_html, parse_markdown_export};
pub use pdf::{CommandRenderer, DEFAULT_PDF_COMMAND, PdfRenderer, html_to_pdf};
pub use template::DEFAULT_NOTE_TEMPLATE;
pub use theme::{PRINT_CSS, THEME_DARK, THEME_LIGHT, theme_css};

use template::{Media, render_note_html};

/// Errors produced while exporting a note.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render HTML template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("unknown theme '{name}': use 'light', 'dark', or a path to a CSS file")]
    UnknownTheme { name: String },

    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF export failed: {message}")]
    Pdf { message: String },
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Markdown,
    Txt,
    Html,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Markdown,
        ExportFormat::Txt,
        ExportFormat::Html,
        ExportFormat::Pdf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Txt => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Txt => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Txt => "text/plain",
            ExportFormat::Html => "text/html",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// True for formats whose bytes are UTF-8 text.
    pub fn is_text(&self) -> bool {
        !matches!(self, ExportFormat::Pdf)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown export format '{0}': expected markdown, txt, html or pdf")]
pub struct ParseExportFormatError(String);

impl FromStr for ExportFormat {
    type Err = ParseExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = match lower.as_str() {
            "md" => "markdown",
            "text" => "txt",
            other => other,
        };
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| ParseExportFormatError(s.to_string()))
    }
}

/// The result of exporting a note: what a browser would have downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Knobs for HTML and PDF export. Ignored by the text formats.
#[derive(Default, Clone, Copy)]
pub struct ExportOptions<'a> {
    /// Custom minijinja template file.
    pub template_path: Option<&'a Path>,
    /// Theme name or CSS file path.
    pub theme: Option<&'a str>,
    /// PDF converter; [`CommandRenderer::default`] when unset.
    pub pdf_renderer: Option<&'a dyn PdfRenderer>,
}

/// Download filename for a note: non-alphanumeric ASCII becomes `_`.
///
/// ```
/// use mdnotes::export::{ExportFormat, export_filename};
///
/// assert_eq!(export_filename("My Note!", ExportFormat::Markdown), "My_Note_.md");
/// assert_eq!(export_filename("", ExportFormat::Pdf), "untitled.pdf");
/// ```
pub fn export_filename(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let stem = if stem.is_empty() { "untitled" } else { &stem };
    format!("{}.{}", stem, format.extension())
}

/// Exports a note in the given format.
pub fn export_note(
    note: &Note,
    format: ExportFormat,
    options: &ExportOptions<'_>,
) -> Result<ExportArtifact, ExportError> {
    let bytes = match format {
        ExportFormat::Markdown => format!("# {}\n\n{}", note.title(), note.content()).into_bytes(),
        ExportFormat::Txt => format!("{}\n\n{}", note.title(), note.content()).into_bytes(),
        ExportFormat::Html => render_note_html(note, options, Media::Screen)?.into_bytes(),
        ExportFormat::Pdf => {
            let html = render_note_html(note, options, Media::Print)?;
            match options.pdf_renderer {
                Some(renderer) => html_to_pdf(&html, renderer)?,
                None => html_to_pdf(&html, &CommandRenderer::default())?,
            }
        }
    };

    log::debug!("exported note {} as {} ({} bytes)", note.id(), format, bytes.len());

    Ok(ExportArtifact {
        filename: export_filename(note.title(), format),
        mime_type: format.mime_type(),
        bytes,
    })
}
