//! PDF rendering through an external HTML-to-PDF converter.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::ExportError;

/// Command used when none is configured.
pub const DEFAULT_PDF_COMMAND: &str = "wkhtmltopdf";

/// Turns an HTML file into a PDF file.
pub trait PdfRenderer {
    /// Reads `html` and writes the PDF to `output`.
    fn render(&self, html: &Path, output: &Path) -> Result<(), ExportError>;
}

/// Runs `<program> [args...] <input.html> <output.pdf>`.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: String,
    args: Vec<String>,
}

impl CommandRenderer {
    /// Parses a command line such as `"wkhtmltopdf --quiet"`.
    pub fn new(command: &str) -> Result<Self, ExportError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| ExportError::Pdf {
            message: "PDF command is empty".to_string(),
        })?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandRenderer {
    fn default() -> Self {
        Self {
            program: DEFAULT_PDF_COMMAND.to_string(),
            args: Vec::new(),
        }
    }
}

impl PdfRenderer for CommandRenderer {
    fn render(&self, html: &Path, output: &Path) -> Result<(), ExportError> {
        log::debug!("running {} {:?} on {}", self.program, self.args, html.display());

        let result = Command::new(&self.program)
            .args(&self.args)
            .arg(html)
            .arg(output)
            .output();

        let out = match result {
            Ok(out) => out,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ExportError::Pdf {
                    message: format!(
                        "'{}' not found; install it or set pdf_command in the config file",
                        self.program
                    ),
                });
            }
            Err(e) => {
                return Err(ExportError::Pdf {
                    message: format!("failed to run '{}': {}", self.program, e),
                });
            }
        };

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(ExportError::Pdf {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.program,
                    out.status,
                    stderr.trim()
                ),
            });
        }
        Ok(())
    }
}

/// Renders `html` to PDF bytes in a scratch directory.
///
/// The scratch directory is removed whether or not rendering succeeds.
pub fn html_to_pdf(html: &str, renderer: &dyn PdfRenderer) -> Result<Vec<u8>, ExportError> {
    let scratch = TempDir::new().map_err(|source| ExportError::Io {
        path: std::env::temp_dir(),
        source,
    })?;
    let input = scratch.path().join("note.html");
    let output = scratch.path().join("note.pdf");

    std::fs::write(&input, html).map_err(|source| ExportError::Io {
        path: input.clone(),
        source,
    })?;

    renderer.render(&input, &output)?;

    std::fs::read(&output).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExportError::Pdf {
            message: "converter finished without producing a PDF".to_string(),
        },
        _ => ExportError::Io {
            path: output.clone(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Copies the HTML through, prefixed with a fake PDF header.
    struct FakeRenderer {
        seen: RefCell<Option<PathBuf>>,
    }

    impl FakeRenderer {
        fn new() -> Self {
            Self {
                seen: RefCell::new(None),
            }
        }
    }

    impl PdfRenderer for FakeRenderer {
        fn render(&self, html: &Path, output: &Path) -> Result<(), ExportError> {
            *self.seen.borrow_mut() = Some(html.to_path_buf());
            let body = std::fs::read_to_string(html).unwrap();
            std::fs::write(output, format!("%PDF-1.4\n{body}")).unwrap();
            Ok(())
        }
    }

    struct FailingRenderer;

    impl PdfRenderer for FailingRenderer {
        fn render(&self, _html: &Path, _output: &Path) -> Result<(), ExportError> {
            Err(ExportError::Pdf {
                message: "boom".to_string(),
            })
        }
    }

    struct SilentRenderer;

    impl PdfRenderer for SilentRenderer {
        fn render(&self, _html: &Path, _output: &Path) -> Result<(), ExportError> {
            Ok(())
        }
    }

    #[test]
    fn test_renders_and_cleans_up() {
        let renderer = FakeRenderer::new();
        let bytes = html_to_pdf("<p>hi</p>", &renderer).unwrap();

        assert_eq!(bytes, b"%PDF-1.4\n<p>hi</p>");
        let input = renderer.seen.borrow().clone().unwrap();
        assert!(!input.exists());
        assert!(!input.parent().unwrap().exists());
    }

    #[test]
    fn test_failure_propagates() {
        let err = html_to_pdf("<p>hi</p>", &FailingRenderer).unwrap_err();
        assert!(matches!(err, ExportError::Pdf { ref message } if message == "boom"));
    }

    #[test]
    fn test_missing_output_is_pdf_error() {
        let err = html_to_pdf("<p>hi</p>", &SilentRenderer).unwrap_err();
        assert!(matches!(err, ExportError::Pdf { .. }));
    }

    #[test]
    fn test_command_parsing() {
        let r = CommandRenderer::new("wkhtmltopdf --quiet -s A4").unwrap();
        assert_eq!(r.program(), "wkhtmltopdf");
        assert_eq!(r.args, vec!["--quiet", "-s", "A4"]);
        assert!(CommandRenderer::new("   ").is_err());
        assert_eq!(CommandRenderer::default().program(), DEFAULT_PDF_COMMAND);
    }

    #[test]
    fn test_missing_program() {
        let r = CommandRenderer::new("mdnotes-no-such-converter-xyz").unwrap();
        let err = html_to_pdf("<p>hi</p>", &r).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let r = CommandRenderer::new("false").unwrap();
        let err = html_to_pdf("<p>hi</p>", &r).unwrap_err();
        assert!(matches!(err, ExportError::Pdf { ref message } if message.contains("exited")));
    }
}
