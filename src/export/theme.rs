//! Stylesheets for HTML and PDF exports.

use std::path::Path;

use super::ExportError;

/// Light theme, the default.
pub const THEME_LIGHT: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    line-height: 1.6;
    padding: 2rem;
    max-width: 800px;
    margin: 0 auto;
    color: #333;
}
header .title {
    font-size: 2em;
    font-weight: 600;
    border-bottom: 1px solid #eaecef;
    padding-bottom: 0.3em;
    margin-bottom: 0.5em;
}
h1 { border-bottom: 1px solid #eaecef; padding-bottom: 0.3em; }
a { color: #0366d6; text-decoration: none; }
code {
    background-color: rgba(27, 31, 35, 0.05);
    border-radius: 3px;
    font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, monospace;
    padding: 0.2em 0.4em;
}
pre {
    background-color: #f6f8fa;
    border-radius: 3px;
    padding: 16px;
    overflow: auto;
}
pre code { background: none; padding: 0; }
img { max-width: 100%; }
.meta { color: #6a737d; font-size: 0.9em; margin-bottom: 1em; }
.tag, .category {
    display: inline-block;
    padding: 0.2em 0.6em;
    margin-right: 0.5em;
    border-radius: 3px;
    font-size: 0.8em;
}
.tag { background-color: #f1f8ff; color: #0366d6; }
.category { background-color: #f0fff4; color: #22863a; }
"#;

/// Dark theme.
pub const THEME_DARK: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    line-height: 1.6;
    padding: 2rem;
    max-width: 800px;
    margin: 0 auto;
    background: #1a1a1a;
    color: #e0e0e0;
}
header .title {
    font-size: 2em;
    font-weight: 600;
    border-bottom: 1px solid #333;
    padding-bottom: 0.3em;
    margin-bottom: 0.5em;
}
h1 { border-bottom: 1px solid #333; padding-bottom: 0.3em; }
a { color: #6af; text-decoration: none; }
code {
    background-color: #333;
    border-radius: 3px;
    font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, monospace;
    padding: 0.2em 0.4em;
}
pre {
    background-color: #2a2a2a;
    border-radius: 3px;
    padding: 16px;
    overflow: auto;
}
pre code { background: none; padding: 0; }
img { max-width: 100%; }
.meta { color: #888; font-size: 0.9em; margin-bottom: 1em; }
.tag, .category {
    display: inline-block;
    padding: 0.2em 0.6em;
    margin-right: 0.5em;
    border-radius: 3px;
    font-size: 0.8em;
}
.tag { background-color: #1f2a3a; color: #6af; }
.category { background-color: #1f3325; color: #7ee787; }
"#;

/// Appended for PDF output: full page width, no clipped code blocks.
pub const PRINT_CSS: &str = r#"
@page { margin: 2cm; }
body { max-width: none; padding: 0; }
pre { overflow: visible; white-space: pre-wrap; word-wrap: break-word; }
a { color: inherit; text-decoration: underline; }
"#;

/// Resolves a theme name or CSS file path to a stylesheet.
///
/// `None`, `"light"` and `"default"` give [`THEME_LIGHT`]; `"dark"` gives
/// [`THEME_DARK`]; anything else must be a readable file.
pub fn theme_css(theme: Option<&str>) -> Result<String, ExportError> {
    match theme {
        None | Some("light") | Some("default") => Ok(THEME_LIGHT.to_string()),
        Some("dark") => Ok(THEME_DARK.to_string()),
        Some(other) => {
            let path = Path::new(other);
            if !path.is_file() {
                return Err(ExportError::UnknownTheme {
                    name: other.to_string(),
                });
            }
            std::fs::read_to_string(path).map_err(|source| ExportError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
