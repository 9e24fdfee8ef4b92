//! HTML template rendering for note exports.

use minijinja::{Environment, context};

use super::markdown::markdown_to_html;
use super::theme::{PRINT_CSS, theme_css};
use super::{ExportError, ExportOptions};
use crate::domain::{Note, timestamp};

/// Default HTML template for a single note.
///
/// The title is a plain header element, never an `<h1>`, so that headings
/// in the content keep their own hierarchy.
pub const DEFAULT_NOTE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
  <style>{{ theme_css|safe }}</style>
</head>
<body>
  <header>
    <div class="title">{{ title }}</div>
    <div class="meta">
      {% if category %}<span class="category">{{ category }}</span>{% endif %}
      {% for tag in tags %}<span class="tag">{{ tag }}</span>{% endfor %}
      <br>
      Created: <time datetime="{{ created_iso }}">{{ created }}</time>
      <br>
      Updated: <time datetime="{{ updated_iso }}">{{ updated }}</time>
    </div>
  </header>
  <div class="content">
    {{ content|safe }}
  </div>
</body>
</html>
"##;

/// Template name; the `.html` suffix turns on auto-escaping.
const TEMPLATE_NAME: &str = "note.html";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Which stylesheet stack the document is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Media {
    Screen,
    Print,
}

/// Renders a note to a complete HTML document.
pub(crate) fn render_note_html(
    note: &Note,
    options: &ExportOptions<'_>,
    media: Media,
) -> Result<String, ExportError> {
    let mut css = theme_css(options.theme)?;
    if media == Media::Print {
        css.push_str(PRINT_CSS);
    }

    let source = match options.template_path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => DEFAULT_NOTE_TEMPLATE.to_string(),
    };

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, &source)?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;

    let tags: Vec<&str> = note.tags().iter().map(|t| t.as_str()).collect();

    let html = tmpl.render(context! {
        title => note.title(),
        category => note.category(),
        tags => tags,
        favorite => note.is_favorite(),
        content => markdown_to_html(note.content()),
        theme_css => css,
        created => note.created_at().format(DISPLAY_FORMAT).to_string(),
        created_iso => timestamp::format(&note.created_at()),
        updated => note.updated_at().format(DISPLAY_FORMAT).to_string(),
        updated_iso => timestamp::format(&note.updated_at()),
    })?;

    Ok(html)
}
