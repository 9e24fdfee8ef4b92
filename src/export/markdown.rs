//! Markdown handling for exports.
//!
//! HTML exports use a deliberately small converter that understands
//! headers, emphasis, links, `* ` list items, fenced and inline code, and
//! line breaks. Anything else passes through as escaped text.

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};
use regex::{Captures, Regex};

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,3}) (.*)$").expect("valid header regex"));
static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\* (.*)$").expect("valid list item regex"));
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link regex"));
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]*)`").expect("valid inline code regex"));

const FENCE: &str = "```";

/// Converts note content to an HTML fragment.
///
/// Lines outside fenced blocks are joined with `<br>`. Fenced block
/// contents are escaped and otherwise left alone.
///
/// ```
/// use mdnotes::export::markdown_to_html;
///
/// let html = markdown_to_html("Hello\n**world**");
/// assert_eq!(html, "Hello<br><strong>world</strong>");
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut html = String::with_capacity(markdown.len() * 2);
    let mut rest = markdown;

    loop {
        let Some(open) = rest.find(FENCE) else {
            html.push_str(&convert_text(rest));
            break;
        };
        let after_open = &rest[open + FENCE.len()..];
        let Some(close) = after_open.find(FENCE) else {
            // Unclosed fence: treat the remainder as text.
            html.push_str(&convert_text(rest));
            break;
        };

        html.push_str(&convert_text(&rest[..open]));
        html.push_str(&code_block(&after_open[..close]));
        rest = &after_open[close + FENCE.len()..];
    }

    html
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn code_block(raw: &str) -> String {
    // An info string directly after the fence names the language.
    let (lang, code) = match raw.split_once('\n') {
        Some((first, body)) if !first.trim().is_empty() && !first.contains(' ') => {
            (Some(first.trim()), body)
        }
        Some(("", body)) => (None, body),
        _ => (None, raw),
    };

    match lang {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            escape_html(lang),
            escape_html(code)
        ),
        None => format!("<pre><code>{}</code></pre>", escape_html(code)),
    }
}

fn convert_text(text: &str) -> String {
    text.split('\n')
        .map(convert_line)
        .collect::<Vec<_>>()
        .join("<br>")
}

fn convert_line(line: &str) -> String {
    let line = escape_html(line);

    if let Some(caps) = HEADER_RE.captures(&line) {
        let level = caps[1].len();
        return format!("<h{level}>{}</h{level}>", convert_inline(&caps[2]));
    }
    if let Some(caps) = LIST_ITEM_RE.captures(&line) {
        return format!("<li>{}</li>", convert_inline(&caps[1]));
    }
    convert_inline(&line)
}

/// Applies inline rules, leaving code spans untouched.
fn convert_inline(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for caps in INLINE_CODE_RE.captures_iter(line) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&emphasis_and_links(&line[last..whole.start()]));
        out.push_str("<code>");
        out.push_str(&caps[1]);
        out.push_str("</code>");
        last = whole.end();
    }
    out.push_str(&emphasis_and_links(&line[last..]));
    out
}

fn emphasis_and_links(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>$1</em>");
    LINK_RE
        .replace_all(&text, |caps: &Captures| {
            format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1])
        })
        .into_owned()
}

/// Splits a markdown export back into its title and body.
///
/// The title is the first level-1 heading. An ATX heading line is taken
/// verbatim after its `# ` marker, so `# Issue #` gives `Issue #`. The body
/// is everything after the heading line minus exactly one blank separator
/// line, which is what the exporter inserts. Without a level-1 heading the
/// title is `None` and the whole text is the body.
pub fn parse_markdown_export(text: &str) -> (Option<String>, String) {
    let mut heading_start = None;
    for (event, range) in Parser::new(text).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading(HeadingLevel::H1, ..)) => heading_start = Some(range.start),
            Event::End(Tag::Heading(HeadingLevel::H1, ..)) => {
                let start = heading_start.unwrap_or(range.start);
                let title = heading_text(&text[start..range.end]);
                let rest = &text[heading_end(text, range.end)..];
                let body = strip_line_break(rest).unwrap_or(rest);
                return (Some(title), body.to_string());
            }
            _ => {}
        }
    }
    (None, text.to_string())
}

/// Byte offset just past the line break that ends the heading.
fn heading_end(text: &str, end: usize) -> usize {
    if text[..end].ends_with('\n') {
        return end;
    }
    match text[end..].find('\n') {
        Some(offset) => end + offset + 1,
        None => text.len(),
    }
}

fn strip_line_break(text: &str) -> Option<&str> {
    text.strip_prefix("\r\n").or_else(|| text.strip_prefix('\n'))
}

/// Recovers the literal heading text, markup included.
fn heading_text(source: &str) -> String {
    let first = source.lines().next().unwrap_or_default();
    match first.trim_start().strip_prefix('#') {
        Some(atx) => {
            let atx = atx.trim_end_matches('\r');
            atx.strip_prefix([' ', '\t']).unwrap_or(atx).to_string()
        }
        // Setext heading: everything above the underline.
        None => source
            .lines()
            .take_while(|l| !l.trim_start().starts_with('='))
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string(),
    }
}
