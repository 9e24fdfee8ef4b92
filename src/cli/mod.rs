//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::View;
use crate::export;
use output::OutputFormat;

/// mdnotes - markdown notes with categories, tags and favorites
#[derive(Parser, Debug)]
#[command(name = "mdnotes", version, about, long_about = None)]
pub struct Cli {
    /// Store directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note and select it
    New(NewArgs),

    /// List notes in the active (or given) view
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note (default: the selected note)
    Show(ShowArgs),

    /// Select a note
    Select(SelectArgs),

    /// Edit a note's fields, or its content in your editor
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Toggle a note's favorite flag
    #[command(name = "fav")]
    Favorite(FavoriteArgs),

    /// Print or change the active view
    View(ViewArgs),

    /// List categories
    Categories(CategoriesArgs),

    /// Add, edit or remove a category
    #[command(subcommand)]
    Category(CategoryCommand),

    /// List all tags
    Tags(TagsArgs),

    /// Add or remove a tag
    #[command(subcommand)]
    Tag(TagCommand),

    /// Export a note to markdown, text, HTML or PDF
    Export(ExportArgs),

    /// Create a note from a markdown export
    Import(ImportArgs),

    /// Print or change the theme
    Theme(ThemeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title (default: "New Note")
    #[arg(long)]
    pub title: Option<String>,

    /// Markdown content
    #[arg(short, long)]
    pub content: Option<String>,

    /// Category name
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Open the content in your editor after creation
    #[arg(short, long)]
    pub edit: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// View to list (notes, favorites); defaults to the active view
    #[arg(long)]
    pub view: Option<View>,

    /// Only notes whose title or content contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID, ID prefix or title (default: the selected note)
    pub note: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `select` command
#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// Note ID, ID prefix or title
    pub note: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content (replaces the whole body)
    #[arg(short, long)]
    pub content: Option<String>,

    /// New category name
    #[arg(short = 'C', long, conflicts_with = "clear_category")]
    pub category: Option<String>,

    /// Make the note uncategorized
    #[arg(long)]
    pub clear_category: bool,

    /// Set the favorite flag
    #[arg(long)]
    pub favorite: Option<bool>,
}

impl EditArgs {
    /// True if any field flag was given.
    pub fn has_field_changes(&self) -> bool {
        self.title.is_some()
            || self.content.is_some()
            || self.category.is_some()
            || self.clear_category
            || self.favorite.is_some()
    }
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Note ID, ID prefix or title
    pub note: String,
}

/// Arguments for the `fav` command
#[derive(Parser, Debug)]
pub struct FavoriteArgs {
    /// Note ID, ID prefix or title
    pub note: String,
}

/// Arguments for the `view` command
#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// View to switch to (notes, favorites, categories, tags)
    pub view: Option<View>,
}

/// Arguments for the `categories` command
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// Add a category
    Add(CategoryAddArgs),

    /// Rename or recolor a category (renames cascade to notes)
    Edit(CategoryEditArgs),

    /// Remove a category (notes using it become uncategorized)
    #[command(name = "rm")]
    Remove(CategoryRemoveArgs),
}

/// Arguments for `category add`
#[derive(Parser, Debug)]
pub struct CategoryAddArgs {
    /// Category name
    pub name: String,

    /// Hex color (#rgb or #rrggbb)
    #[arg(long, default_value = crate::domain::DEFAULT_CATEGORY_COLOR)]
    pub color: String,
}

/// Arguments for `category edit`
#[derive(Parser, Debug)]
pub struct CategoryEditArgs {
    /// Category ID, ID prefix or name
    pub category: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New hex color
    #[arg(long)]
    pub color: Option<String>,
}

/// Arguments for `category rm`
#[derive(Parser, Debug)]
pub struct CategoryRemoveArgs {
    /// Category ID, ID prefix or name
    pub category: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show note counts for each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum TagCommand {
    /// Add a new tag to the selected note (or to a new note)
    Add(TagNameArgs),

    /// Remove a tag from every note
    #[command(name = "rm")]
    Remove(TagNameArgs),
}

/// Arguments for `tag add` and `tag rm`
#[derive(Parser, Debug)]
pub struct TagNameArgs {
    /// Tag name
    pub name: String,
}

/// Export format for the `export` command
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ExportFormat {
    /// Markdown with the title as a level-1 heading
    #[default]
    Markdown,
    /// Plain text
    Txt,
    /// Standalone HTML document
    Html,
    /// PDF document (requires wkhtmltopdf or the configured pdf_command)
    Pdf,
}

impl From<ExportFormat> for export::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Markdown => export::ExportFormat::Markdown,
            ExportFormat::Txt => export::ExportFormat::Txt,
            ExportFormat::Html => export::ExportFormat::Html,
            ExportFormat::Pdf => export::ExportFormat::Pdf,
        }
    }
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Note to export (default: the selected note)
    pub note: Option<String>,

    /// Export format
    #[arg(short = 'F', long = "format", value_enum, default_value_t = ExportFormat::Markdown)]
    pub export_format: ExportFormat,

    /// Output file or directory (text formats go to stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Custom template file (html, pdf)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// CSS theme: light, dark, or path to a CSS file (html, pdf)
    #[arg(long)]
    pub theme: Option<String>,

    /// CLI output format (for status messages, not export content)
    #[arg(long = "cli-format", value_enum, default_value_t = OutputFormat::Human)]
    pub cli_format: OutputFormat,
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Markdown file to import
    pub file: PathBuf,

    /// Category name for the imported note
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Theme choice for the `theme` command
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Switch between light and dark
    Toggle,
}

/// Arguments for the `theme` command
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// New theme; prints the current one if omitted
    #[arg(value_enum)]
    pub mode: Option<ThemeChoice>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
