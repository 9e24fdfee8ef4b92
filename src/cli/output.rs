//! Output format types for CLI commands.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Category, Note, timestamp};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain ids, one per line
    Ids,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Prints `data` wrapped in [`Output`] as pretty JSON.
pub fn print_json<T: Serialize>(data: T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Output::new(data))?);
    Ok(())
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub favorite: bool,
    pub selected: bool,
    pub updated_at: String,
}

impl NoteListing {
    pub fn new(note: &Note, selected: bool) -> Self {
        Self {
            id: note.id().to_string(),
            title: note.title().to_string(),
            category: note.category().to_string(),
            tags: note.tags().iter().map(|t| t.to_string()).collect(),
            favorite: note.is_favorite(),
            selected,
            updated_at: timestamp::format(&note.updated_at()),
        }
    }
}

/// A category with the number of notes that use its name.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub id: String,
    pub name: String,
    pub color: String,
    pub notes: usize,
}

impl CategoryListing {
    pub fn new(category: &Category, notes: usize) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            color: category.color().to_string(),
            notes,
        }
    }
}

/// A tag with optional count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}
