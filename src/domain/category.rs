//! Named, colored labels that notes reference by name.

use crate::domain::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color given to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3498db";

/// The kind of error that occurred when validating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseCategoryErrorKind {
    EmptyName,
    InvalidColor(String),
}

/// Error returned when a category name or color is invalid.
#[derive(Debug, Clone)]
pub struct ParseCategoryError {
    kind: ParseCategoryErrorKind,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseCategoryErrorKind::EmptyName => {
                write!(f, "invalid category: name cannot be empty")
            }
            ParseCategoryErrorKind::InvalidColor(c) => write!(
                f,
                "invalid category color '{}': expected #rgb or #rrggbb",
                c
            ),
        }
    }
}

impl std::error::Error for ParseCategoryError {}

/// A category that notes point at through their `category` name.
///
/// Notes hold the category *name*, not its id. Renaming or deleting a
/// category is cascaded to notes by the notebook. Names are not required to
/// be unique; callers that want uniqueness must check before adding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    color: String,
}

impl Category {
    /// Creates a validated category with a fresh id.
    ///
    /// The name is trimmed. The color must be a `#rgb` or `#rrggbb` hex string.
    pub fn new(name: &str, color: &str) -> Result<Self, ParseCategoryError> {
        Self::with_id(CategoryId::new(), name, color)
    }

    /// Creates a validated category with a given id.
    pub fn with_id(id: CategoryId, name: &str, color: &str) -> Result<Self, ParseCategoryError> {
        Ok(Self {
            id,
            name: validate_name(name)?,
            color: validate_color(color)?,
        })
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Renames the category (trimmed, non-empty).
    pub fn set_name(&mut self, name: &str) -> Result<(), ParseCategoryError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// Changes the color (`#rgb` or `#rrggbb`).
    pub fn set_color(&mut self, color: &str) -> Result<(), ParseCategoryError> {
        self.color = validate_color(color)?;
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

fn validate_name(name: &str) -> Result<String, ParseCategoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ParseCategoryError {
            kind: ParseCategoryErrorKind::EmptyName,
        });
    }
    Ok(trimmed.to_string())
}

fn validate_color(color: &str) -> Result<String, ParseCategoryError> {
    let trimmed = color.trim();
    let valid = trimmed
        .strip_prefix('#')
        .is_some_and(|hex| {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        });
    if !valid {
        return Err(ParseCategoryError {
            kind: ParseCategoryErrorKind::InvalidColor(color.to_string()),
        });
    }
    Ok(trimmed.to_lowercase())
}
