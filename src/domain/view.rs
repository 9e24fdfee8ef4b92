//! Named UI modes and the light/dark theme setting.

use std::fmt;
use std::str::FromStr;

/// The active view, deciding which list or management screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// All notes.
    #[default]
    Notes,
    /// Favorite notes only.
    Favorites,
    /// Category management (no note list).
    Categories,
    /// Tag management (no note list).
    Tags,
}

/// Error returned when parsing an unknown view or theme name.
#[derive(Debug, Clone)]
pub struct ParseViewError(String);

impl fmt::Display for ParseViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseViewError {}

impl View {
    pub const ALL: [View; 4] = [View::Notes, View::Favorites, View::Categories, View::Tags];

    /// Returns the persisted name of the view.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Notes => "notes",
            View::Favorites => "favorites",
            View::Categories => "categories",
            View::Tags => "tags",
        }
    }

    /// Whether this view shows a note list rather than a management screen.
    pub fn lists_notes(&self) -> bool {
        matches!(self, View::Notes | View::Favorites)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| {
                ParseViewError(format!(
                    "unknown view '{}': expected notes, favorites, categories, or tags",
                    s
                ))
            })
    }
}

/// Light or dark presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseViewError(format!(
                "unknown theme '{}': expected light or dark",
                other
            ))),
        }
    }
}
