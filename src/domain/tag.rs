//! Free-form tag labels attached to notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A free-form label for notes.
///
/// Tags keep the spelling they were created with, so `Work` and `work` are
/// distinct values and are counted separately by the tag index. Lookups that
/// decide whether a tag already exists, or which tag to remove, go through
/// [`Tag::matches`], which ignores case.
///
/// # Validation Rules
/// - Surrounding whitespace is trimmed
/// - Non-empty after trimming
///
/// # Examples
///
/// ```
/// use mdnotes::domain::Tag;
///
/// let tag = Tag::new("  Work ").unwrap();
/// assert_eq!(tag.as_str(), "Work");
/// assert!(tag.matches("work"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a tag name.
    pub fn matches(&self, name: &str) -> bool {
        self.0.to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_with_valid_tag() {
        let tag = Tag::new("draft").unwrap();
        assert_eq!(tag.to_string(), "draft");
    }

    #[test]
    fn new_rejects_empty_string() {
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn new_rejects_whitespace_only() {
        assert!(Tag::new("   ").is_err());
    }

    #[test]
    fn preserves_case() {
        let tag = Tag::new("NeedsReview").unwrap();
        assert_eq!(tag.as_str(), "NeedsReview");
    }

    #[test]
    fn trims_whitespace() {
        let tag = Tag::new("  draft  ").unwrap();
        assert_eq!(tag.as_str(), "draft");
    }

    #[test]
    fn allows_spaces_and_symbols_inside() {
        assert_eq!(Tag::new("to read").unwrap().as_str(), "to read");
        assert_eq!(Tag::new("c++").unwrap().as_str(), "c++");
    }

    #[test]
    fn equality_is_exact() {
        assert_ne!(Tag::new("Work").unwrap(), Tag::new("work").unwrap());
    }

    #[test]
    fn matches_ignores_case() {
        let tag = Tag::new("Work").unwrap();
        assert!(tag.matches("work"));
        assert!(tag.matches("WORK"));
        assert!(tag.matches(" work "));
        assert!(!tag.matches("workshop"));
    }

    #[test]
    fn parse_error_display() {
        let err = "".parse::<Tag>().unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn serde_roundtrip_in_vec() {
        let tags = vec![Tag::new("Work").unwrap(), Tag::new("ideas").unwrap()];
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["Work","ideas"]"#);
        let parsed: Vec<Tag> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tags);
    }

    #[test]
    fn serde_rejects_blank() {
        let result: Result<Tag, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn debug_format() {
        let tag = Tag::new("draft").unwrap();
        assert_eq!(format!("{:?}", tag), "Tag(\"draft\")");
    }
}
