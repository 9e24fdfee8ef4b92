//! ULID-backed identifiers for notes and categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when parsing an empty identifier.
#[derive(Debug, Clone)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} id: cannot be empty", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

/// Generates a string-backed identifier type.
///
/// Fresh ids are ULIDs (time-ordered, 80 random bits per millisecond), so
/// rapid successive creation never collides. Ids read back from the store
/// are kept verbatim, including legacy millisecond-timestamp ids.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Generates a new unique identifier.
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the short display prefix (first 10 characters).
            ///
            /// For ULIDs these encode the full millisecond timestamp.
            pub fn prefix(&self) -> &str {
                match self.0.char_indices().nth(10) {
                    Some((end, _)) => &self.0[..end],
                    None => &self.0,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "(\"{}\")"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(ParseIdError { kind: $kind });
                }
                Ok(Self(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

entity_id!(
    /// A unique identifier for a note.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdnotes::domain::NoteId;
    ///
    /// let id = NoteId::new();
    /// assert_eq!(id.as_str().len(), 26);
    /// assert_eq!(id.prefix().len(), 10);
    /// ```
    NoteId,
    "note"
);

entity_id!(
    /// A unique identifier for a category.
    CategoryId,
    "category"
);
