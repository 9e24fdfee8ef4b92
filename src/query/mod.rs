//! Derived, read-only views: the filtered note list and tag usage counts.

mod filter;
mod tags;

pub use filter::filter_notes;
pub use tags::{TagUsage, all_tags, find_tag_ignore_case};
