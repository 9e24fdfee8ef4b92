//! In-memory category collection.

use crate::domain::{Category, CategoryId};
use crate::error::NotebookResult;
use crate::store::{self, Store, StoreError, StoreKey};

/// A change to category names that must be mirrored onto notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChange {
    /// Notes with `category == from` should now say `to`.
    Renamed { from: String, to: String },
    /// Notes with `category == name` should become uncategorized.
    Removed { name: String },
}

/// Result of resolving a user-supplied category reference.
#[derive(Debug)]
pub enum CategoryMatch<'a> {
    Unique(&'a Category),
    Ambiguous(Vec<&'a Category>),
    NotFound,
}

/// The category collection, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct CategoryRepository {
    categories: Vec<Category>,
}

impl CategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Loads categories from the store; malformed data yields an empty list.
    pub fn load(store: &dyn Store) -> Self {
        Self::from_categories(store::load_collection(store, StoreKey::Categories))
    }

    /// Rewrites the `categories` entry (removed when empty).
    pub fn persist(&self, store: &mut dyn Store) -> Result<(), StoreError> {
        store::save_collection(store, StoreKey::Categories, &self.categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Returns the first category with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Validates and appends a new category.
    ///
    /// Duplicate names are allowed.
    pub fn add(&mut self, name: &str, color: &str) -> NotebookResult<Category> {
        let category = Category::new(name, color)?;
        if self.find_by_name(category.name()).is_some() {
            log::warn!("adding second category named '{}'", category.name());
        }
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Replaces the category with the same id.
    ///
    /// Returns `Some(Renamed)` when the name changed. Returns `None` when the
    /// id is unknown or the name stayed the same.
    pub fn update(&mut self, category: Category) -> Option<CategoryChange> {
        let Some(slot) = self.categories.iter_mut().find(|c| c.id() == category.id()) else {
            log::debug!("category update ignored: no category {}", category.id());
            return None;
        };
        let old_name = slot.name().to_string();
        *slot = category;
        (old_name != slot.name()).then(|| CategoryChange::Renamed {
            from: old_name,
            to: slot.name().to_string(),
        })
    }

    /// Removes a category. Returns `Some(Removed)` if it existed.
    pub fn delete(&mut self, id: &CategoryId) -> Option<CategoryChange> {
        let index = self.categories.iter().position(|c| c.id() == id)?;
        let removed = self.categories.remove(index);
        Some(CategoryChange::Removed {
            name: removed.name().to_string(),
        })
    }

    /// Resolves a category by exact id, id prefix (4+ chars), or exact name.
    pub fn resolve(&self, query: &str) -> CategoryMatch<'_> {
        let query = query.trim();
        if query.is_empty() {
            return CategoryMatch::NotFound;
        }
        if let Some(c) = self.categories.iter().find(|c| c.id().as_str() == query) {
            return CategoryMatch::Unique(c);
        }

        let mut candidates: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| c.name() == query)
            .collect();
        if query.len() >= 4 {
            for c in self.categories.iter().filter(|c| c.id().as_str().starts_with(query)) {
                if !candidates.iter().any(|k| k.id() == c.id()) {
                    candidates.push(c);
                }
            }
        }

        match candidates.len() {
            0 => CategoryMatch::NotFound,
            1 => CategoryMatch::Unique(candidates[0]),
            _ => CategoryMatch::Ambiguous(candidates),
        }
    }
}
