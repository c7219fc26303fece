use std::collections::HashSet;

use crate::catalog::builtin::BUILTIN_INGREDIENTS;
use crate::error::{CurryError, Result};
use crate::models::{Category, Ingredient};

/// Read-only ingredient catalog in canonical order.
///
/// Every entry has been validated; in particular `max_amount > 0`, which the
/// icon layout relies on.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Ingredient>,
}

impl Catalog {
    /// Create a catalog from entries, rejecting invalid or duplicate ones.
    pub fn new(entries: Vec<Ingredient>) -> Result<Self> {
        let mut seen: HashSet<String> = HashSet::new();
        for entry in &entries {
            if !entry.is_valid() {
                return Err(CurryError::InvalidCatalog(format!(
                    "entry '{}' has an empty id, unusable max amount {}, or negative nutrients",
                    entry.id, entry.max_amount
                )));
            }
            if !seen.insert(entry.id.clone()) {
                return Err(CurryError::InvalidCatalog(format!(
                    "duplicate id '{}'",
                    entry.id
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_INGREDIENTS.clone(),
        }
    }

    /// All entries in canonical order.
    pub fn entries(&self) -> &[Ingredient] {
        &self.entries
    }

    /// Get an entry by id.
    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Check whether an id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Entries in one category, in canonical order.
    pub fn by_category(&self, category: Category) -> Vec<&Ingredient> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Ids in one category.
    pub fn ids_in_category(&self, category: Category) -> HashSet<String> {
        self.by_category(category)
            .into_iter()
            .map(|e| e.id.clone())
            .collect()
    }

    /// Ids of every entry.
    pub fn all_ids(&self) -> HashSet<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    /// Ids enabled out of the box.
    pub fn default_enabled_ids(&self) -> HashSet<String> {
        self.entries
            .iter()
            .filter(|e| e.default_enabled)
            .map(|e| e.id.clone())
            .collect()
    }

    /// Count of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
