//! Template Catalog
//!
//! Registry of showcased components and the search/sort/count operations
//! behind the catalog browser page.

mod category;
mod collate;
mod entry;
mod query;
pub mod templates;

pub use category::{Category, CategoryCounts, CategoryFilter};
pub use entry::CatalogEntry;
pub use query::{count_by_category, filter, sort, CatalogQuery, SortKey};
pub use templates::{template_catalog, SampleProps, TemplateEntry, TemplateKind};

use serde::{Deserialize, Serialize};

/// Fixed, insertion-ordered list of catalog entries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog<R, P = ()> {
    entries: Vec<CatalogEntry<R, P>>,
}

impl<R, P> Catalog<R, P> {
    pub const fn new(entries: Vec<CatalogEntry<R, P>>) -> Self {
        Self { entries }
    }

    /// Entries in registry order
    pub fn entries(&self) -> &[CatalogEntry<R, P>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&CatalogEntry<R, P>> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Distinct categories present, in order of first appearance
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        seen
    }

    /// Filter then sort
    pub fn query(&self, query: &CatalogQuery, key: SortKey) -> Vec<&CatalogEntry<R, P>> {
        sort(filter(&self.entries, query), key)
    }

    /// Tab counts over the whole registry
    pub fn counts(&self) -> CategoryCounts {
        count_by_category(&self.entries)
    }
}

impl<R, P> From<Vec<CatalogEntry<R, P>>> for Catalog<R, P> {
    fn from(entries: Vec<CatalogEntry<R, P>>) -> Self {
        Self::new(entries)
    }
}
