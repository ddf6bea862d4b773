//! Catalog Entries

use serde::{Deserialize, Serialize};

use super::category::Category;

/// One showcased component
///
/// `R` is the render target and `P` the sample prop bag. The catalog never
/// looks inside either; they only travel with the entry to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry<R, P = ()> {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub render: R,
    pub props: P,
    pub description: String,
}

impl<R, P> CatalogEntry<R, P> {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: Category,
        render: R,
        props: P,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            render,
            props,
            description: description.into(),
        }
    }

    /// Case-insensitive substring match on title, category, or description
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn contains_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.category.slug().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
