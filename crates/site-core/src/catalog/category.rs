//! Catalog Categories

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Closed set of component categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    About,
    Bento,
    Compare,
    Contact,
    Cta,
    Faq,
    Feature,
    Hero,
    Pricing,
    Testimonial,
}

impl Category {
    /// All categories in slug order
    pub const ALL: [Self; 10] = [
        Self::About,
        Self::Bento,
        Self::Compare,
        Self::Contact,
        Self::Cta,
        Self::Faq,
        Self::Feature,
        Self::Hero,
        Self::Pricing,
        Self::Testimonial,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Bento => "bento",
            Self::Compare => "compare",
            Self::Contact => "contact",
            Self::Cta => "cta",
            Self::Faq => "faq",
            Self::Feature => "feature",
            Self::Hero => "hero",
            Self::Pricing => "pricing",
            Self::Testimonial => "testimonial",
        }
    }

    /// Tab label
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Bento => "Bento Grids",
            Self::Compare => "Comparisons",
            Self::Contact => "Contact",
            Self::Cta => "Calls to Action",
            Self::Faq => "FAQ",
            Self::Feature => "Features",
            Self::Hero => "Heroes",
            Self::Pricing => "Pricing",
            Self::Testimonial => "Testimonials",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == needle)
            .ok_or_else(|| SiteError::UnknownCategory(s.to_string()))
    }
}

/// Category selection of a catalog query
///
/// A name outside the closed set is kept as `Unknown` and matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unknown(String),
}

impl CategoryFilter {
    /// Parse a tab/URL value; never fails
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        trimmed
            .parse::<Category>()
            .map_or_else(|_| Self::Unknown(trimmed.to_string()), Self::Only)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
            Self::Unknown(_) => false,
        }
    }

    /// Value used in URLs and tab keys
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
            Self::Unknown(name) => name,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tab entry counts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// The "all" bucket
    pub total: usize,

    /// Every known category, including empty ones
    pub by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    pub(crate) fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut by_category: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        let mut total = 0;
        for category in categories {
            *by_category.entry(category).or_default() += 1;
            total += 1;
        }
        Self { total, by_category }
    }

    /// Count shown on the tab for `filter`
    pub fn get(&self, filter: &CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.total,
            CategoryFilter::Only(category) => self.count(*category),
            CategoryFilter::Unknown(_) => 0,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// Categories with at least one entry
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.by_category
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(c, n)| (*c, *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("hero".parse::<Category>().unwrap(), Category::Hero);
        assert_eq!(" FAQ ".parse::<Category>().unwrap(), Category::Faq);
        assert!(matches!(
            "footer".parse::<Category>(),
            Err(SiteError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_slugs_are_sorted() {
        let slugs: Vec<_> = Category::ALL.iter().map(|c| c.slug()).collect();
        let mut sorted = slugs.clone();
        sorted.sort_unstable();
        assert_eq!(slugs, sorted);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("pricing"), CategoryFilter::Only(Category::Pricing));
        assert_eq!(
            CategoryFilter::parse("footer"),
            CategoryFilter::Unknown("footer".into())
        );
        assert!(!CategoryFilter::parse("footer").matches(Category::Hero));
    }

    #[test]
    fn test_counts_include_empty_buckets() {
        let counts = CategoryCounts::from_categories([Category::Hero, Category::Hero, Category::Faq]);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.count(Category::Hero), 2);
        assert_eq!(counts.count(Category::Bento), 0);
        assert_eq!(counts.by_category.len(), Category::ALL.len());
        assert_eq!(counts.get(&CategoryFilter::Unknown("x".into())), 0);
        assert_eq!(counts.non_empty().count(), 2);
    }
}
