//! Filtering, Sorting, and Counting
//!
//! All operations take borrowed entries and return a new list of references;
//! the source list is never reordered or modified.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::{CategoryCounts, CategoryFilter};
use super::collate;
use super::entry::CatalogEntry;
use crate::error::{Result, SiteError};

/// Search box text plus the selected category tab
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub text: String,
    pub category: CategoryFilter,
}

impl CatalogQuery {
    pub fn new(text: impl Into<String>, category: impl Into<CategoryFilter>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Query matching everything
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches<R, P>(&self, entry: &CatalogEntry<R, P>) -> bool {
        if !self.category.matches(entry.category) {
            return false;
        }
        let needle = self.text.trim().to_lowercase();
        needle.is_empty() || entry.contains_text(&needle)
    }
}

/// Ordering of catalog results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    TitleAsc,
    TitleDesc,
    CategoryAsc,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::TitleAsc, Self::TitleDesc, Self::CategoryAsc];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::CategoryAsc => "category-asc",
        }
    }

    /// Label for the sort dropdown
    pub const fn label(self) -> &'static str {
        match self {
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::CategoryAsc => "Category",
        }
    }

    fn compare<R, P>(self, a: &CatalogEntry<R, P>, b: &CatalogEntry<R, P>) -> Ordering {
        match self {
            Self::TitleAsc => collate::compare(&a.title, &b.title),
            Self::TitleDesc => collate::compare(&b.title, &a.title),
            Self::CategoryAsc => a.category.slug().cmp(b.category.slug()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| SiteError::UnknownSortKey(s.to_string()))
    }
}

/// Entries matching `query`, in their original order
pub fn filter<'a, R: 'a, P: 'a>(
    entries: impl IntoIterator<Item = &'a CatalogEntry<R, P>>,
    query: &CatalogQuery,
) -> Vec<&'a CatalogEntry<R, P>> {
    // lowercase the needle once instead of per entry
    let needle = query.text.trim().to_lowercase();
    entries
        .into_iter()
        .filter(|e| query.category.matches(e.category))
        .filter(|e| needle.is_empty() || e.contains_text(&needle))
        .collect()
}

/// Entries ordered by `key`; equal keys keep their input order
pub fn sort<'a, R: 'a, P: 'a>(
    entries: impl IntoIterator<Item = &'a CatalogEntry<R, P>>,
    key: SortKey,
) -> Vec<&'a CatalogEntry<R, P>> {
    let mut sorted: Vec<_> = entries.into_iter().collect();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Count entries per category; `total` is the "all" tab
pub fn count_by_category<'a, R: 'a, P: 'a>(
    entries: impl IntoIterator<Item = &'a CatalogEntry<R, P>>,
) -> CategoryCounts {
    CategoryCounts::from_categories(entries.into_iter().map(|e| e.category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use proptest::prelude::*;

    fn entry(id: u32, title: &str, category: Category, description: &str) -> CatalogEntry<()> {
        CatalogEntry::new(id, title, category, (), (), description)
    }

    fn fixture() -> Vec<CatalogEntry<()>> {
        vec![
            entry(1, "Split Hero", Category::Hero, "Headline with product shot"),
            entry(2, "Kitchen FAQ", Category::Faq, "Questions about HACCP logs"),
            entry(3, "Video Hero", Category::Hero, "Looping background video"),
            entry(4, "Tiered Pricing", Category::Pricing, "Three plans side by side"),
            entry(5, "Ãngel Quote", Category::Testimonial, "Single large quote"),
        ]
    }

    fn ids(entries: &[&CatalogEntry<()>]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let entries = fixture();
        let result = filter(&entries, &CatalogQuery::new("haccp", CategoryFilter::All));
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_text_matches_category_slug() {
        let entries = fixture();
        let result = filter(&entries, &CatalogQuery::new("HERO", CategoryFilter::All));
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_category_and_text_combine() {
        let entries = fixture();
        let query = CatalogQuery::new("video", Category::Hero);
        assert_eq!(ids(&filter(&entries, &query)), vec![3]);

        let query = CatalogQuery::new("video", Category::Faq);
        assert!(filter(&entries, &query).is_empty());
    }

    #[test]
    fn test_blank_query_returns_everything_in_order() {
        let entries = fixture();
        let result = filter(&entries, &CatalogQuery::new("   ", CategoryFilter::All));
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let entries = fixture();
        let query = CatalogQuery::new("", CategoryFilter::parse("footer"));
        assert!(filter(&entries, &query).is_empty());
    }

    #[test]
    fn test_sort_by_category_groups_stably() {
        let entries = vec![
            entry(1, "B", Category::Hero, ""),
            entry(2, "A", Category::Faq, ""),
            entry(3, "C", Category::Hero, ""),
        ];
        let sorted = sort(&entries, SortKey::CategoryAsc);
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
        // source untouched
        assert_eq!(entries[0].id, 1);
    }

    #[test]
    fn test_sort_by_title() {
        let entries = fixture();
        assert_eq!(ids(&sort(&entries, SortKey::TitleAsc)), vec![5, 2, 1, 4, 3]);
        assert_eq!(ids(&sort(&entries, SortKey::TitleDesc)), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn test_title_ties_keep_original_order() {
        let entries = vec![
            entry(1, "Hero", Category::Hero, ""),
            entry(2, "hero", Category::Cta, ""),
            entry(3, "HERO", Category::About, ""),
        ];
        assert_eq!(ids(&sort(&entries, SortKey::TitleAsc)), vec![1, 2, 3]);
        assert_eq!(ids(&sort(&entries, SortKey::TitleDesc)), vec![1, 2, 3]);
    }

    #[test]
    fn test_counts() {
        let entries = fixture();
        let counts = count_by_category(&entries);
        assert_eq!(counts.get(&CategoryFilter::All), 5);
        assert_eq!(counts.count(Category::Hero), 2);
        assert_eq!(counts.by_category.values().sum::<usize>(), entries.len());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("category-asc".parse::<SortKey>().unwrap(), SortKey::CategoryAsc);
        assert!("newest".parse::<SortKey>().is_err());
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_entries() -> impl Strategy<Value = Vec<CatalogEntry<()>>> {
        prop::collection::vec(("[a-cA-C]{0,3}", arb_category(), "[a-z ]{0,8}"), 0..24).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (title, category, description))| {
                        CatalogEntry::new(
                            u32::try_from(i).unwrap(),
                            title,
                            category,
                            (),
                            (),
                            description,
                        )
                    })
                    .collect()
            },
        )
    }

    fn arb_query() -> impl Strategy<Value = CatalogQuery> {
        (
            "[a-c]{0,2}",
            prop_oneof![Just(CategoryFilter::All), arb_category().prop_map(CategoryFilter::Only)],
        )
            .prop_map(|(text, category)| CatalogQuery { text, category })
    }

    proptest! {
        #[test]
        fn test_filter_is_idempotent(entries in arb_entries(), query in arb_query()) {
            let once = filter(&entries, &query);
            let twice = filter(once.iter().copied(), &query);
            prop_assert_eq!(ids(&once), ids(&twice));
        }

        #[test]
        fn test_sort_is_stable(entries in arb_entries(), key in prop::sample::select(SortKey::ALL.to_vec())) {
            let sorted = sort(&entries, key);
            prop_assert_eq!(sorted.len(), entries.len());
            for pair in sorted.windows(2) {
                let order = key.compare(pair[0], pair[1]);
                prop_assert!(order != Ordering::Greater);
                if order == Ordering::Equal {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }

        #[test]
        fn test_counts_sum_to_total(entries in arb_entries()) {
            let counts = count_by_category(&entries);
            prop_assert_eq!(counts.total, entries.len());
            prop_assert_eq!(counts.by_category.values().sum::<usize>(), entries.len());
        }

        #[test]
        fn test_filter_agrees_with_matches(entries in arb_entries(), query in arb_query()) {
            let expected: Vec<u32> = entries.iter().filter(|e| query.matches(*e)).map(|e| e.id).collect();
            prop_assert_eq!(ids(&filter(&entries, &query)), expected);
        }
    }
}
