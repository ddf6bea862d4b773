//! Locale-Aware String Ordering
//!
//! Two-level comparison in the spirit of a collator: letters first with
//! accents and case folded away, then accents. Strings that differ only by
//! case compare equal so a stable sort keeps their original order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Base letters only: decomposed, marks stripped, lowercased
fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Decomposed and lowercased, marks kept
fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_sort_with_base_letter() {
        // byte order would put "Été" after "Zebra"
        assert_eq!(compare("Été", "Zebra"), Ordering::Less);
        assert_eq!(compare("Âpre", "Azur"), Ordering::Less);
        assert_eq!(compare("Café", "Cafe"), Ordering::Greater);
    }

    #[test]
    fn test_case_folded() {
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("FAQ", "faq"), Ordering::Equal);
    }
}
