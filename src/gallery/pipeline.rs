//! Scenario filter/sort/search pipeline
//!
//! Pure function of (scenarios, criteria). Filtering keeps a record only
//! when category, difficulty and search all match; the survivors are then
//! ordered with a stable sort so ties keep their catalog order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::Scenario;

use super::criteria::{GalleryCriteria, SortKey};

/// Filter and order `scenarios` for display
///
/// The result borrows from the input and never holds more records than it.
pub fn filter_and_sort<'a>(scenarios: &'a [Scenario], criteria: &GalleryCriteria) -> Vec<&'a Scenario> {
    // Fold the needle once per run, not once per record
    let needle = criteria.search.to_lowercase();

    let mut filtered: Vec<&Scenario> = scenarios
        .iter()
        .filter(|s| criteria.category.matches(s.category))
        .filter(|s| criteria.difficulty.matches(s.difficulty))
        .filter(|s| matches_search(s, &needle))
        .collect();

    // slice::sort_by is stable
    filtered.sort_by(|a, b| compare(a, b, criteria.sort));

    tracing::debug!(
        "gallery pipeline: {} of {} scenarios ({}, sort={})",
        filtered.len(),
        scenarios.len(),
        criteria.cache_key(),
        criteria.sort
    );

    filtered
}

/// Case-insensitive substring match on title, description or any feature
///
/// `needle` must already be lower-cased. An empty needle matches everything.
pub fn matches_search(scenario: &Scenario, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    scenario.title.to_lowercase().contains(needle)
        || scenario.description.to_lowercase().contains(needle)
        || scenario
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(needle))
}

/// Comparator for one sort key
pub fn compare(a: &Scenario, b: &Scenario, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => locale_cmp(&a.title, &b.title),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Usage => compare_usage_desc(a.usage_count(), b.usage_count()),
        SortKey::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
        SortKey::Category => locale_cmp(a.category.as_str(), b.category.as_str()),
        SortKey::Unsorted => Ordering::Equal,
    }
}

/// Descending by count; records without a numeric usage go last
fn compare_usage_desc(a: Option<u64>, b: Option<u64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Root-locale style collation
///
/// Levels, in order: base letters (accents and case ignored), accents,
/// case with lowercase first, then the raw strings.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::gallery::criteria::Selection;
    use crate::catalog::{Category, Difficulty};

    fn titles(result: &[&Scenario]) -> Vec<String> {
        result.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn test_default_criteria_sorts_by_title() {
        let catalog = Catalog::builtin();
        let result = filter_and_sort(catalog.scenarios(), &GalleryCriteria::default());
        assert_eq!(result.len(), 10);
        assert_eq!(result[0].title, "Currency & Money Recognition");
        assert_eq!(result[9].title, "Safe Road Crossing Navigation");
    }

    #[test]
    fn test_search_matches_features_case_insensitively() {
        let catalog = Catalog::builtin();
        let criteria = GalleryCriteria {
            search: "BARCODE".to_string(),
            ..Default::default()
        };
        let result = filter_and_sort(catalog.scenarios(), &criteria);
        assert_eq!(titles(&result), vec!["Grocery Shopping Assistant"]);
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = Catalog::builtin();
        let criteria = GalleryCriteria {
            sort: SortKey::Rating,
            ..Default::default()
        };
        let result = filter_and_sort(catalog.scenarios(), &criteria);
        // 4.9: ids 3 and 10, in catalog order
        assert_eq!(result[0].id, 3);
        assert_eq!(result[1].id, 10);
        // 4.8: ids 1 and 7
        assert_eq!(result[2].id, 1);
        assert_eq!(result[3].id, 7);
    }

    #[test]
    fn test_difficulty_sort_is_stable_within_rank() {
        let catalog = Catalog::builtin();
        let criteria = GalleryCriteria {
            sort: SortKey::Difficulty,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_and_sort(catalog.scenarios(), &criteria)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 6, 8, 2, 5, 7, 3, 4, 9, 10]);
    }

    #[test]
    fn test_unsorted_keeps_filter_order() {
        let catalog = Catalog::builtin();
        let criteria = GalleryCriteria::from_ui("Safety", "all", "popularity", "");
        let ids: Vec<u32> = filter_and_sort(catalog.scenarios(), &criteria)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![4, 10]);
    }

    #[test]
    fn test_unmatched_selection_yields_nothing() {
        let catalog = Catalog::builtin();
        let criteria = GalleryCriteria {
            category: Selection::Unmatched,
            ..Default::default()
        };
        assert!(filter_and_sort(catalog.scenarios(), &criteria).is_empty());
    }

    #[test]
    fn test_usage_without_digits_sorts_last() {
        let mut scenarios = crate::catalog::builtin::builtin_scenarios();
        scenarios.truncate(3);
        scenarios[0].usage = "n/a".to_string();
        let criteria = GalleryCriteria {
            sort: SortKey::Usage,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_and_sort(&scenarios, &criteria)
            .iter()
            .map(|s| s.id)
            .collect();
        // 22,000+ then 18,500+ then the unparsable one
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_combined_filters() {
        let catalog = Catalog::builtin();
        let criteria = GalleryCriteria {
            category: Selection::Only(Category::Shopping),
            difficulty: Selection::Only(Difficulty::Easy),
            ..Default::default()
        };
        let result = filter_and_sort(catalog.scenarios(), &criteria);
        assert_eq!(titles(&result), vec!["Currency & Money Recognition"]);
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
        assert_ne!(locale_cmp("Same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_lowercase_first() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Reading", "reading"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_accents() {
        assert_eq!(locale_cmp("École", "Zebra"), Ordering::Less);
        assert_eq!(locale_cmp("École", "Apple"), Ordering::Greater);
        // Accent difference outranks case difference
        assert_eq!(locale_cmp("Resume", "résumé"), Ordering::Less);
        assert_eq!(locale_cmp("resume", "Resume"), Ordering::Less);
    }

    #[test]
    fn test_title_sort_with_accented_title() {
        let mut scenarios = crate::catalog::builtin::builtin_scenarios();
        scenarios.truncate(3);
        scenarios[0].title = "Zebra Crossing".to_string();
        scenarios[1].title = "École Reading".to_string();
        scenarios[2].title = "Apple".to_string();

        let result = filter_and_sort(&scenarios, &GalleryCriteria::default());
        assert_eq!(titles(&result), vec!["Apple", "École Reading", "Zebra Crossing"]);
    }
}
