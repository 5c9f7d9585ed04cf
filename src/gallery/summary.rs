//! Counts and aggregates shown around the gallery grid.

use serde::Serialize;

use crate::catalog::{Catalog, Category, Scenario};

use super::criteria::GalleryCriteria;

/// "Showing N of M scenarios" plus the clear-filters flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GallerySummary {
    pub showing: usize,
    pub total: usize,
    pub has_active_filters: bool,
}

impl GallerySummary {
    pub fn new(shown: &[&Scenario], catalog: &Catalog, criteria: &GalleryCriteria) -> Self {
        Self {
            showing: shown.len(),
            total: catalog.len(),
            has_active_filters: criteria.has_active_filters(),
        }
    }

    /// Screen-reader announcement for the result set
    pub fn announcement(&self) -> String {
        format!("Showing {} scenarios", self.showing)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Catalog-wide aggregates for the gallery header
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub scenario_count: usize,
    /// Mean rating rounded to one decimal (0.0 for an empty catalog)
    pub average_rating: f64,
    /// Sum of the numeric usage counts; unparsable usage adds nothing
    pub total_usage: u64,
    /// One entry per category, in filter-control order
    pub per_category: Vec<CategoryCount>,
}

impl CatalogStats {
    pub fn compute(catalog: &Catalog) -> Self {
        let scenarios = catalog.scenarios();

        let average_rating = if scenarios.is_empty() {
            0.0
        } else {
            let sum: f64 = scenarios.iter().map(|s| s.rating).sum();
            (sum / scenarios.len() as f64 * 10.0).round() / 10.0
        };

        let total_usage = scenarios
            .iter()
            .filter_map(Scenario::usage_count)
            .fold(0u64, u64::saturating_add);

        let per_category = Category::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: scenarios.iter().filter(|s| s.category == category).count(),
            })
            .collect();

        Self {
            scenario_count: scenarios.len(),
            average_rating,
            total_usage,
            per_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::filter_and_sort;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_stats() {
        let stats = CatalogStats::compute(&Catalog::builtin());
        assert_eq!(stats.scenario_count, 10);
        // (4.8+4.7+4.9+4.6+4.5+4.7+4.8+4.6+4.4+4.9) / 10 = 4.69
        assert_relative_eq!(stats.average_rating, 4.7, epsilon = 1e-9);
        assert_eq!(stats.total_usage, 173_200);

        let healthcare = &stats.per_category[0];
        assert_eq!(healthcare.category, Category::Healthcare);
        assert_eq!(healthcare.count, 2);
        assert_eq!(stats.per_category.iter().map(|c| c.count).sum::<usize>(), 10);
    }

    #[test]
    fn test_summary_counts() {
        let catalog = Catalog::builtin();
        let criteria = GalleryCriteria::from_ui("Safety", "all", "title", "");
        let shown = filter_and_sort(catalog.scenarios(), &criteria);
        let summary = GallerySummary::new(&shown, &catalog, &criteria);
        assert_eq!(summary.showing, 2);
        assert_eq!(summary.total, 10);
        assert!(summary.has_active_filters);
        assert_eq!(summary.announcement(), "Showing 2 scenarios");
    }
}
