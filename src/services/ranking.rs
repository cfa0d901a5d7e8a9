use serde::Serialize;

use crate::models::{PreferenceProfile, ProductRecord, ScoredProduct};
use crate::services::scoring;

/// Minimum score a product needs to appear in the feed
pub const SCORE_THRESHOLD: u32 = 6;

/// How many products survived each stage of a run
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankingStats {
    pub catalog_size: usize,
    pub within_budget: usize,
    pub matching_search: usize,
    pub ranked: usize,
}

/// Output of a ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Ranked products, highest score first
    pub products: Vec<ScoredProduct>,
    pub stats: RankingStats,
}

/// Filters and orders a catalog for one preference snapshot
///
/// Stages run in a fixed order and each only sees the survivors of the
/// previous one: budget, search, scoring, threshold, sort.
pub struct RankingPipeline<'a> {
    profile: &'a PreferenceProfile,
}

impl<'a> RankingPipeline<'a> {
    pub fn new(profile: &'a PreferenceProfile) -> Self {
        Self { profile }
    }

    pub fn run(&self, catalog: &[ProductRecord]) -> Ranking {
        let within_budget: Vec<&ProductRecord> = catalog
            .iter()
            .filter(|product| product.price <= self.profile.preferred_budget)
            .collect();

        let matching_search: Vec<&ProductRecord> = match self.search_needle() {
            Some(needle) => within_budget
                .iter()
                .copied()
                .filter(|product| product.name.to_lowercase().contains(&needle))
                .collect(),
            None => within_budget.clone(),
        };

        let mut products: Vec<ScoredProduct> = matching_search
            .iter()
            .map(|product| self.score(product))
            .filter(|scored| scored.score >= SCORE_THRESHOLD)
            .collect();

        // Vec::sort_by is stable, equal scores keep catalog order
        products.sort_by(|a, b| b.score.cmp(&a.score));

        let stats = RankingStats {
            catalog_size: catalog.len(),
            within_budget: within_budget.len(),
            matching_search: matching_search.len(),
            ranked: products.len(),
        };

        tracing::debug!(
            catalog_size = stats.catalog_size,
            within_budget = stats.within_budget,
            matching_search = stats.matching_search,
            ranked = stats.ranked,
            "Ranking completed"
        );

        Ranking { products, stats }
    }

    pub fn rank(&self, catalog: &[ProductRecord]) -> Vec<ScoredProduct> {
        self.run(catalog).products
    }

    fn search_needle(&self) -> Option<String> {
        if self.profile.search_term.is_empty() {
            None
        } else {
            Some(self.profile.search_term.to_lowercase())
        }
    }

    fn score(&self, product: &ProductRecord) -> ScoredProduct {
        let matches = scoring::match_flags(self.profile, product);
        ScoredProduct {
            product: product.clone(),
            score: scoring::points(&matches),
            matches,
        }
    }
}

/// Ranks `catalog` for `profile`
pub fn rank(profile: &PreferenceProfile, catalog: &[ProductRecord]) -> Vec<ScoredProduct> {
    RankingPipeline::new(profile).rank(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(
        id: &str,
        name: &str,
        price: u32,
        region: &str,
        language: &str,
        category: &str,
    ) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: String::new(),
            region: region.to_string(),
            language: language.to_string(),
            category: category.to_string(),
            description: String::new(),
        }
    }

    fn delhi_hindi() -> PreferenceProfile {
        PreferenceProfile::new("Delhi", "hi-IN", 2000)
    }

    fn test_catalog() -> Vec<ProductRecord> {
        vec![
            product("p1", "Cotton Saree Set", 1200, "Delhi", "hi-IN", "Sarees"),
            product("p2", "Running Shoes", 900, "Mumbai", "hi-US", "Shoes"),
            product("p3", "Silk Saree", 2500, "Delhi", "hi-IN", "Sarees"),
            product("p4", "Printed Kurti", 700, "Delhi", "en-US", "Kurtis"),
            product("p5", "Brass Diya Pair", 450, "Jaipur", "hi-IN", "Home Decor"),
            product("p6", "Leather Sandals", 2000, "Delhi", "ta-IN", "Shoes"),
            product("p7", "Tamil Storybook", 300, "Chennai", "ta-IN", "Books"),
        ]
    }

    fn ids(products: &[ScoredProduct]) -> Vec<&str> {
        products.iter().map(|p| p.product.id.as_str()).collect()
    }

    #[test]
    fn test_example_region_and_language() {
        let ranked = rank(&delhi_hindi(), &test_catalog());
        let saree = ranked.iter().find(|p| p.product.id == "p1").unwrap();
        assert_eq!(saree.score, 18);
    }

    #[test]
    fn test_example_partial_language_below_threshold() {
        let ranked = rank(&delhi_hindi(), &test_catalog());
        assert!(!ids(&ranked).contains(&"p2"));
    }

    #[test]
    fn test_example_over_budget_excluded() {
        let ranked = rank(&delhi_hindi(), &test_catalog());
        assert!(!ids(&ranked).contains(&"p3"));
    }

    #[test]
    fn test_example_search_filter() {
        let mut profile = delhi_hindi();
        profile.set_search_term("saree");
        profile.toggle_liked_category("Shoes");

        let ranked = rank(&profile, &test_catalog());
        assert_eq!(ids(&ranked), vec!["p1"]);
    }

    #[test]
    fn test_budget_boundary_inclusive() {
        let ranked = rank(&delhi_hindi(), &test_catalog());
        assert!(ids(&ranked).contains(&"p6"));
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let ranked = rank(&delhi_hindi(), &test_catalog());

        // p1: 18, p4: 10, p6: 10, p5: 8
        assert_eq!(ids(&ranked), vec!["p1", "p4", "p6", "p5"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_invariants_hold_for_all_outputs() {
        let mut profile = delhi_hindi();
        profile.toggle_liked_category("Books");

        for budget in [0, 300, 700, 1200, 2000, 5000] {
            profile.set_preferred_budget(budget);
            for product in rank(&profile, &test_catalog()) {
                assert!(product.product.price <= budget);
                assert!(product.score >= SCORE_THRESHOLD);
                assert!(!(product.matches.exact_language && product.matches.partial_language));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let profile = delhi_hindi();
        let catalog = test_catalog();
        assert_eq!(rank(&profile, &catalog), rank(&profile, &catalog));
    }

    #[test]
    fn test_empty_catalog() {
        let ranking = RankingPipeline::new(&delhi_hindi()).run(&[]);
        assert!(ranking.products.is_empty());
        assert_eq!(ranking.stats, RankingStats::default());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut profile = delhi_hindi();
        profile.set_search_term("KURTI");
        assert_eq!(ids(&rank(&profile, &test_catalog())), vec!["p4"]);
    }

    #[test]
    fn test_search_term_not_trimmed() {
        let mut profile = delhi_hindi();
        profile.set_search_term("saree  ");
        assert!(rank(&profile, &test_catalog()).is_empty());
    }

    #[test]
    fn test_liked_category_lifts_product_over_threshold() {
        let mut profile = delhi_hindi();
        assert!(!ids(&rank(&profile, &test_catalog())).contains(&"p7"));

        profile.toggle_liked_category("Books");
        assert!(ids(&rank(&profile, &test_catalog())).contains(&"p7"));
    }

    #[test]
    fn test_stats_count_each_stage() {
        let mut profile = delhi_hindi();
        profile.set_search_term("sa");

        let ranking = RankingPipeline::new(&profile).run(&test_catalog());
        assert_eq!(ranking.stats.catalog_size, 7);
        assert_eq!(ranking.stats.within_budget, 6);
        // Cotton Saree Set, Leather Sandals
        assert_eq!(ranking.stats.matching_search, 2);
        assert_eq!(ranking.stats.ranked, ranking.products.len());
    }
}
