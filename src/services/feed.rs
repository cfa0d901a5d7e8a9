use std::sync::Arc;

use serde::Serialize;

use crate::{
    models::{language_label, MatchBadge, PreferenceProfile, ScoredProduct},
    services::{
        catalog::Catalog,
        preferences::PreferenceService,
        ranking::{RankingPipeline, RankingStats},
    },
};

/// One ranked product as handed to presentation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeedItem {
    #[serde(flatten)]
    pub product: ScoredProduct,
    pub badge: Option<MatchBadge>,
}

impl From<ScoredProduct> for FeedItem {
    fn from(product: ScoredProduct) -> Self {
        let badge = product.badge();
        Self { product, badge }
    }
}

/// Personalized feed for one preference snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    pub items: Vec<FeedItem>,
    pub stats: RankingStats,
    /// The snapshot the feed was ranked against
    pub profile: PreferenceProfile,
    pub language_label: String,
    /// Set when no product survived ranking
    pub message: Option<String>,
}

/// Runs the ranking pipeline against the current catalog
pub struct FeedService {
    catalog: Arc<Catalog>,
    preferences: Arc<PreferenceService>,
}

impl FeedService {
    pub fn new(catalog: Arc<Catalog>, preferences: Arc<PreferenceService>) -> Self {
        Self {
            catalog,
            preferences,
        }
    }

    /// Feed for the live profile
    pub async fn current_feed(&self) -> FeedView {
        let profile = self.preferences.snapshot().await;
        self.feed_for(profile)
    }

    /// Feed for an explicitly supplied profile; the live profile is untouched
    pub fn feed_for(&self, profile: PreferenceProfile) -> FeedView {
        let ranking = RankingPipeline::new(&profile).run(self.catalog.products());

        tracing::info!(
            region = %profile.region,
            language = %profile.preferred_language,
            budget = profile.preferred_budget,
            ranked = ranking.stats.ranked,
            within_budget = ranking.stats.within_budget,
            "Feed ranked"
        );

        let message = ranking
            .products
            .is_empty()
            .then(|| empty_feed_message(&profile));

        FeedView {
            items: ranking.products.into_iter().map(FeedItem::from).collect(),
            stats: ranking.stats,
            language_label: language_label(&profile.preferred_language),
            profile,
            message,
        }
    }
}

fn empty_feed_message(profile: &PreferenceProfile) -> String {
    if profile.search_term.is_empty() {
        "No products match your current budget and preferences.".to_string()
    } else {
        format!(
            "No products found matching \"{}\" within your budget and preferences.",
            profile.search_term
        )
    }
}
