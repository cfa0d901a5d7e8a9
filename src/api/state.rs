use std::sync::Arc;

use crate::{
    db::MemoryProfileStore,
    models::PreferenceProfile,
    services::{Catalog, FeedService, PreferenceService},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub preferences: Arc<PreferenceService>,
    pub feed: Arc<FeedService>,
}

impl AppState {
    pub fn new(catalog: Catalog, preferences: PreferenceService) -> Self {
        let catalog = Arc::new(catalog);
        let preferences = Arc::new(preferences);
        let feed = Arc::new(FeedService::new(catalog.clone(), preferences.clone()));

        Self {
            catalog,
            preferences,
            feed,
        }
    }

    /// State whose profile lives only in memory
    pub async fn in_memory(catalog: Catalog, defaults: PreferenceProfile) -> Self {
        let preferences =
            PreferenceService::load(Arc::new(MemoryProfileStore::new()), defaults).await;
        Self::new(catalog, preferences)
    }
}
