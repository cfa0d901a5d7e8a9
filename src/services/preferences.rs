use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    db::ProfileStore,
    error::{AppError, AppResult},
    models::PreferenceProfile,
};

/// Owner of the live preference profile
///
/// Every mutation is applied in memory and then saved through the
/// configured [`ProfileStore`]. Ranking never reads the live profile
/// directly, it works on a [`snapshot`](Self::snapshot).
pub struct PreferenceService {
    profile: RwLock<PreferenceProfile>,
    defaults: PreferenceProfile,
    store: Arc<dyn ProfileStore>,
}

impl PreferenceService {
    /// Restores the saved profile, or starts from `defaults` if there is none
    /// or it cannot be read
    pub async fn load(store: Arc<dyn ProfileStore>, defaults: PreferenceProfile) -> Self {
        let profile = match store.load().await {
            Ok(Some(saved)) => {
                tracing::info!(store = store.name(), "Restored saved preference profile");
                saved.with_fallbacks(&defaults)
            }
            Ok(None) => {
                tracing::info!(store = store.name(), "No saved profile, using defaults");
                defaults.clone()
            }
            Err(e) => {
                tracing::warn!(
                    store = store.name(),
                    error = %e,
                    "Failed to load saved profile, using defaults"
                );
                defaults.clone()
            }
        };

        Self {
            profile: RwLock::new(profile),
            defaults,
            store,
        }
    }

    /// Profile a fresh or reset session starts from
    pub fn defaults(&self) -> &PreferenceProfile {
        &self.defaults
    }

    /// Immutable copy of the current profile
    pub async fn snapshot(&self) -> PreferenceProfile {
        self.profile.read().await.clone()
    }

    pub async fn set_region(&self, region: &str) -> AppResult<PreferenceProfile> {
        let region = require_non_blank("region", region)?;
        let (profile, _) = self.update(|p| p.set_region(region)).await;
        Ok(profile)
    }

    pub async fn set_preferred_language(&self, language: &str) -> AppResult<PreferenceProfile> {
        let language = require_non_blank("language", language)?;
        let (profile, _) = self.update(|p| p.set_preferred_language(language)).await;
        Ok(profile)
    }

    /// Flips the category and returns the new profile and whether it is now liked
    pub async fn toggle_liked_category(
        &self,
        category: &str,
    ) -> AppResult<(PreferenceProfile, bool)> {
        let category = require_non_blank("category", category)?;
        let (profile, liked) = self.update(|p| p.toggle_liked_category(&category)).await;

        tracing::info!(
            category = %category,
            liked,
            "{} liked category",
            if liked { "Added" } else { "Removed" }
        );

        Ok((profile, liked))
    }

    pub async fn remove_liked_category(&self, category: &str) -> PreferenceProfile {
        let (profile, _) = self.update(|p| p.remove_liked_category(category)).await;
        profile
    }

    pub async fn clear_liked_categories(&self) -> PreferenceProfile {
        let (profile, _) = self.update(|p| p.clear_liked_categories()).await;
        profile
    }

    pub async fn set_preferred_budget(&self, budget: u32) -> PreferenceProfile {
        let (profile, _) = self.update(|p| p.set_preferred_budget(budget)).await;
        profile
    }

    pub async fn set_search_term(&self, term: &str) -> PreferenceProfile {
        let (profile, _) = self.update(|p| p.set_search_term(term)).await;
        profile
    }

    /// Returns the profile to the configured defaults
    pub async fn reset(&self) -> PreferenceProfile {
        let defaults = self.defaults.clone();
        let (profile, _) = self.update(|p| *p = defaults).await;
        profile
    }

    /// Applies `change`, saves the result and returns it.
    ///
    /// The write lock is held through the save so saves land in mutation
    /// order. A failed save is logged; the in-memory change stands.
    async fn update<R>(
        &self,
        change: impl FnOnce(&mut PreferenceProfile) -> R,
    ) -> (PreferenceProfile, R) {
        let mut profile = self.profile.write().await;
        let outcome = change(&mut *profile);

        if let Err(e) = self.store.save(&*profile).await {
            tracing::warn!(
                store = self.store.name(),
                error = %e,
                "Failed to save preference profile"
            );
        }

        (PreferenceProfile::clone(&profile), outcome)
    }
}

fn require_non_blank(field: &str, value: &str) -> AppResult<String> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be blank", field)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryProfileStore, MockProfileStore};

    fn defaults() -> PreferenceProfile {
        PreferenceProfile::new("Delhi", "hi-IN", 2000)
    }

    fn store_error() -> AppError {
        AppError::Cache(redis::RedisError::from((
            redis::ErrorKind::IoError,
            "connection refused",
        )))
    }

    async fn in_memory() -> (PreferenceService, Arc<MemoryProfileStore>) {
        let store = Arc::new(MemoryProfileStore::new());
        let service = PreferenceService::load(store.clone(), defaults()).await;
        (service, store)
    }

    #[tokio::test]
    async fn test_starts_from_defaults() {
        let (service, _) = in_memory().await;
        assert_eq!(service.snapshot().await, defaults());
    }

    #[tokio::test]
    async fn test_restores_saved_profile() {
        let saved = PreferenceProfile::new("Chennai", "ta-IN", 3000);
        let store = Arc::new(MemoryProfileStore::with_profile(saved.clone()));
        let service = PreferenceService::load(store, defaults()).await;
        assert_eq!(service.snapshot().await, saved);
    }

    #[tokio::test]
    async fn test_blank_saved_fields_fall_back() {
        let saved = PreferenceProfile::new("", "", 1000);
        let store = Arc::new(MemoryProfileStore::with_profile(saved));
        let service = PreferenceService::load(store, defaults()).await;
        let profile = service.snapshot().await;
        assert_eq!(profile.region, "Delhi");
        assert_eq!(profile.preferred_language, "hi-IN");
        assert_eq!(profile.preferred_budget, 1000);
    }

    #[tokio::test]
    async fn test_zero_saved_budget_falls_back() {
        let saved = PreferenceProfile::new("Chennai", "ta-IN", 0);
        let store = Arc::new(MemoryProfileStore::with_profile(saved));
        let service = PreferenceService::load(store, defaults()).await;
        let profile = service.snapshot().await;
        assert_eq!(profile.region, "Chennai");
        assert_eq!(profile.preferred_budget, 2000);
    }

    #[tokio::test]
    async fn test_exposes_configured_defaults() {
        let custom = PreferenceProfile::new("Mumbai", "mr-IN", 3500);
        let store = Arc::new(MemoryProfileStore::new());
        let service = PreferenceService::load(store, custom.clone()).await;
        assert_eq!(service.defaults(), &custom);
    }

    #[tokio::test]
    async fn test_load_failure_uses_defaults() {
        let mut store = MockProfileStore::new();
        store.expect_load().times(1).returning(|| Err(store_error()));
        store.expect_name().return_const("mock");

        let service = PreferenceService::load(Arc::new(store), defaults()).await;
        assert_eq!(service.snapshot().await, defaults());
    }

    #[tokio::test]
    async fn test_every_mutation_is_saved() {
        let mut store = MockProfileStore::new();
        store.expect_load().returning(|| Ok(None));
        store.expect_name().return_const("mock");
        store.expect_save().times(3).returning(|_| Ok(()));

        let service = PreferenceService::load(Arc::new(store), defaults()).await;
        service.set_region("Mumbai").await.unwrap();
        service.set_preferred_budget(1500).await;
        service.toggle_liked_category("Shoes").await.unwrap();
    }

    #[tokio::test]
    async fn test_save_failure_keeps_change() {
        let mut store = MockProfileStore::new();
        store.expect_load().returning(|| Ok(None));
        store.expect_name().return_const("mock");
        store.expect_save().returning(|_| Err(store_error()));

        let service = PreferenceService::load(Arc::new(store), defaults()).await;
        let profile = service.set_region("Pune").await.unwrap();
        assert_eq!(profile.region, "Pune");
        assert_eq!(service.snapshot().await.region, "Pune");
    }

    #[tokio::test]
    async fn test_mutations_are_persisted() {
        let (service, store) = in_memory().await;
        service.set_preferred_language("bn-IN").await.unwrap();
        service.set_search_term("saree").await;

        let saved = store.load().await.unwrap().unwrap();
        assert_eq!(saved.preferred_language, "bn-IN");
        assert_eq!(saved.search_term, "saree");
    }

    #[tokio::test]
    async fn test_toggle_reports_state() {
        let (service, _) = in_memory().await;

        let (profile, liked) = service.toggle_liked_category("Sarees").await.unwrap();
        assert!(liked);
        assert!(profile.liked_categories.contains("Sarees"));

        let (profile, liked) = service.toggle_liked_category("Sarees").await.unwrap();
        assert!(!liked);
        assert!(profile.liked_categories.is_empty());
    }

    #[tokio::test]
    async fn test_remove_and_clear_categories() {
        let (service, _) = in_memory().await;
        service.toggle_liked_category("Sarees").await.unwrap();
        service.toggle_liked_category("Shoes").await.unwrap();

        let profile = service.remove_liked_category("Sarees").await;
        assert_eq!(profile.liked_categories.len(), 1);

        let profile = service.remove_liked_category("Missing").await;
        assert_eq!(profile.liked_categories.len(), 1);

        let profile = service.clear_liked_categories().await;
        assert!(profile.liked_categories.is_empty());
    }

    #[tokio::test]
    async fn test_blank_inputs_rejected() {
        let (service, _) = in_memory().await;
        assert!(matches!(service.set_region("  ").await, Err(AppError::InvalidInput(_))));
        assert!(matches!(
            service.set_preferred_language("").await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            service.toggle_liked_category("").await,
            Err(AppError::InvalidInput(_))
        ));
        assert_eq!(service.snapshot().await, defaults());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let (service, store) = in_memory().await;
        service.set_region("Kolkata").await.unwrap();
        service.toggle_liked_category("Sarees").await.unwrap();
        service.set_search_term("tant").await;

        let profile = service.reset().await;
        assert_eq!(profile, defaults());
        assert_eq!(store.load().await.unwrap(), Some(defaults()));
    }
}
