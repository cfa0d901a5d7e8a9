use tokio::sync::RwLock;

use super::{ProfileStore, StoredProfile};
use crate::{error::AppResult, models::PreferenceProfile};

/// Keeps the saved profile in process memory; nothing survives a restart
#[derive(Default)]
pub struct MemoryProfileStore {
    saved: RwLock<Option<StoredProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `profile`
    pub fn with_profile(profile: PreferenceProfile) -> Self {
        Self {
            saved: RwLock::new(Some(StoredProfile::new(profile))),
        }
    }
}

#[async_trait::async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> AppResult<Option<PreferenceProfile>> {
        let saved = self.saved.read().await;
        Ok(saved.as_ref().map(|stored| stored.profile.clone()))
    }

    async fn save(&self, profile: &PreferenceProfile) -> AppResult<()> {
        let mut saved = self.saved.write().await;
        *saved = Some(StoredProfile::new(profile.clone()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
