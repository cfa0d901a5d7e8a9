pub mod memory_store;
pub mod redis_store;

pub use memory_store::MemoryProfileStore;
pub use redis_store::RedisProfileStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppResult, models::PreferenceProfile};

/// Durable home of the user's preference profile
///
/// The preference service saves through this after every mutation and
/// loads from it once at startup.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the saved profile, or `None` if nothing has been saved yet
    async fn load(&self) -> AppResult<Option<PreferenceProfile>>;

    async fn save(&self, profile: &PreferenceProfile) -> AppResult<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Serialized form of a saved profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub profile: PreferenceProfile,
    pub saved_at: DateTime<Utc>,
}

impl StoredProfile {
    pub fn new(profile: PreferenceProfile) -> Self {
        Self {
            profile,
            saved_at: Utc::now(),
        }
    }
}
