use redis::{aio::ConnectionManager, AsyncCommands, Client};

use super::{ProfileStore, StoredProfile};
use crate::{error::AppResult, models::PreferenceProfile};

/// Saves the profile as JSON under a single Redis key
#[derive(Clone)]
pub struct RedisProfileStore {
    connection: ConnectionManager,
    key: String,
}

impl RedisProfileStore {
    /// Connects to Redis. The connection manager reconnects on its own after failures.
    pub async fn connect(redis_url: &str, key: impl Into<String>) -> AppResult<Self> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        let key = key.into();

        tracing::info!(key = %key, "Connected to Redis profile store");

        Ok(Self { connection, key })
    }
}

/// Decodes a value written by [`RedisProfileStore::save`]
fn decode_stored(json: &str) -> AppResult<PreferenceProfile> {
    let stored: StoredProfile = serde_json::from_str(json)?;
    tracing::debug!(saved_at = %stored.saved_at, "Loaded saved profile");
    Ok(stored.profile)
}

#[async_trait::async_trait]
impl ProfileStore for RedisProfileStore {
    async fn load(&self) -> AppResult<Option<PreferenceProfile>> {
        let mut conn = self.connection.clone();

        let cached: Option<String> = conn.get(&self.key).await.map_err(|e| {
            tracing::warn!(error = %e, "Redis get failed");
            e
        })?;

        cached.as_deref().map(decode_stored).transpose()
    }

    async fn save(&self, profile: &PreferenceProfile) -> AppResult<()> {
        let json = serde_json::to_string(&StoredProfile::new(profile.clone()))?;
        let mut conn = self.connection.clone();
        conn.set::<_, _, ()>(&self.key, json).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_decode_stored_profile() {
        let json = r#"{
            "profile": {
                "region": "Kolkata",
                "preferredLanguage": "bn-IN",
                "likedCategories": ["Sarees"],
                "preferredBudget": 1500,
                "searchTerm": "tant"
            },
            "savedAt": "2024-05-01T10:00:00Z"
        }"#;

        let profile = decode_stored(json).unwrap();
        assert_eq!(profile.region, "Kolkata");
        assert_eq!(profile.preferred_language, "bn-IN");
        assert!(profile.liked_categories.contains("Sarees"));
        assert_eq!(profile.preferred_budget, 1500);
        assert_eq!(profile.search_term, "tant");
    }

    #[test]
    fn test_decode_written_value() {
        let mut profile = PreferenceProfile::new("Pune", "mr-IN", 900);
        profile.toggle_liked_category("Shoes");
        let json = serde_json::to_string(&StoredProfile::new(profile.clone())).unwrap();

        assert_eq!(decode_stored(&json).unwrap(), profile);
    }

    #[test]
    fn test_decode_corrupt_value() {
        assert!(matches!(
            decode_stored("{\"profile\": "),
            Err(AppError::Serialization(_))
        ));
        assert!(matches!(decode_stored("42"), Err(AppError::Serialization(_))));
    }
}
