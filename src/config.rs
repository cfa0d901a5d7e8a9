use serde::Deserialize;

use crate::models::{system_language, PreferenceProfile, DEFAULT_BUDGET, DEFAULT_REGION};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON catalog file. The bundled sample catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Redis connection URL for persisting the profile. Kept in memory when unset.
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Redis key holding the saved profile
    #[serde(default = "default_profile_key")]
    pub profile_key: String,

    #[serde(default = "default_region")]
    pub default_region: String,

    /// Overrides the language derived from the system locale
    #[serde(default)]
    pub default_language: Option<String>,

    #[serde(default = "default_budget")]
    pub default_budget: u32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_profile_key() -> String {
    "feed-personalizer:profile".to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_budget() -> u32 {
    DEFAULT_BUDGET
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Profile a fresh or reset session starts from
    pub fn profile_defaults(&self) -> PreferenceProfile {
        let language = self
            .default_language
            .clone()
            .filter(|tag| !tag.trim().is_empty())
            .unwrap_or_else(system_language);

        PreferenceProfile::new(self.default_region.clone(), language, self.default_budget)
    }
}
