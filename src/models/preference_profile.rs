use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Region used when the profile has none
pub const DEFAULT_REGION: &str = "Delhi";

/// Language used when neither the profile nor the system locale provides one
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Budget ceiling used when the profile has none
pub const DEFAULT_BUDGET: u32 = 2000;

/// Set of liked category names
///
/// Membership checks are O(1). Insertion order is kept alongside so the
/// categories can be listed in the order the user liked them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LikedCategories {
    order: Vec<String>,
    members: HashSet<String>,
}

impl LikedCategories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.members.contains(category)
    }

    /// Adds the category, returns false if it was already liked
    pub fn insert(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if self.members.insert(category.clone()) {
            self.order.push(category);
            true
        } else {
            false
        }
    }

    /// Removes the category, returns false if it was not liked
    pub fn remove(&mut self, category: &str) -> bool {
        if self.members.remove(category) {
            self.order.retain(|c| c != category);
            true
        } else {
            false
        }
    }

    /// Flips membership of `category` and returns whether it is liked afterwards
    pub fn toggle(&mut self, category: &str) -> bool {
        if self.remove(category) {
            false
        } else {
            self.insert(category)
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Categories in the order they were liked
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

// Set semantics: two collections with the same members are equal
impl PartialEq for LikedCategories {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for LikedCategories {}

impl From<Vec<String>> for LikedCategories {
    fn from(categories: Vec<String>) -> Self {
        let mut liked = Self::new();
        for category in categories {
            liked.insert(category);
        }
        liked
    }
}

impl From<LikedCategories> for Vec<String> {
    fn from(liked: LikedCategories) -> Self {
        liked.order
    }
}

impl<S: Into<String>> FromIterator<S> for LikedCategories {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut liked = Self::new();
        for category in iter {
            liked.insert(category);
        }
        liked
    }
}

/// Snapshot of a user's browsing preferences
///
/// Absent or `null` fields deserialize to the defaults, so a partially
/// saved profile still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProfileInput")]
pub struct PreferenceProfile {
    /// Compared by exact equality against a product's region
    pub region: String,
    /// BCP-47 style tag, e.g. "hi-IN"
    pub preferred_language: String,
    pub liked_categories: LikedCategories,
    /// Inclusive price ceiling
    pub preferred_budget: u32,
    /// Case-insensitive name filter, empty means no filter
    pub search_term: String,
}

/// Profile as supplied by a client, every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub region: Option<String>,
    pub preferred_language: Option<String>,
    pub liked_categories: Option<LikedCategories>,
    pub preferred_budget: Option<u32>,
    pub search_term: Option<String>,
}

impl ProfileInput {
    /// Fills absent fields from `defaults`, then applies [`PreferenceProfile::with_fallbacks`]
    pub fn resolve(self, defaults: &PreferenceProfile) -> PreferenceProfile {
        self.fill(defaults).with_fallbacks(defaults)
    }

    fn fill(self, defaults: &PreferenceProfile) -> PreferenceProfile {
        PreferenceProfile {
            region: self.region.unwrap_or_else(|| defaults.region.clone()),
            preferred_language: self
                .preferred_language
                .unwrap_or_else(|| defaults.preferred_language.clone()),
            liked_categories: self.liked_categories.unwrap_or_default(),
            preferred_budget: self.preferred_budget.unwrap_or(defaults.preferred_budget),
            search_term: self.search_term.unwrap_or_default(),
        }
    }
}

impl From<ProfileInput> for PreferenceProfile {
    fn from(input: ProfileInput) -> Self {
        input.fill(&PreferenceProfile::default())
    }
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self::new(DEFAULT_REGION, system_language(), DEFAULT_BUDGET)
    }
}

impl PreferenceProfile {
    /// Creates a profile with no liked categories and no search term
    pub fn new(
        region: impl Into<String>,
        preferred_language: impl Into<String>,
        budget: u32,
    ) -> Self {
        Self {
            region: region.into(),
            preferred_language: preferred_language.into(),
            liked_categories: LikedCategories::new(),
            preferred_budget: budget,
            search_term: String::new(),
        }
    }

    /// Replaces a blank region or language, or a zero budget, with the value
    /// from `defaults`
    pub fn with_fallbacks(mut self, defaults: &PreferenceProfile) -> Self {
        if self.region.trim().is_empty() {
            self.region = defaults.region.clone();
        }
        if self.preferred_language.trim().is_empty() {
            self.preferred_language = defaults.preferred_language.clone();
        }
        if self.preferred_budget == 0 {
            self.preferred_budget = defaults.preferred_budget;
        }
        self
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
    }

    pub fn set_preferred_language(&mut self, language: impl Into<String>) {
        self.preferred_language = language.into();
    }

    /// Likes the category if absent, unlikes it if present.
    /// Returns whether the category is liked afterwards.
    pub fn toggle_liked_category(&mut self, category: &str) -> bool {
        self.liked_categories.toggle(category)
    }

    pub fn remove_liked_category(&mut self, category: &str) -> bool {
        self.liked_categories.remove(category)
    }

    pub fn clear_liked_categories(&mut self) {
        self.liked_categories.clear();
    }

    pub fn set_preferred_budget(&mut self, budget: u32) {
        self.preferred_budget = budget;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}

/// Converts a POSIX locale string such as `en_IN.UTF-8` into a language tag
pub fn language_from_locale(locale: &str) -> Option<String> {
    let locale = locale
        .split(|c: char| c == '.' || c == '@')
        .next()
        .unwrap_or_default()
        .trim();

    if locale.is_empty() || locale == "C" || locale == "POSIX" {
        return None;
    }

    Some(locale.replace('_', "-"))
}

/// Language tag of the running system, falling back to [`DEFAULT_LANGUAGE`]
pub fn system_language() -> String {
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|locale| language_from_locale(&locale))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}
