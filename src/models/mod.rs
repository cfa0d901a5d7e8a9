pub mod options;
pub mod preference_profile;
pub mod product;

pub use options::{
    language_label, BudgetRange, LanguageOption, RegionOption, BUDGET_RANGE, LANGUAGE_OPTIONS,
    REGION_OPTIONS,
};
pub use preference_profile::{
    language_from_locale, system_language, LikedCategories, PreferenceProfile, ProfileInput,
    DEFAULT_BUDGET, DEFAULT_LANGUAGE, DEFAULT_REGION,
};
pub use product::{MatchBadge, MatchFlags, ProductRecord, ScoredProduct};
