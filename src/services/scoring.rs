use crate::models::{MatchFlags, PreferenceProfile, ProductRecord};

pub const REGION_MATCH_POINTS: u32 = 10;
pub const EXACT_LANGUAGE_POINTS: u32 = 8;
pub const PARTIAL_LANGUAGE_POINTS: u32 = 4;
pub const LIKED_CATEGORY_POINTS: u32 = 6;

/// Text before the first hyphen of a language tag ("hi" for "hi-IN").
/// A tag without a hyphen is its own base subtag.
pub fn base_subtag(tag: &str) -> &str {
    tag.split_once('-').map_or(tag, |(base, _)| base)
}

/// Evaluates each preference rule against the product independently
pub fn match_flags(profile: &PreferenceProfile, product: &ProductRecord) -> MatchFlags {
    let exact_language = product.language == profile.preferred_language;

    MatchFlags {
        region: product.region == profile.region,
        exact_language,
        partial_language: !exact_language
            && base_subtag(&product.language) == base_subtag(&profile.preferred_language),
        liked_category: profile.liked_categories.contains(&product.category),
    }
}

/// Sum of the bonuses earned by a set of matches
pub fn points(matches: &MatchFlags) -> u32 {
    let mut score = 0;

    if matches.region {
        score += REGION_MATCH_POINTS;
    }
    if matches.exact_language {
        score += EXACT_LANGUAGE_POINTS;
    }
    if matches.partial_language {
        score += PARTIAL_LANGUAGE_POINTS;
    }
    if matches.liked_category {
        score += LIKED_CATEGORY_POINTS;
    }

    score
}

/// Personalization score of a product for a profile
pub fn score(profile: &PreferenceProfile, product: &ProductRecord) -> u32 {
    points(&match_flags(profile, product))
}
