use serde::{Deserialize, Serialize};

/// A product as supplied by the catalog source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRecord {
    /// Opaque unique identifier
    pub id: String,
    /// Display name, searched case-insensitively
    pub name: String,
    /// Price in whole rupees
    pub price: u32,
    #[serde(default)]
    pub image: String,
    pub region: String,
    /// BCP-47 style tag, e.g. "hi-IN"
    pub language: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Which preference rules a product satisfied
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchFlags {
    #[serde(rename = "regionMatch")]
    pub region: bool,
    #[serde(rename = "languageMatch")]
    pub exact_language: bool,
    /// Base subtags equal but the full tags differ. Never set together with `exact_language`.
    #[serde(rename = "partialLanguageMatch")]
    pub partial_language: bool,
    #[serde(rename = "likedCategory")]
    pub liked_category: bool,
}

/// Highlight shown on a ranked product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchBadge {
    /// Region and exact language both match
    Perfect,
    /// Exactly one of region or exact language matches
    Good,
}

impl MatchBadge {
    pub fn for_matches(matches: &MatchFlags) -> Option<Self> {
        match (matches.region, matches.exact_language) {
            (true, true) => Some(MatchBadge::Perfect),
            (true, false) | (false, true) => Some(MatchBadge::Good),
            (false, false) => None,
        }
    }
}

/// A product with the score it earned against a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: ProductRecord,
    pub score: u32,
    #[serde(flatten)]
    pub matches: MatchFlags,
}

impl ScoredProduct {
    pub fn badge(&self) -> Option<MatchBadge> {
        MatchBadge::for_matches(&self.matches)
    }
}
