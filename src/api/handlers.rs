use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{
        BudgetRange, LanguageOption, PreferenceProfile, ProductRecord, ProfileInput, RegionOption,
        BUDGET_RANGE, LANGUAGE_OPTIONS, REGION_OPTIONS,
    },
    services::FeedView,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RegionRequest {
    pub region: String,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct BudgetRequest {
    pub budget: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleCategoryResponse {
    pub category: String,
    pub liked: bool,
    pub profile: PreferenceProfile,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub languages: &'static [LanguageOption],
    pub regions: &'static [RegionOption],
    pub budget: BudgetRange,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Selectable languages, regions and budget bounds
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        languages: LANGUAGE_OPTIONS,
        regions: REGION_OPTIONS,
        budget: BUDGET_RANGE,
    })
}

/// Get the full catalog in source order
pub async fn get_catalog(State(state): State<AppState>) -> Json<Vec<ProductRecord>> {
    Json(state.catalog.products().to_vec())
}

/// Get one product by id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductRecord>> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))
}

/// Get the current preference profile
pub async fn get_preferences(State(state): State<AppState>) -> Json<PreferenceProfile> {
    Json(state.preferences.snapshot().await)
}

pub async fn set_region(
    State(state): State<AppState>,
    Json(request): Json<RegionRequest>,
) -> AppResult<Json<PreferenceProfile>> {
    let profile = state.preferences.set_region(&request.region).await?;
    Ok(Json(profile))
}

pub async fn set_language(
    State(state): State<AppState>,
    Json(request): Json<LanguageRequest>,
) -> AppResult<Json<PreferenceProfile>> {
    let profile = state
        .preferences
        .set_preferred_language(&request.language)
        .await?;
    Ok(Json(profile))
}

pub async fn set_budget(
    State(state): State<AppState>,
    Json(request): Json<BudgetRequest>,
) -> Json<PreferenceProfile> {
    Json(state.preferences.set_preferred_budget(request.budget).await)
}

pub async fn set_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<PreferenceProfile> {
    Json(state.preferences.set_search_term(&request.term).await)
}

/// Like the category if it is not liked, unlike it otherwise
pub async fn toggle_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ToggleCategoryResponse>> {
    let (profile, liked) = state.preferences.toggle_liked_category(&category).await?;

    Ok(Json(ToggleCategoryResponse {
        category,
        liked,
        profile,
    }))
}

pub async fn remove_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<PreferenceProfile> {
    Json(state.preferences.remove_liked_category(&category).await)
}

pub async fn clear_categories(State(state): State<AppState>) -> Json<PreferenceProfile> {
    Json(state.preferences.clear_liked_categories().await)
}

pub async fn reset_preferences(State(state): State<AppState>) -> Json<PreferenceProfile> {
    Json(state.preferences.reset().await)
}

/// Personalized feed for the current profile
pub async fn get_feed(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<FeedView> {
    let feed = state.feed.current_feed().await;

    tracing::info!(
        request_id = %request_id,
        items = feed.items.len(),
        "Served personalized feed"
    );

    Json(feed)
}

/// Rank the catalog for a caller-supplied profile without changing the saved one.
/// Absent or blank fields take the configured defaults.
pub async fn rank_feed(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(input): Json<ProfileInput>,
) -> Json<FeedView> {
    let profile = input.resolve(state.preferences.defaults());

    tracing::info!(
        request_id = %request_id,
        region = %profile.region,
        language = %profile.preferred_language,
        "Ranking supplied profile"
    );

    Json(state.feed.feed_for(profile))
}
