use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/options", get(handlers::get_options))
        // Catalog
        .route("/catalog", get(handlers::get_catalog))
        .route("/catalog/:id", get(handlers::get_product))
        // Preferences
        .route("/preferences", get(handlers::get_preferences))
        .route("/preferences/region", put(handlers::set_region))
        .route("/preferences/language", put(handlers::set_language))
        .route("/preferences/budget", put(handlers::set_budget))
        .route("/preferences/search", put(handlers::set_search))
        .route("/preferences/categories", delete(handlers::clear_categories))
        .route("/preferences/categories/:category", delete(handlers::remove_category))
        .route(
            "/preferences/categories/:category/toggle",
            post(handlers::toggle_category),
        )
        .route("/preferences/reset", post(handlers::reset_preferences))
        // Feed
        .route("/feed", get(handlers::get_feed))
        .route("/feed/rank", post(handlers::rank_feed))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
