use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod admin;
pub mod listing;
pub mod stats;

/// All API routes, without the metrics endpoint. The prometheus layer is
/// process-global, so only the binary installs it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/listings", get(listing::list))
        .route("/api/listings/:id", get(listing::detail))
        .route("/api/sell", post(listing::sell))
        .route(
            "/api/admin/listings",
            get(admin::list).post(admin::create),
        )
        .route(
            "/api/admin/listings/:id",
            put(admin::upsert).delete(admin::delete),
        )
        .route("/api/stats", get(stats::stats))
        .route("/api/stats/cache", get(stats::cache_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
