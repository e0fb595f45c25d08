use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use metrics::{histogram, increment_counter};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::{
    entities::Listing, error::AppError, filter::ListingFilter, form::ListingForm, AppState,
};

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
    pub total: usize,
}

/// Catalog view used by the home and products pages.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> Json<ListingsResponse> {
    increment_counter!("armory_listings_request");

    let start = Instant::now();
    let store = state.store.read().await;
    let listings = filter.apply(store.list());
    let total = store.len();
    drop(store);
    histogram!("armory_query", start.elapsed(), "type" => "listings");

    Json(ListingsResponse { listings, total })
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Listing>, AppError> {
    increment_counter!("armory_listing_detail_request");

    let listing = state.store.read().await.get(id).cloned();
    listing.map(Json).ok_or(AppError::NotFound(id))
}

/// Sell page submission. The store picks the identifier.
pub async fn sell(
    State(state): State<AppState>,
    Json(form): Json<ListingForm>,
) -> Result<(StatusCode, Json<Listing>), AppError> {
    create_listing(&state, form, "sell").await
}

/// Validates `form` and adds it at the front of the catalog under a fresh id.
pub async fn create_listing(
    state: &AppState,
    form: ListingForm,
    source: &'static str,
) -> Result<(StatusCode, Json<Listing>), AppError> {
    form.validate()?;

    let listing = state
        .store
        .write()
        .await
        .create(form.into_draft())
        .ok_or_else(|| eyre!("no listing identifiers left"))?;
    state.invalidate().await;

    info!(id = listing.id, source, "New listing {} created", listing.name);
    increment_counter!("armory_update", "type" => source);

    Ok((StatusCode::CREATED, Json(listing)))
}
