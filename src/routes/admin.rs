use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use metrics::increment_counter;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use super::listing;
use crate::{entities::Listing, error::AppError, form::ListingForm, AppState, Upserted};

pub async fn list(State(state): State<AppState>) -> Json<Vec<Listing>> {
    Json(state.store.read().await.list().to_vec())
}

pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ListingForm>,
) -> Result<(StatusCode, Json<Listing>), AppError> {
    listing::create_listing(&state, form, "create").await
}

/// Saves the edit form for `id`. An unknown id is added at the front of the
/// catalog rather than rejected. Fields the form leaves out keep their stored
/// values on an edit.
pub async fn upsert(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<ListingForm>,
) -> Result<(StatusCode, Json<Listing>), AppError> {
    form.validate()?;

    let mut store = state.store.write().await;
    let listing = match store.get(id) {
        Some(existing) => form.merge_into(existing),
        None => form.into_listing(id),
    };
    let outcome = store.upsert(listing.clone());
    drop(store);
    state.invalidate().await;

    let status = match outcome {
        Upserted::Created => StatusCode::CREATED,
        Upserted::Updated => StatusCode::OK,
    };
    info!(id, ?outcome, "Admin saved listing");
    increment_counter!("armory_update", "type" => "upsert");

    Ok((status, Json(listing)))
}

#[derive(Debug, Default, Deserialize, Clone, Copy)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, AppError> {
    if !query.confirm {
        return Err(AppError::ConfirmationRequired(id));
    }

    let removed = state.store.write().await.delete(id);
    if removed.is_some() {
        state.invalidate().await;
        increment_counter!("armory_update", "type" => "delete");
    }
    info!(id, removed = removed.is_some(), "Admin deleted listing");

    Ok(StatusCode::NO_CONTENT)
}
