//! Hotel catalog API endpoints.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Hotel, HotelSummary};
use crate::AppState;

/// Query parameters for the hotel list.
#[derive(Debug, Deserialize)]
pub struct HotelListQuery {
    /// Case-insensitive substring matched against name and location
    #[serde(default)]
    pub q: String,
}

/// GET /api/hotels - List hotels, optionally filtered by a search query.
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(params): Query<HotelListQuery>,
) -> ApiResult<Vec<HotelSummary>> {
    let revision_id = state.store.revision_id().await;
    success(state.store.search_hotels(&params.q).await, revision_id)
}

/// GET /api/hotels/:id - Get a single hotel.
pub async fn get_hotel(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Hotel> {
    let revision_id = state.store.revision_id().await;
    match state.store.get_hotel(&id).await {
        Some(hotel) => success(hotel, revision_id),
        None => error(
            AppError::NotFound(format!("Hotel {} not found", id)),
            revision_id,
        ),
    }
}

/// DELETE /api/hotels/:id - Remove a hotel. Succeeds even when already absent.
pub async fn delete_hotel(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let removed = state.store.remove_hotel(&id).await;
    if removed {
        tracing::info!("Removed hotel {}", id);
    }
    let revision_id = state.store.revision_id().await;
    success((), revision_id)
}

/// Acknowledgement body for catalog mutations that are not implemented yet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAck {
    pub acknowledged: bool,
    pub message: String,
}

/// POST /api/hotels - Acknowledge an add-hotel request without storing anything.
pub async fn add_hotel(State(state): State<AppState>) -> ApiResult<CatalogAck> {
    let revision_id = state.store.revision_id().await;
    success(
        CatalogAck {
            acknowledged: true,
            message: "Adding hotels is not implemented; nothing was stored".to_string(),
        },
        revision_id,
    )
}

/// PUT /api/hotels/:id - Acknowledge an edit-hotel request without changing anything.
pub async fn edit_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CatalogAck> {
    let revision_id = state.store.revision_id().await;
    success(
        CatalogAck {
            acknowledged: true,
            message: format!("Editing hotel {} is not implemented; nothing was changed", id),
        },
        revision_id,
    )
}
