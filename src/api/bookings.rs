//! Booking ledger API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    Booking, BookingConfirmation, BookingCounts, CreateBookingRequest, StatusFilter,
};
use crate::pricing::Quote;
use crate::AppState;

/// Query parameters for the booking list.
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    /// Case-insensitive substring matched against booking number, hotel name
    /// and guest name
    #[serde(default)]
    pub q: String,
    /// Status filter; `all` bypasses the status predicate
    #[serde(default)]
    pub status: StatusFilter,
}

/// GET /api/bookings - Search the ledger.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingListQuery>,
) -> ApiResult<Vec<Booking>> {
    let revision_id = state.store.revision_id().await;
    success(
        state.store.search_bookings(&params.q, params.status).await,
        revision_id,
    )
}

/// GET /api/bookings/counts - Ledger totals per status for the filter tabs.
pub async fn booking_counts(State(state): State<AppState>) -> ApiResult<BookingCounts> {
    let revision_id = state.store.revision_id().await;
    success(state.store.booking_counts().await, revision_id)
}

/// GET /api/bookings/:id - Get a single booking.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Booking> {
    let revision_id = state.store.revision_id().await;
    match state.store.get_booking(&id).await {
        Some(booking) => success(booking, revision_id),
        None => error(
            AppError::NotFound(format!("Booking {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/bookings - Confirm a new booking.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> ApiResult<BookingConfirmation> {
    let revision_id = state.store.revision_id().await;

    // The booking is made in the requester's name unless one is given
    let guest_name = match request.guest_name.clone() {
        Some(name) => name,
        None => match state.sessions.current().await {
            Some(identity) => identity.name,
            None => {
                return error(
                    AppError::Validation("Guest name is required".to_string()),
                    revision_id,
                )
            }
        },
    };

    match state.store.create_booking(&request, &guest_name).await {
        Ok(confirmation) => {
            tracing::info!(
                "Confirmed booking {} at {}",
                confirmation.booking.booking_number,
                confirmation.booking.hotel_name
            );
            let new_revision = state.store.revision_id().await;
            success(confirmation, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/bookings/:id/cancel - Cancel a booking. A second cancel is a no-op.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Booking> {
    let revision_id = state.store.revision_id().await;
    match state.store.cancel_booking(&id).await {
        Ok(booking) => {
            tracing::info!(
                "Booking {} is now {}",
                booking.booking_number,
                booking.status.as_str()
            );
            let new_revision = state.store.revision_id().await;
            success(booking, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// Request body for pricing a prospective stay.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub hotel_id: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// POST /api/bookings/quote - Price breakdown for a prospective stay.
pub async fn quote_booking(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> ApiResult<Quote> {
    let revision_id = state.store.revision_id().await;
    match state
        .store
        .quote_stay(
            &request.hotel_id,
            &request.room_type,
            request.check_in,
            request.check_out,
        )
        .await
    {
        Ok(quote) => success(quote, revision_id),
        Err(e) => error(e, revision_id),
    }
}
