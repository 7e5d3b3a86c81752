//! Booking models matching the frontend Booking interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Status filter for ledger queries; `all` bypasses the status predicate.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
    Cancelled,
}

impl StatusFilter {
    /// Whether a booking with the given status passes this filter.
    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == BookingStatus::Active,
            StatusFilter::Completed => status == BookingStatus::Completed,
            StatusFilter::Cancelled => status == BookingStatus::Cancelled,
        }
    }
}

/// A reservation in the ledger.
///
/// Hotel name, location and guest name are denormalized display strings the
/// frontend renders directly; `hotel_id` links back to the catalog entry the
/// booking was made against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub booking_number: String,
    pub hotel_id: String,
    pub hotel_name: String,
    pub location: String,
    pub guest_name: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Total charged in whole dollars, service fee included
    pub total_amount: u32,
    pub status: BookingStatus,
    pub guests: u32,
}

/// Request body for confirming a new booking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub hotel_id: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_guests")]
    pub guests: u32,
    #[serde(default)]
    pub guest_name: Option<String>,
}

fn default_guests() -> u32 {
    2
}

/// A confirmed booking together with its confirmation message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub message: String,
}

/// Ledger totals per status, shown on the filter tabs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
}
