//! Datastore model for one-shot frontend hydration.

use serde::Serialize;

use super::{Booking, HotelSummary};

/// The root datastore containing all application data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub revision_id: i64,
    pub generated_at: String,
    pub hotels: Vec<HotelSummary>,
    pub bookings: Vec<Booking>,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}
