//! Dashboard models matching the frontend dashboard interfaces.

use serde::{Deserialize, Serialize};

use super::Booking;

/// Headline numbers for the admin dashboard's stat cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u32,
    pub total_hotels: u32,
    pub active_bookings: u32,
    /// Monthly revenue in whole dollars
    pub revenue: u32,
    pub user_change: f32,
    pub hotel_change: f32,
    pub booking_change: f32,
    pub revenue_change: f32,
}

/// Kind of event in the recent-activity feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Booking,
    User,
    Hotel,
}

/// One entry of the admin dashboard's recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    /// Relative display string such as "5 minutes ago"
    pub timestamp: String,
}

/// An active booking as listed on the guest dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingStay {
    #[serde(flatten)]
    pub booking: Booking,
    /// Days from today until check-in; negative once the date has passed
    pub days_until_check_in: i64,
}

/// Role-shaped dashboard payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Dashboard {
    #[serde(rename_all = "camelCase")]
    Admin {
        stats: DashboardStats,
        recent_activity: Vec<ActivityEntry>,
    },
    #[serde(rename_all = "camelCase")]
    Guest { upcoming: Vec<UpcomingStay> },
}
