//! Fixed sample data loaded into the store at startup.

use chrono::NaiveDate;

use crate::models::{
    ActivityEntry, ActivityKind, Booking, BookingStatus, DashboardStats, Hotel, Identity, Profile,
    Room,
};

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn room(id: &str, room_type: &str, price: u32, available: u32, total: u32) -> Room {
    Room {
        id: id.to_string(),
        room_type: room_type.to_string(),
        price,
        available,
        total,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four sample hotels.
pub fn hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "1".to_string(),
            name: "Grand Plaza Hotel".to_string(),
            location: "New York, NY".to_string(),
            rating: 4.5,
            reviews: 328,
            description: "Luxury hotel in the heart of Manhattan".to_string(),
            amenities: strings(&["WiFi", "Pool", "Gym", "Restaurant", "Spa"]),
            rooms: vec![
                room("r1", "Standard Room", 150, 8, 20),
                room("r2", "Deluxe Suite", 299, 3, 10),
                room("r3", "Presidential Suite", 599, 1, 2),
            ],
        },
        Hotel {
            id: "2".to_string(),
            name: "Ocean View Resort".to_string(),
            location: "Miami, FL".to_string(),
            rating: 4.8,
            reviews: 512,
            description: "Beachfront paradise with stunning ocean views".to_string(),
            amenities: strings(&["WiFi", "Beach Access", "Pool", "Restaurant", "Bar"]),
            rooms: vec![
                room("r4", "Ocean View Room", 200, 12, 30),
                room("r5", "Beach Front Suite", 350, 5, 15),
            ],
        },
        Hotel {
            id: "3".to_string(),
            name: "Mountain Lodge".to_string(),
            location: "Aspen, CO".to_string(),
            rating: 4.3,
            reviews: 201,
            description: "Cozy mountain retreat with ski-in/ski-out access".to_string(),
            amenities: strings(&["WiFi", "Gym", "Restaurant", "Spa"]),
            rooms: vec![
                room("r6", "Standard Room", 120, 15, 40),
                room("r7", "Mountain View Suite", 250, 6, 20),
            ],
        },
        Hotel {
            id: "4".to_string(),
            name: "City Center Inn".to_string(),
            location: "Chicago, IL".to_string(),
            rating: 4.1,
            reviews: 156,
            description: "Modern comfort in downtown Chicago, perfect for business and leisure."
                .to_string(),
            amenities: strings(&["WiFi", "Gym", "Restaurant", "Breakfast"]),
            rooms: vec![
                room("r8", "Standard Room", 180, 14, 25),
                room("r9", "Business Suite", 260, 6, 10),
            ],
        },
    ]
}

/// The four sample ledger entries.
///
/// Amounts and room labels are kept verbatim even where they no longer line
/// up with the current catalog; the ledger denormalizes at booking time and
/// tolerates that drift.
pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "1".to_string(),
            booking_number: "BK-2025-001".to_string(),
            hotel_id: "1".to_string(),
            hotel_name: "Grand Plaza Hotel".to_string(),
            location: "New York, NY".to_string(),
            guest_name: "John Guest".to_string(),
            room_type: "Deluxe Suite".to_string(),
            check_in: d(2025, 12, 24),
            check_out: d(2025, 12, 26),
            total_amount: 599,
            status: BookingStatus::Active,
            guests: 2,
        },
        Booking {
            id: "2".to_string(),
            booking_number: "BK-2025-002".to_string(),
            hotel_id: "2".to_string(),
            hotel_name: "Ocean View Resort".to_string(),
            location: "Miami, FL".to_string(),
            guest_name: "John Guest".to_string(),
            room_type: "Ocean Front Room".to_string(),
            check_in: d(2026, 1, 15),
            check_out: d(2026, 1, 20),
            total_amount: 1250,
            status: BookingStatus::Active,
            guests: 2,
        },
        Booking {
            id: "3".to_string(),
            booking_number: "BK-2024-156".to_string(),
            hotel_id: "3".to_string(),
            hotel_name: "Mountain Lodge".to_string(),
            location: "Aspen, CO".to_string(),
            guest_name: "Sarah Johnson".to_string(),
            room_type: "Standard Room".to_string(),
            check_in: d(2024, 11, 10),
            check_out: d(2024, 11, 15),
            total_amount: 850,
            status: BookingStatus::Completed,
            guests: 4,
        },
        Booking {
            id: "4".to_string(),
            booking_number: "BK-2024-198".to_string(),
            hotel_id: "4".to_string(),
            hotel_name: "City Center Inn".to_string(),
            location: "Chicago, IL".to_string(),
            guest_name: "Mike Wilson".to_string(),
            room_type: "Business Suite".to_string(),
            check_in: d(2024, 12, 1),
            check_out: d(2024, 12, 3),
            total_amount: 340,
            status: BookingStatus::Cancelled,
            guests: 1,
        },
    ]
}

/// Headline numbers for the admin dashboard.
pub fn stats() -> DashboardStats {
    DashboardStats {
        total_users: 1284,
        total_hotels: 156,
        active_bookings: 423,
        revenue: 125_840,
        user_change: 12.5,
        hotel_change: 8.3,
        booking_change: -3.2,
        revenue_change: 15.7,
    }
}

/// Recent-activity feed for the admin dashboard.
pub fn activity() -> Vec<ActivityEntry> {
    let entry = |id: &str, kind: ActivityKind, message: &str, timestamp: &str| ActivityEntry {
        id: id.to_string(),
        kind,
        message: message.to_string(),
        timestamp: timestamp.to_string(),
    };

    vec![
        entry(
            "1",
            ActivityKind::Booking,
            "New booking at Grand Plaza Hotel",
            "5 minutes ago",
        ),
        entry(
            "2",
            ActivityKind::User,
            "New user registered: Sarah Johnson",
            "12 minutes ago",
        ),
        entry(
            "3",
            ActivityKind::Hotel,
            "Ocean View Resort updated pricing",
            "1 hour ago",
        ),
        entry(
            "4",
            ActivityKind::Booking,
            "Booking cancelled at City Center Inn",
            "2 hours ago",
        ),
    ]
}

/// Starting profile for an account that has never saved one.
pub fn default_profile(identity: &Identity) -> Profile {
    Profile {
        name: identity.name.clone(),
        email: identity.email.clone(),
        phone: "+1 (555) 123-4567".to_string(),
        address: "123 Main Street".to_string(),
        city: "New York, NY 10001".to_string(),
        country: "United States".to_string(),
        date_joined: "2024-01-15".to_string(),
    }
}
