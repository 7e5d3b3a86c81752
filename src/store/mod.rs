//! In-memory data store.
//!
//! All hotel and booking data is seeded at startup and mutated only in
//! process memory. The revision counter increments once per effective
//! mutation so the frontend can poll for changes cheaply.

mod seed;

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    ActivityEntry, Booking, BookingConfirmation, BookingCounts, BookingStatus,
    CreateBookingRequest, Dashboard, DashboardStats, Datastore, Hotel, HotelSummary, Identity,
    Profile, RevisionInfo, Role, StatusFilter, UpcomingStay, UpdateProfileRequest,
};
use crate::pricing::{self, Quote};

/// Mutable application data behind the store's lock.
struct StoreState {
    hotels: Vec<Hotel>,
    bookings: Vec<Booking>,
    profiles: HashMap<String, Profile>,
    stats: DashboardStats,
    activity: Vec<ActivityEntry>,
    revision_id: i64,
    generated_at: String,
    booking_seq: u32,
}

impl StoreState {
    fn bump_revision(&mut self) {
        self.revision_id += 1;
        self.generated_at = Utc::now().to_rfc3339();
    }
}

/// In-memory store for all application data.
pub struct Store {
    state: RwLock<StoreState>,
}

impl Store {
    /// Create a store populated with the fixed sample data.
    pub fn seeded() -> Self {
        let bookings = seed::bookings();

        // Continue the booking-number sequence after any seeded entries
        // from the current year.
        let prefix = format!("BK-{}-", Utc::now().format("%Y"));
        let booking_seq = bookings
            .iter()
            .filter_map(|b| b.booking_number.strip_prefix(&prefix))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        Self {
            state: RwLock::new(StoreState {
                hotels: seed::hotels(),
                bookings,
                profiles: HashMap::new(),
                stats: seed::stats(),
                activity: seed::activity(),
                revision_id: 0,
                generated_at: Utc::now().to_rfc3339(),
                booking_seq,
            }),
        }
    }

    /// Current revision counter.
    pub async fn revision_id(&self) -> i64 {
        self.state.read().await.revision_id
    }

    /// Current revision counter with its timestamp.
    pub async fn revision_info(&self) -> RevisionInfo {
        let state = self.state.read().await;
        RevisionInfo {
            revision_id: state.revision_id,
            generated_at: state.generated_at.clone(),
        }
    }

    /// Snapshot of all hotels and bookings for one-shot hydration.
    pub async fn datastore(&self) -> Datastore {
        let state = self.state.read().await;
        Datastore {
            revision_id: state.revision_id,
            generated_at: state.generated_at.clone(),
            hotels: state
                .hotels
                .iter()
                .cloned()
                .map(HotelSummary::from)
                .collect(),
            bookings: state.bookings.clone(),
        }
    }

    /// Hotels whose name or location contains the query, case-insensitively.
    ///
    /// Catalog order is preserved; an empty query matches everything.
    pub async fn search_hotels(&self, query: &str) -> Vec<HotelSummary> {
        let state = self.state.read().await;
        let needle = query.to_lowercase();
        state
            .hotels
            .iter()
            .filter(|h| {
                h.name.to_lowercase().contains(&needle)
                    || h.location.to_lowercase().contains(&needle)
            })
            .cloned()
            .map(HotelSummary::from)
            .collect()
    }

    pub async fn get_hotel(&self, id: &str) -> Option<Hotel> {
        let state = self.state.read().await;
        state.hotels.iter().find(|h| h.id == id).cloned()
    }

    /// Remove a hotel from the catalog. Returns whether anything was removed;
    /// removing an absent id is a no-op and leaves the revision untouched.
    ///
    /// Bookings referencing the hotel stay in the ledger.
    pub async fn remove_hotel(&self, id: &str) -> bool {
        let mut state = self.state.write().await;
        let before = state.hotels.len();
        state.hotels.retain(|h| h.id != id);
        let removed = state.hotels.len() != before;
        if removed {
            state.bump_revision();
        }
        removed
    }

    /// Bookings matching the query and status filter, in ledger order.
    ///
    /// The query is matched case-insensitively against booking number, hotel
    /// name and guest name; both conditions must hold.
    pub async fn search_bookings(&self, query: &str, filter: StatusFilter) -> Vec<Booking> {
        let state = self.state.read().await;
        let needle = query.to_lowercase();
        state
            .bookings
            .iter()
            .filter(|b| filter.matches(b.status))
            .filter(|b| {
                b.booking_number.to_lowercase().contains(&needle)
                    || b.hotel_name.to_lowercase().contains(&needle)
                    || b.guest_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Ledger totals per status, ignoring any search query.
    pub async fn booking_counts(&self) -> BookingCounts {
        let state = self.state.read().await;
        let count = |status: BookingStatus| {
            state
                .bookings
                .iter()
                .filter(|b| b.status == status)
                .count()
        };
        BookingCounts {
            all: state.bookings.len(),
            active: count(BookingStatus::Active),
            completed: count(BookingStatus::Completed),
            cancelled: count(BookingStatus::Cancelled),
        }
    }

    pub async fn get_booking(&self, id: &str) -> Option<Booking> {
        let state = self.state.read().await;
        state.bookings.iter().find(|b| b.id == id).cloned()
    }

    /// Set a booking's status to cancelled, whatever it was before.
    ///
    /// Cancelling an already-cancelled booking is a no-op and leaves the
    /// revision untouched. Room availability is not restored.
    pub async fn cancel_booking(&self, id: &str) -> Result<Booking, AppError> {
        let mut state = self.state.write().await;
        let idx = state
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        let changed = state.bookings[idx].status != BookingStatus::Cancelled;
        state.bookings[idx].status = BookingStatus::Cancelled;
        if changed {
            state.bump_revision();
        }
        Ok(state.bookings[idx].clone())
    }

    /// Price a prospective stay against the current catalog.
    pub async fn quote_stay(
        &self,
        hotel_id: &str,
        room_type: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Quote, AppError> {
        let state = self.state.read().await;
        let hotel = state
            .hotels
            .iter()
            .find(|h| h.id == hotel_id)
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;
        let room = hotel.room_by_type(room_type).ok_or_else(|| {
            AppError::NotFound(format!(
                "Room type {} not offered by {}",
                room_type, hotel.name
            ))
        })?;
        pricing::quote(room.price, check_in, check_out)
    }

    /// Confirm a new booking against the current catalog.
    ///
    /// Resolves the hotel and room, prices the stay, takes one room out of
    /// availability and appends the booking to the ledger. Dates are
    /// validated before anything is mutated.
    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
        guest_name: &str,
    ) -> Result<BookingConfirmation, AppError> {
        let mut state = self.state.write().await;

        let hotel_idx = state
            .hotels
            .iter()
            .position(|h| h.id == request.hotel_id)
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", request.hotel_id)))?;
        let room_idx = state.hotels[hotel_idx]
            .rooms
            .iter()
            .position(|r| r.room_type == request.room_type)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Room type {} not offered by {}",
                    request.room_type, state.hotels[hotel_idx].name
                ))
            })?;

        let nightly_rate = state.hotels[hotel_idx].rooms[room_idx].price;
        let quote = pricing::quote(nightly_rate, request.check_in, request.check_out)?;

        if state.hotels[hotel_idx].rooms[room_idx].available == 0 {
            return Err(AppError::Conflict(format!(
                "No {} available at {}",
                request.room_type, state.hotels[hotel_idx].name
            )));
        }
        state.hotels[hotel_idx].rooms[room_idx].available -= 1;

        state.booking_seq += 1;
        let booking_number = format!("BK-{}-{:03}", Utc::now().format("%Y"), state.booking_seq);

        let hotel_id = state.hotels[hotel_idx].id.clone();
        let hotel_name = state.hotels[hotel_idx].name.clone();
        let location = state.hotels[hotel_idx].location.clone();

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            booking_number,
            hotel_id,
            hotel_name: hotel_name.clone(),
            location,
            guest_name: guest_name.to_string(),
            room_type: request.room_type.clone(),
            check_in: request.check_in,
            check_out: request.check_out,
            total_amount: quote.total,
            status: BookingStatus::Active,
            guests: request.guests,
        };

        let message = format!(
            "Booking confirmed for {}! Check-in: {}, Check-out: {}, Guests: {}, Total: ${}",
            hotel_name, request.check_in, request.check_out, request.guests, quote.total
        );

        state.bookings.push(booking.clone());
        state.bump_revision();

        Ok(BookingConfirmation { booking, message })
    }

    /// Profile for the given identity, created from defaults on first access.
    pub async fn profile_for(&self, identity: &Identity) -> Profile {
        let mut state = self.state.write().await;
        state
            .profiles
            .entry(identity.id.clone())
            .or_insert_with(|| seed::default_profile(identity))
            .clone()
    }

    /// Merge the request into the identity's profile; omitted fields keep
    /// their value and the join date never changes.
    pub async fn update_profile(
        &self,
        identity: &Identity,
        request: &UpdateProfileRequest,
    ) -> Profile {
        let mut state = self.state.write().await;
        let profile = state
            .profiles
            .entry(identity.id.clone())
            .or_insert_with(|| seed::default_profile(identity));

        if let Some(name) = &request.name {
            profile.name = name.clone();
        }
        if let Some(email) = &request.email {
            profile.email = email.clone();
        }
        if let Some(phone) = &request.phone {
            profile.phone = phone.clone();
        }
        if let Some(address) = &request.address {
            profile.address = address.clone();
        }
        if let Some(city) = &request.city {
            profile.city = city.clone();
        }
        if let Some(country) = &request.country {
            profile.country = country.clone();
        }

        let updated = profile.clone();
        state.bump_revision();
        updated
    }

    /// Dashboard payload shaped by role: stats and activity for managing
    /// roles, upcoming active stays for the rest.
    pub async fn dashboard(&self, role: Role, today: NaiveDate) -> Dashboard {
        let state = self.state.read().await;
        match role {
            Role::Admin | Role::HotelManager => Dashboard::Admin {
                stats: state.stats.clone(),
                recent_activity: state.activity.clone(),
            },
            Role::Guest | Role::Receptionist => {
                let mut upcoming: Vec<UpcomingStay> = state
                    .bookings
                    .iter()
                    .filter(|b| b.status == BookingStatus::Active)
                    .cloned()
                    .map(|booking| {
                        let days_until_check_in = pricing::days_until(today, booking.check_in);
                        UpcomingStay {
                            booking,
                            days_until_check_in,
                        }
                    })
                    .collect();
                upcoming.sort_by_key(|s| s.booking.check_in);
                Dashboard::Guest { upcoming }
            }
        }
    }
}
