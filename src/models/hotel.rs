//! Hotel and room models matching the frontend Hotel interface.

use serde::{Deserialize, Serialize};

/// A bookable room type within a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: String,
    /// Nightly rate in whole dollars
    pub price: u32,
    pub available: u32,
    pub total: u32,
}

/// A hotel in the catalog, owning its room types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f32,
    pub reviews: u32,
    pub description: String,
    pub amenities: Vec<String>,
    pub rooms: Vec<Room>,
}

impl Hotel {
    /// Total rooms across all room types.
    pub fn total_rooms(&self) -> u32 {
        self.rooms.iter().map(|r| r.total).sum()
    }

    /// Rooms currently available across all room types.
    pub fn available_rooms(&self) -> u32 {
        self.rooms.iter().map(|r| r.available).sum()
    }

    /// Occupancy percentage rounded to the nearest whole percent, or `None`
    /// for a hotel with no rooms at all.
    pub fn occupancy(&self) -> Option<u32> {
        let total = self.total_rooms();
        if total == 0 {
            return None;
        }
        let occupied = total.saturating_sub(self.available_rooms());
        Some((100.0 * f64::from(occupied) / f64::from(total)).round() as u32)
    }

    /// Cheapest nightly rate across room types, shown as "From $X/night".
    pub fn from_price(&self) -> Option<u32> {
        self.rooms.iter().map(|r| r.price).min()
    }

    /// Room lookup by its type label.
    pub fn room_by_type(&self, room_type: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_type == room_type)
    }
}

/// Hotel list entry with room statistics derived for the management cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummary {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub total_rooms: u32,
    pub available_rooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_price: Option<u32>,
}

impl From<Hotel> for HotelSummary {
    fn from(hotel: Hotel) -> Self {
        let total_rooms = hotel.total_rooms();
        let available_rooms = hotel.available_rooms();
        let occupancy = hotel.occupancy();
        let from_price = hotel.from_price();
        Self {
            hotel,
            total_rooms,
            available_rooms,
            occupancy,
            from_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel_with_rooms(rooms: Vec<Room>) -> Hotel {
        Hotel {
            id: "h1".to_string(),
            name: "Test Hotel".to_string(),
            location: "Nowhere".to_string(),
            rating: 4.0,
            reviews: 10,
            description: String::new(),
            amenities: vec![],
            rooms,
        }
    }

    fn room(room_type: &str, price: u32, available: u32, total: u32) -> Room {
        Room {
            id: format!("r-{}", room_type),
            room_type: room_type.to_string(),
            price,
            available,
            total,
        }
    }

    #[test]
    fn test_occupancy_rounds_to_nearest_percent() {
        // 20 of 32 rooms occupied is 62.5%, rounded up
        let hotel = hotel_with_rooms(vec![
            room("Standard", 150, 8, 20),
            room("Deluxe", 299, 3, 10),
            room("Presidential", 599, 1, 2),
        ]);
        assert_eq!(hotel.occupancy(), Some(63));
    }

    #[test]
    fn test_occupancy_bounds() {
        let empty = hotel_with_rooms(vec![room("Standard", 100, 10, 10)]);
        assert_eq!(empty.occupancy(), Some(0));

        let full = hotel_with_rooms(vec![room("Standard", 100, 0, 10)]);
        assert_eq!(full.occupancy(), Some(100));
    }

    #[test]
    fn test_occupancy_undefined_without_rooms() {
        assert_eq!(hotel_with_rooms(vec![]).occupancy(), None);
    }

    #[test]
    fn test_from_price_is_cheapest_rate() {
        let hotel = hotel_with_rooms(vec![
            room("Deluxe", 299, 3, 10),
            room("Standard", 150, 8, 20),
        ]);
        assert_eq!(hotel.from_price(), Some(150));
        assert_eq!(hotel_with_rooms(vec![]).from_price(), None);
    }
}
