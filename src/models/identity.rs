//! Identity and role models matching the frontend User interface.

use serde::{Deserialize, Serialize};

/// Role assigned to a demo account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    HotelManager,
    Receptionist,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::HotelManager => "hotel_manager",
            Role::Receptionist => "receptionist",
            Role::Guest => "guest",
        }
    }

    /// Screens this role may navigate to, in menu order.
    ///
    /// Dashboard and bookings are visible to everyone. Hotel management is
    /// reserved for admins and hotel managers, hotel search for guests and
    /// receptionists. Profile always comes last.
    pub fn screens(&self) -> Vec<Screen> {
        let mut screens = vec![Screen::Dashboard, Screen::Bookings];
        match self {
            Role::Admin | Role::HotelManager => screens.push(Screen::Hotels),
            Role::Guest | Role::Receptionist => screens.push(Screen::Search),
        }
        screens.push(Screen::Profile);
        screens
    }
}

/// A navigable screen of the admin UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Dashboard,
    Bookings,
    Hotels,
    Search,
    Profile,
}

/// The signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Request body for signing in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Session payload returned to the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub identity: Identity,
    pub screens: Vec<Screen>,
}

impl SessionView {
    pub fn new(identity: Identity) -> Self {
        let screens = identity.role.screens();
        Self { identity, screens }
    }
}
