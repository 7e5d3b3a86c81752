//! Data models for the Hotel Booking System backend.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod booking;
mod dashboard;
mod datastore;
mod hotel;
mod identity;
mod profile;

pub use booking::*;
pub use dashboard::*;
pub use datastore::*;
pub use hotel::*;
pub use identity::*;
pub use profile::*;
