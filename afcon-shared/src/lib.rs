pub mod models;
pub mod pii;

pub use models::catalog::{Hotel, HotelBooking, HotelBookingRequest, Match, Room};
pub use pii::Masked;
