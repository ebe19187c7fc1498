use afcon_shared::{Hotel, HotelBooking, Match, Room};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {status} for {resource}")]
    Status { resource: String, status: u16 },

    #[error("Failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },
}

/// Read-only access to the remote match and hotel listings.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn list_matches(&self) -> Result<Vec<Match>, CatalogError>;

    async fn get_match(&self, match_id: u64) -> Result<Match, CatalogError>;

    async fn list_hotels(&self) -> Result<Vec<Hotel>, CatalogError>;

    async fn list_rooms(&self, hotel_id: u64) -> Result<Vec<Room>, CatalogError>;

    /// Hotel bookings already placed.
    async fn list_bookings(&self) -> Result<Vec<HotelBooking>, CatalogError>;
}
