pub mod app_config;
pub mod booking_client;
pub mod catalog_client;

pub use app_config::Config;
pub use booking_client::HotelBookingClient;
pub use catalog_client::HttpCatalogClient;

use std::time::Duration;

/// HTTP client shared by the remote adapters.
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("afcon-store/", env!("CARGO_PKG_VERSION")))
        .build()
}
