use afcon_core::catalog::{CatalogClient, CatalogError};
use afcon_shared::models::catalog::{BookingList, RoomList};
use afcon_shared::{Hotel, HotelBooking, Match, Room};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::app_config::ApiConfig;

/// `reqwest` client for the ticketing and hotel listing APIs.
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    ticketing_base_url: String,
    hotel_base_url: String,
}

impl HttpCatalogClient {
    pub fn new(api: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: crate::http_client(api.timeout())?,
            ticketing_base_url: api.ticketing_base_url.trim_end_matches('/').to_string(),
            hotel_base_url: api.hotel_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str, url: String) -> Result<T, CatalogError> {
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Failed to fetch {}: {}", resource, e);
            CatalogError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Upstream returned {} for {}", status, url);
            return Err(CatalogError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| CatalogError::Decode {
            resource: resource.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn list_matches(&self) -> Result<Vec<Match>, CatalogError> {
        self.fetch("matches", format!("{}/api/matchs", self.ticketing_base_url))
            .await
    }

    async fn get_match(&self, match_id: u64) -> Result<Match, CatalogError> {
        self.fetch(
            "match",
            format!("{}/api/matchs/{}", self.ticketing_base_url, match_id),
        )
        .await
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, CatalogError> {
        self.fetch("hotels", format!("{}/api/hotels/", self.hotel_base_url))
            .await
    }

    async fn list_rooms(&self, hotel_id: u64) -> Result<Vec<Room>, CatalogError> {
        let list: RoomList = self
            .fetch(
                "rooms",
                format!("{}/api/hotels/{}/rooms", self.hotel_base_url, hotel_id),
            )
            .await?;
        Ok(list.rooms)
    }

    async fn list_bookings(&self) -> Result<Vec<HotelBooking>, CatalogError> {
        let list: BookingList = self
            .fetch("bookings", format!("{}/api/booking/", self.hotel_base_url))
            .await?;
        Ok(list.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_config(server: &MockServer) -> ApiConfig {
        ApiConfig {
            ticketing_base_url: server.uri(),
            hotel_base_url: format!("{}/", server.uri()),
            timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_get_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/matchs/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id_match": 3,
                "nom_match": "Morocco vs Ghana",
                "date_match": "2025-12-21T20:00:00Z",
                "statut": "À venir",
                "Competition": { "nom_competition": "CAN", "annee": 2025 },
                "equipeA": { "nom_equipe": "Morocco" },
                "equipeB": { "nom_equipe": "Ghana" },
                "Stade": { "nom": "Stade Mohammed V" }
            })))
            .mount(&server)
            .await;

        let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
        let fixture = client.get_match(3).await.unwrap();
        assert_eq!(fixture.away.name, "Ghana");
        assert_eq!(fixture.group, None);
    }

    #[tokio::test]
    async fn test_rooms_unwrap_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hotels/9/rooms"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "rooms": [
                    {"id": 1, "name": "Deluxe", "type": "double", "price": 120.0, "availability": true, "capacity": 2},
                    {"id": 2, "name": "Suite", "type": "suite", "price": 300.0, "availability": false, "capacity": 4}
                ]
            })))
            .mount(&server)
            .await;

        let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
        let rooms = client.list_rooms(9).await.unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1].room_type, "suite");
        assert!(!rooms[1].availability);
    }

    #[tokio::test]
    async fn test_missing_rooms_key_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hotels/1/rooms"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
        assert!(client.list_rooms(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hotels/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
        let err = client.list_hotels().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_bad_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/matchs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
        let err = client.list_matches().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = HttpCatalogClient::new(&ApiConfig {
            ticketing_base_url: "http://127.0.0.1:9".to_string(),
            hotel_base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 2,
        })
        .unwrap();
        let err = client.list_bookings().await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)));
    }
}
