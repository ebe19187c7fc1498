use afcon_core::submission::{BookingSubmitter, SubmissionError, SubmissionReceipt};
use afcon_core::BookingRecord;
use afcon_shared::HotelBookingRequest;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

use crate::app_config::ApiConfig;

/// Submits the booking to the hotel API (`POST /api/booking/add`).
#[derive(Clone)]
pub struct HotelBookingClient {
    client: reqwest::Client,
    hotel_base_url: String,
}

impl HotelBookingClient {
    pub fn new(api: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: crate::http_client(api.timeout())?,
            hotel_base_url: api.hotel_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Map the record onto the endpoint's body.
    pub fn build_request(record: &BookingRecord) -> Result<HotelBookingRequest, SubmissionError> {
        let hotel = record
            .hotel
            .as_ref()
            .ok_or_else(|| SubmissionError::Rejected("hotel details are missing".to_string()))?;
        let room_id = hotel
            .room_id
            .ok_or_else(|| SubmissionError::Rejected("no hotel room selected".to_string()))?;
        let ticket = record
            .ticket_number()
            .ok_or_else(|| SubmissionError::Rejected("no seats selected".to_string()))?;

        Ok(HotelBookingRequest::pending(
            room_id,
            hotel.email.trim().to_string(),
            ticket,
            hotel.full_name(),
        ))
    }
}

#[async_trait]
impl BookingSubmitter for HotelBookingClient {
    async fn submit(&self, record: &BookingRecord) -> Result<SubmissionReceipt, SubmissionError> {
        let body = Self::build_request(record)?;
        let url = format!("{}/api/booking/add", self.hotel_base_url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach booking endpoint: {}", e);
                SubmissionError::Network(e.to_string())
            })?;

        let status = response.status();
        let payload: Option<Value> = response.json().await.ok();

        if !status.is_success() {
            let message = payload
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("booking endpoint returned {}", status));
            error!("Booking rejected with {}: {}", status, message);
            return Err(if status.is_server_error() {
                SubmissionError::Network(message)
            } else {
                SubmissionError::Rejected(message)
            });
        }

        let reference = payload
            .as_ref()
            .and_then(booking_id)
            .unwrap_or_else(|| format!("ROOM-{}-{}", body.room_id, body.numero_ticket));
        info!(%reference, room_id = body.room_id, "Hotel booking created");

        Ok(SubmissionReceipt {
            reference,
            submitted_at: chrono::Utc::now(),
        })
    }
}

// The endpoint answers either with the booking itself or `{ "data": booking }`.
fn booking_id(payload: &Value) -> Option<String> {
    let id = payload
        .get("id")
        .or_else(|| payload.get("data").and_then(|d| d.get("id")))?;
    match id {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use afcon_core::record::{HotelInfo, SeatsInfo};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record(room_id: Option<u64>) -> BookingRecord {
        BookingRecord {
            seats: Some(SeatsInfo {
                selected_seats: vec!["A1".to_string(), "A2".to_string()],
                total_price: 300,
            }),
            hotel: Some(HotelInfo {
                first_name: "Amina".to_string(),
                last_name: "Diallo".to_string(),
                email: "amina@example.com ".to_string(),
                phone: "+221770000000".to_string(),
                room_id,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn client(server: &MockServer) -> HotelBookingClient {
        HotelBookingClient::new(&ApiConfig {
            ticketing_base_url: server.uri(),
            hotel_base_url: server.uri(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_posts_booking_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/booking/add"))
            .and(body_json(json!({
                "roomId": 7,
                "email": "amina@example.com",
                "numeroTicket": "A1,A2",
                "name": "Amina Diallo",
                "status": "En attente"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 55})))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = client(&server).submit(&record(Some(7))).await.unwrap();
        assert_eq!(receipt.reference, "55");
    }

    #[tokio::test]
    async fn test_client_error_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/booking/add"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"message": "Chambre indisponible"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).submit(&record(Some(7))).await.unwrap_err();
        assert_eq!(err, SubmissionError::Rejected("Chambre indisponible".to_string()));
    }

    #[tokio::test]
    async fn test_server_error_is_retryable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/booking/add"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client(&server).submit(&record(Some(7))).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_missing_room_never_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server).submit(&record(None)).await.unwrap_err();
        assert_eq!(err, SubmissionError::Rejected("no hotel room selected".to_string()));
    }

    #[test]
    fn test_booking_id_shapes() {
        assert_eq!(booking_id(&json!({"id": 3})), Some("3".to_string()));
        assert_eq!(booking_id(&json!({"data": {"id": "b-9"}})), Some("b-9".to_string()));
        assert_eq!(booking_id(&json!({"ok": true})), None);
    }
}
