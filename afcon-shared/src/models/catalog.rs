use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Status the hotel API assigns to a freshly submitted booking.
pub const BOOKING_STATUS_PENDING: &str = "En attente";

/// A fixture as returned by the ticketing API (`/api/matchs`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    #[serde(rename = "id_match")]
    pub id: u64,
    #[serde(rename = "nom_match")]
    pub name: String,
    #[serde(rename = "date_match")]
    pub kickoff: DateTime<Utc>,
    #[serde(rename = "statut")]
    pub status: String,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(rename = "Competition")]
    pub competition: Competition,
    #[serde(rename = "Groupe", default)]
    pub group: Option<Group>,
    #[serde(rename = "equipeA")]
    pub home: Team,
    #[serde(rename = "equipeB")]
    pub away: Team,
    #[serde(rename = "Stade")]
    pub stadium: Stadium,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competition {
    #[serde(rename = "nom_competition")]
    pub name: String,
    #[serde(rename = "annee")]
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    #[serde(rename = "nom_groupe")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    #[serde(rename = "nom_equipe")]
    pub name: String,
    /// Path relative to the ticketing host.
    #[serde(rename = "drapeau", default)]
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stadium {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate: f32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub room_type: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "caracteristiques", default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: u32,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub policies: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub cancellation_policy: Option<String>,
}

/// Envelope of `/api/hotels/{id}/rooms`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomList {
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// A hotel booking as listed by `/api/booking/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelBooking {
    pub id: u64,
    pub room_id: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub numero_ticket: String,
    pub email: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "Room", default)]
    pub room: Option<BookedRoom>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookedRoom {
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub room_type: String,
    pub price: f64,
    #[serde(default)]
    pub main_image: Option<String>,
}

impl HotelBooking {
    pub fn is_pending(&self) -> bool {
        self.status == BOOKING_STATUS_PENDING
    }
}

/// Envelope of `/api/booking/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingList {
    #[serde(default)]
    pub data: Vec<HotelBooking>,
}

/// Body of `POST /api/booking/add`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelBookingRequest {
    pub room_id: u64,
    pub email: String,
    pub numero_ticket: String,
    pub name: String,
    pub status: String,
}

impl HotelBookingRequest {
    pub fn pending(room_id: u64, email: String, numero_ticket: String, name: String) -> Self {
        Self {
            room_id,
            email,
            numero_ticket,
            name,
            status: BOOKING_STATUS_PENDING.to_string(),
        }
    }
}

// The hotel API sends `null` for fields it never filled in.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Older bookings carry the ticket number as a JSON number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
