use afcon_shared::Masked;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::documents::DocumentRef;
use crate::seating::Fcfa;
use crate::step::Step;

/// Everything the user entered across the purchase flow.
///
/// Each step fills exactly one section. Sections are never rewritten once
/// set, and a step never reads a section owned by a later step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub match_selection: Option<MatchSelection>,
    pub seats: Option<SeatsInfo>,
    pub visa: Option<VisaEligibility>,
    pub hotel: Option<HotelInfo>,
    pub flight: Option<FlightInfo>,
    pub travel: Option<TravelInfo>,
    pub personal: Option<PersonalInfo>,
    pub documents: Option<Documents>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl BookingRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the section owned by `step` has been filled.
    pub fn has_section(&self, step: Step) -> bool {
        match step {
            Step::SeatSelection => self.match_selection.is_some() && self.seats.is_some(),
            Step::VisaEligibility => self.visa.is_some(),
            Step::HotelBooking => self.hotel.is_some(),
            Step::FlightReservation => self.flight.is_some(),
            Step::TravelConditions => self.travel.is_some(),
            Step::PersonalDetails => self.personal.is_some(),
            Step::Documents => self.documents.is_some(),
            Step::Review => self.confirmed_at.is_some(),
            Step::Submit => false,
        }
    }

    /// Every step up to and including review has contributed its section.
    pub fn is_complete(&self) -> bool {
        Step::ALL
            .iter()
            .filter(|s| **s != Step::Submit)
            .all(|s| self.has_section(*s))
    }

    /// Seat ids joined by commas, used as the ticket number downstream.
    pub fn ticket_number(&self) -> Option<String> {
        self.seats.as_ref().map(|s| s.selected_seats.join(","))
    }

    pub fn total_price(&self) -> Option<Fcfa> {
        self.seats.as_ref().map(|s| s.total_price)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSelection {
    pub match_id: String,
    pub team1: String,
    pub team2: String,
    pub date: Option<NaiveDate>,
    /// Kick-off, as shown on the fixture list (`20:00`).
    pub time: Option<String>,
    pub stadium: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatsInfo {
    pub selected_seats: Vec<String>,
    pub total_price: Fcfa,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportType {
    #[default]
    Ordinary,
    Diplomatic,
    Service,
    TravelDocument,
}

impl PassportType {
    pub fn label(self) -> &'static str {
        match self {
            PassportType::Ordinary => "Ordinary Passport",
            PassportType::Diplomatic => "Diplomatic Passport",
            PassportType::Service => "Service Passport",
            PassportType::TravelDocument => "Travel Document",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisaEligibility {
    pub nationality: String,
    pub country_of_residence: String,
    pub passport_type: PassportType,
    pub has_valid_visa: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: Option<Masked<String>>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub number_of_guests: Option<u32>,
    pub room_preference: Option<String>,
    /// Room picked from the hotel API listing, needed for remote submission.
    pub room_id: Option<u64>,
}

impl HotelInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn label(self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightInfo {
    pub departure_city: String,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub cabin_class: CabinClass,
    pub num_adults: u32,
    pub num_children: u32,
    pub num_infants: u32,
    pub special_requests: Option<String>,
    pub flexible_dates: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPoint {
    #[default]
    Casablanca,
    Marrakesh,
    Fes,
    Rabat,
    Tangier,
}

impl EntryPoint {
    pub fn label(self) -> &'static str {
        match self {
            EntryPoint::Casablanca => "Mohammed V International Airport - Casablanca",
            EntryPoint::Marrakesh => "Marrakesh Menara Airport",
            EntryPoint::Fes => "Fès–Saïs Airport",
            EntryPoint::Rabat => "Rabat–Salé Airport",
            EntryPoint::Tangier => "Tangier Ibn Battouta Airport",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationType {
    #[default]
    Hotel,
    PrivateResidence,
    TournamentAccommodation,
    Other,
}

impl AccommodationType {
    pub fn label(self) -> &'static str {
        match self {
            AccommodationType::Hotel => "Hotel",
            AccommodationType::PrivateResidence => "Private Residence",
            AccommodationType::TournamentAccommodation => "Tournament Accommodation",
            AccommodationType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelInfo {
    pub entry_point: EntryPoint,
    pub entry_date: Option<NaiveDate>,
    pub exit_date: Option<NaiveDate>,
    pub accommodation_type: AccommodationType,
    pub accommodation_address: String,
    pub accommodation_city: String,
    /// Local phone number during the stay.
    pub phone_number: String,
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub country_of_birth: Option<String>,
    pub marital_status: MaritalStatus,
    pub occupation: Option<String>,
    pub employer_name: Option<String>,
    pub employer_address: Option<String>,
    pub passport_number: Masked<String>,
    pub passport_issue_date: Option<NaiveDate>,
    pub passport_expiry_date: Option<NaiveDate>,
    pub passport_issue_place: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Documents {
    pub passport_scan: Option<DocumentRef>,
    pub photo: Option<DocumentRef>,
    pub bank_statement: Option<DocumentRef>,
    pub hotel_reservation: Option<DocumentRef>,
    pub flight_reservation: Option<DocumentRef>,
    pub match_ticket: Option<DocumentRef>,
}

impl Documents {
    /// Uploaded documents with their field names, photo slots flagged.
    pub fn uploaded(&self) -> Vec<(&'static str, &DocumentRef, bool)> {
        [
            ("passport_scan", &self.passport_scan, false),
            ("photo", &self.photo, true),
            ("bank_statement", &self.bank_statement, false),
            ("hotel_reservation", &self.hotel_reservation, false),
            ("flight_reservation", &self.flight_reservation, false),
            ("match_ticket", &self.match_ticket, false),
        ]
        .into_iter()
        .filter_map(|(field, doc, photo)| doc.as_ref().map(|d| (field, d, photo)))
        .collect()
    }
}
