use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{
    BookingRecord, Documents, FlightInfo, HotelInfo, MatchSelection, PersonalInfo, SeatsInfo,
    TravelInfo, VisaEligibility,
};
use crate::seating;
use crate::step::Step;
use crate::ValidationError;

/// Seat-selection form: the match being booked and the seats picked on the
/// stadium map. The total is never taken from the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatSelectionInput {
    #[serde(rename = "match")]
    pub match_selection: MatchSelection,
    pub selected_seats: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfirmation {
    pub confirmed: bool,
}

/// The form submitted for one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    SeatSelection(SeatSelectionInput),
    VisaEligibility(VisaEligibility),
    HotelBooking(HotelInfo),
    FlightReservation(FlightInfo),
    TravelConditions(TravelInfo),
    PersonalDetails(PersonalInfo),
    Documents(Documents),
    Review(ReviewConfirmation),
}

impl StepInput {
    /// Decode a JSON form body for `step`. Absent fields decode to their
    /// empty value so that validation, not decoding, reports them.
    pub fn parse(step: Step, body: serde_json::Value) -> Result<Self, InputError> {
        let input = match step {
            Step::SeatSelection => StepInput::SeatSelection(serde_json::from_value(body)?),
            Step::VisaEligibility => StepInput::VisaEligibility(serde_json::from_value(body)?),
            Step::HotelBooking => StepInput::HotelBooking(serde_json::from_value(body)?),
            Step::FlightReservation => StepInput::FlightReservation(serde_json::from_value(body)?),
            Step::TravelConditions => StepInput::TravelConditions(serde_json::from_value(body)?),
            Step::PersonalDetails => StepInput::PersonalDetails(serde_json::from_value(body)?),
            Step::Documents => StepInput::Documents(serde_json::from_value(body)?),
            Step::Review => StepInput::Review(serde_json::from_value(body)?),
            Step::Submit => return Err(InputError::NoForm(step)),
        };
        Ok(input)
    }

    pub fn step(&self) -> Step {
        match self {
            StepInput::SeatSelection(_) => Step::SeatSelection,
            StepInput::VisaEligibility(_) => Step::VisaEligibility,
            StepInput::HotelBooking(_) => Step::HotelBooking,
            StepInput::FlightReservation(_) => Step::FlightReservation,
            StepInput::TravelConditions(_) => Step::TravelConditions,
            StepInput::PersonalDetails(_) => Step::PersonalDetails,
            StepInput::Documents(_) => Step::Documents,
            StepInput::Review(_) => Step::Review,
        }
    }

    /// Check the step's required fields. Never touches the record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        match self {
            StepInput::SeatSelection(input) => {
                errors.require("match.match_id", &input.match_selection.match_id);
                if input.selected_seats.is_empty() {
                    errors.missing("selected_seats");
                } else if let Err(e) = seating::parse_seats(&input.selected_seats) {
                    errors.invalid("selected_seats", e.to_string());
                }
            }
            StepInput::VisaEligibility(visa) => {
                errors
                    .require("nationality", &visa.nationality)
                    .require("country_of_residence", &visa.country_of_residence);
            }
            StepInput::HotelBooking(hotel) => {
                errors
                    .require("first_name", &hotel.first_name)
                    .require("last_name", &hotel.last_name)
                    .require("email", &hotel.email)
                    .require("phone", &hotel.phone);
                if !hotel.email.trim().is_empty() && !hotel.email.contains('@') {
                    errors.invalid("email", "is not an email address");
                }
                check_order(&mut errors, "departure_date", hotel.arrival_date, hotel.departure_date);
            }
            StepInput::FlightReservation(flight) => {
                errors.require("departure_city", &flight.departure_city);
                if flight.num_adults == 0 {
                    errors.missing("num_adults");
                }
                check_order(&mut errors, "return_date", flight.departure_date, flight.return_date);
            }
            StepInput::TravelConditions(travel) => {
                errors
                    .require("accommodation_address", &travel.accommodation_address)
                    .require("accommodation_city", &travel.accommodation_city)
                    .require("phone_number", &travel.phone_number);
                check_order(&mut errors, "exit_date", travel.entry_date, travel.exit_date);
            }
            StepInput::PersonalDetails(personal) => {
                errors
                    .require("first_name", &personal.first_name)
                    .require("last_name", &personal.last_name)
                    .require_some("date_of_birth", &personal.date_of_birth)
                    .require("passport_number", personal.passport_number.expose())
                    .require_some("passport_expiry_date", &personal.passport_expiry_date);
                check_order(
                    &mut errors,
                    "passport_expiry_date",
                    personal.passport_issue_date,
                    personal.passport_expiry_date,
                );
            }
            StepInput::Documents(docs) => {
                errors
                    .require_some("passport_scan", &docs.passport_scan)
                    .require_some("photo", &docs.photo);
                for (field, doc, photo) in docs.uploaded() {
                    if let Err(reason) = doc.check(photo) {
                        errors.invalid(field, reason);
                    }
                }
            }
            StepInput::Review(review) => {
                if !review.confirmed {
                    errors.missing("confirmed");
                }
            }
        }
        errors.into_result()
    }

    /// Write this step's section into the record. Callers validate first.
    pub fn merge_into(self, record: &mut BookingRecord) {
        match self {
            StepInput::SeatSelection(input) => {
                // Store canonical ids (`A1`), never the raw strings.
                let seats = seating::parse_seats(&input.selected_seats).unwrap_or_default();
                record.match_selection = Some(input.match_selection);
                record.seats = Some(SeatsInfo {
                    selected_seats: seats.iter().map(ToString::to_string).collect(),
                    total_price: seating::total_price(&seats),
                });
            }
            StepInput::VisaEligibility(visa) => record.visa = Some(visa),
            StepInput::HotelBooking(hotel) => record.hotel = Some(hotel),
            StepInput::FlightReservation(flight) => record.flight = Some(flight),
            StepInput::TravelConditions(travel) => record.travel = Some(travel),
            StepInput::PersonalDetails(personal) => record.personal = Some(personal),
            StepInput::Documents(docs) => record.documents = Some(docs),
            StepInput::Review(_) => record.confirmed_at = Some(Utc::now()),
        }
    }
}

fn check_order(
    errors: &mut ValidationError,
    field: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.invalid(field, format!("must not be before {}", start));
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Malformed form body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Step {0} takes no form input")]
    NoForm(Step),
}
