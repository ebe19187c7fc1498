use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One screen of the purchase pipeline. The order is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    SeatSelection,
    VisaEligibility,
    HotelBooking,
    FlightReservation,
    TravelConditions,
    PersonalDetails,
    Documents,
    Review,
    /// Terminal marker: the record is complete and waiting for submission.
    Submit,
}

impl Step {
    pub const ALL: [Step; 9] = [
        Step::SeatSelection,
        Step::VisaEligibility,
        Step::HotelBooking,
        Step::FlightReservation,
        Step::TravelConditions,
        Step::PersonalDetails,
        Step::Documents,
        Step::Review,
        Step::Submit,
    ];

    pub fn first() -> Self {
        Step::SeatSelection
    }

    /// Zero-based position in the pipeline.
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or(Self::ALL.len() - 1)
    }

    /// The step after this one, `None` for `Submit`.
    pub fn next(self) -> Option<Step> {
        Self::ALL.get(self.position() + 1).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            Step::SeatSelection => "seat-selection",
            Step::VisaEligibility => "visa-eligibility",
            Step::HotelBooking => "hotel-booking",
            Step::FlightReservation => "flight-reservation",
            Step::TravelConditions => "travel-conditions",
            Step::PersonalDetails => "personal-details",
            Step::Documents => "documents",
            Step::Review => "review",
            Step::Submit => "submit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::SeatSelection => "Select Seats",
            Step::VisaEligibility => "Visa Eligibility",
            Step::HotelBooking => "Hotel Booking",
            Step::FlightReservation => "Flight Reservation",
            Step::TravelConditions => "Travel Conditions",
            Step::PersonalDetails => "Personal Details",
            Step::Documents => "Documents",
            Step::Review => "Ticket Details and Confirmation",
            Step::Submit => "Submit",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown step: {0}")]
pub struct UnknownStep(pub String);

impl FromStr for Step {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|step| step.id() == s)
            .ok_or_else(|| UnknownStep(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let mut step = Step::first();
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            visited.push(next);
            step = next;
        }
        assert_eq!(visited, Step::ALL.to_vec());
        assert_eq!(Step::Submit.next(), None);
    }

    #[test]
    fn test_id_round_trip_through_serde() {
        let json = serde_json::to_string(&Step::TravelConditions).unwrap();
        assert_eq!(json, "\"travel-conditions\"");
        assert_eq!("personal-details".parse::<Step>().unwrap(), Step::PersonalDetails);
        assert!("confirmation".parse::<Step>().is_err());
    }
}
