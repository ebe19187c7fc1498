use chrono::NaiveDate;
use serde::Serialize;

use crate::record::BookingRecord;
use crate::seating::Fcfa;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSection {
    pub title: &'static str,
    pub items: Vec<ReviewItem>,
}

impl ReviewSection {
    pub fn value(&self, label: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.value.as_str())
    }
}

/// What the user confirms before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub sections: Vec<ReviewSection>,
}

impl ReviewSummary {
    /// Sections for every part of the record filled so far.
    pub fn from_record(record: &BookingRecord) -> Self {
        let mut sections = Vec::new();

        if let (Some(m), Some(seats)) = (&record.match_selection, &record.seats) {
            sections.push(ReviewSection {
                title: "Match Details",
                items: vec![
                    item("Match", format!("{} vs {}", m.team1, m.team2)),
                    item("Date", format_date(m.date)),
                    item("Time", or_na(m.time.as_deref())),
                    item("Stadium", or_na(Some(m.stadium.as_str()))),
                    item("Seat Number", seats.selected_seats.join(", ")),
                    item("Price", format_price(seats.total_price)),
                ],
            });
        }

        if let Some(hotel) = &record.hotel {
            sections.push(ReviewSection {
                title: "Hotel Details",
                items: vec![
                    item("Guest", hotel.full_name()),
                    item("Email", hotel.email.clone()),
                    item("Arrival Date", format_date(hotel.arrival_date)),
                    item("Departure Date", format_date(hotel.departure_date)),
                    item(
                        "Guests",
                        hotel
                            .number_of_guests
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    ),
                    item("Room Preference", or_na(hotel.room_preference.as_deref())),
                ],
            });
        }

        if let Some(flight) = &record.flight {
            sections.push(ReviewSection {
                title: "Flight Details",
                items: vec![
                    item("Departure City", flight.departure_city.clone()),
                    item("Departure Date", format_date(flight.departure_date)),
                    item("Return Date", format_date(flight.return_date)),
                    item("Cabin Class", flight.cabin_class.label().to_string()),
                    item(
                        "Passengers",
                        format!(
                            "{} Adult(s), {} Child(ren), {} Infant(s)",
                            flight.num_adults, flight.num_children, flight.num_infants
                        ),
                    ),
                ],
            });
        }

        if let Some(personal) = &record.personal {
            let nationality = record.visa.as_ref().map(|v| v.nationality.as_str());
            sections.push(ReviewSection {
                title: "Personal Information",
                items: vec![
                    item(
                        "Full Name",
                        format!("{} {}", personal.first_name, personal.last_name),
                    ),
                    item("Gender", personal.gender.label().to_string()),
                    item("Date of Birth", format_date(personal.date_of_birth)),
                    item("Nationality", or_na(nationality)),
                    item("Passport Number", mask_tail(personal.passport_number.expose())),
                    item("Passport Expiry", format_date(personal.passport_expiry_date)),
                ],
            });
        }

        if let Some(travel) = &record.travel {
            sections.push(ReviewSection {
                title: "Travel Information",
                items: vec![
                    item("Entry Point", travel.entry_point.label().to_string()),
                    item(
                        "Accommodation",
                        format!(
                            "{} - {}",
                            travel.accommodation_type.label(),
                            travel.accommodation_city
                        ),
                    ),
                    item("Phone in Morocco", travel.phone_number.clone()),
                ],
            });
        }

        Self { sections }
    }

    pub fn section(&self, title: &str) -> Option<&ReviewSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

fn item(label: &'static str, value: String) -> ReviewItem {
    ReviewItem { label, value }
}

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `dd/mm/yyyy`, or `N/A`.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_price(amount: Fcfa) -> String {
    format!("{} FCFA", amount)
}

// Keep the last three characters visible so the user can recognise the number.
fn mask_tail(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let visible = chars.len().min(3);
    let hidden = chars.len() - visible;
    std::iter::repeat('*')
        .take(hidden)
        .chain(chars[hidden..].iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FlightInfo, MatchSelection, PersonalInfo, SeatsInfo, VisaEligibility};
    use afcon_shared::Masked;

    #[test]
    fn test_match_section() {
        let mut record = BookingRecord::new();
        record.match_selection = Some(MatchSelection {
            match_id: "1".to_string(),
            team1: "Nigeria".to_string(),
            team2: "Egypt".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 21),
            time: Some("20:00".to_string()),
            stadium: "Stade Mohammed V".to_string(),
            city: "Casablanca".to_string(),
        });
        record.seats = Some(SeatsInfo {
            selected_seats: vec!["A1".to_string(), "A2".to_string()],
            total_price: 300,
        });

        let summary = ReviewSummary::from_record(&record);
        let section = summary.section("Match Details").unwrap();
        assert_eq!(section.value("Match"), Some("Nigeria vs Egypt"));
        assert_eq!(section.value("Date"), Some("21/12/2025"));
        assert_eq!(section.value("Seat Number"), Some("A1, A2"));
        assert_eq!(section.value("Price"), Some("300 FCFA"));
        assert!(summary.section("Flight Details").is_none());
    }

    #[test]
    fn test_missing_values_render_na() {
        let mut record = BookingRecord::new();
        record.flight = Some(FlightInfo {
            departure_city: "Dubai (DXB)".to_string(),
            num_adults: 2,
            num_infants: 1,
            ..Default::default()
        });

        let summary = ReviewSummary::from_record(&record);
        let flight = summary.section("Flight Details").unwrap();
        assert_eq!(flight.value("Departure Date"), Some("N/A"));
        assert_eq!(
            flight.value("Passengers"),
            Some("2 Adult(s), 0 Child(ren), 1 Infant(s)")
        );
    }

    #[test]
    fn test_passport_number_partially_masked() {
        let mut record = BookingRecord::new();
        record.visa = Some(VisaEligibility {
            nationality: "Senegalese".to_string(),
            ..Default::default()
        });
        record.personal = Some(PersonalInfo {
            first_name: "Awa".to_string(),
            last_name: "Ndiaye".to_string(),
            passport_number: Masked::from("A01234567"),
            ..Default::default()
        });

        let summary = ReviewSummary::from_record(&record);
        let personal = summary.section("Personal Information").unwrap();
        assert_eq!(personal.value("Passport Number"), Some("******567"));
        assert_eq!(personal.value("Nationality"), Some("Senegalese"));
        assert_eq!(personal.value("Date of Birth"), Some("N/A"));
    }
}
