use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seat prices are whole CFA francs.
pub type Fcfa = u64;

pub const ROWS: u8 = 15;
pub const SEATS_PER_ROW: u8 = 10;

/// Stadium pricing section, assigned by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Vip,
    Premium,
    Regular,
    Economy,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Vip,
        Section::Premium,
        Section::Regular,
        Section::Economy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Vip => "VIP",
            Section::Premium => "Premium",
            Section::Regular => "Regular",
            Section::Economy => "Economy",
        }
    }

    pub fn price(self) -> Fcfa {
        match self {
            Section::Vip => 150,
            Section::Premium => 100,
            Section::Regular => 80,
            Section::Economy => 50,
        }
    }

    /// Rows 0-4 VIP, 5-9 Premium, 10-11 Regular, the rest Economy.
    pub fn for_row(row: u8) -> Section {
        match row {
            0..=4 => Section::Vip,
            5..=9 => Section::Premium,
            10..=11 => Section::Regular,
            _ => Section::Economy,
        }
    }
}

/// A seat such as `A1` (row letter, 1-based seat number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatId {
    row: u8,
    number: u8,
}

impl SeatId {
    pub fn new(row: u8, number: u8) -> Option<Self> {
        if row < ROWS && (1..=SEATS_PER_ROW).contains(&number) {
            Some(Self { row, number })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn section(self) -> Section {
        Section::for_row(self.row)
    }

    pub fn price(self) -> Fcfa {
        self.section().price()
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row) as char, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid seat: {0}")]
pub struct InvalidSeat(pub String);

impl FromStr for SeatId {
    type Err = InvalidSeat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(|| InvalidSeat(s.to_string()))?;
        if !letter.is_ascii_uppercase() {
            return Err(InvalidSeat(s.to_string()));
        }
        // Digits only, no sign or leading zero, so every seat has one spelling.
        let digits = chars.as_str();
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(InvalidSeat(s.to_string()));
        }
        let number: u8 = digits.parse().map_err(|_| InvalidSeat(s.to_string()))?;
        SeatId::new(letter as u8 - b'A', number).ok_or_else(|| InvalidSeat(s.to_string()))
    }
}

/// Sum of section prices for the given seats.
pub fn total_price(seats: &[SeatId]) -> Fcfa {
    seats.iter().map(|seat| seat.price()).sum()
}

/// Parse seat ids, rejecting unknown and repeated ones.
pub fn parse_seats<S: AsRef<str>>(raw: &[S]) -> Result<Vec<SeatId>, InvalidSeat> {
    let mut seats: Vec<SeatId> = Vec::with_capacity(raw.len());
    for id in raw {
        let seat: SeatId = id.as_ref().parse()?;
        if seats.contains(&seat) {
            return Err(InvalidSeat(format!("{} (selected twice)", seat)));
        }
        seats.push(seat);
    }
    Ok(seats)
}

/// Seats picked on the stadium map, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatSelection {
    seats: Vec<SeatId>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the seat, or deselect it if it was already selected.
    /// Returns whether the seat is selected afterwards.
    pub fn toggle(&mut self, seat: SeatId) -> bool {
        if let Some(pos) = self.seats.iter().position(|s| *s == seat) {
            self.seats.remove(pos);
            false
        } else {
            self.seats.push(seat);
            true
        }
    }

    pub fn seats(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn total(&self) -> Fcfa {
        total_price(&self.seats)
    }

    /// Seat ids as strings, the shape the booking forms carry.
    pub fn ids(&self) -> Vec<String> {
        self.seats.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub id: Section,
    pub name: &'static str,
    pub price: Fcfa,
    pub first_row: char,
    pub last_row: char,
}

/// Legend for the stadium map.
pub fn seat_map() -> Vec<SectionInfo> {
    Section::ALL
        .iter()
        .filter_map(|section| {
            let rows: Vec<u8> = (0..ROWS).filter(|r| Section::for_row(*r) == *section).collect();
            let first = *rows.first()?;
            let last = *rows.last()?;
            Some(SectionInfo {
                id: *section,
                name: section.name(),
                price: section.price(),
                first_row: (b'A' + first) as char,
                last_row: (b'A' + last) as char,
            })
        })
        .collect()
}
