use crate::seatmap::SeatMap;
use crate::time::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

/// Longest stored text field, in bytes. Longer input is clipped, not
/// rejected.
pub const MAX_NAME_LEN: usize = 99;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum FlightStatus {
    #[default]
    OnTime,
    Delayed,
    Cancelled,
}

impl FlightStatus {
    /// The numeric wire code: 0, 1 or 2.
    pub fn code(self) -> i32 {
        match self {
            FlightStatus::OnTime => 0,
            FlightStatus::Delayed => 1,
            FlightStatus::Cancelled => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<FlightStatus> {
        match code {
            0 => Some(FlightStatus::OnTime),
            1 => Some(FlightStatus::Delayed),
            2 => Some(FlightStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Flight {
    #[tabled(rename = "ID")]
    pub id: i32,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "From")]
    pub origin: String,
    #[tabled(rename = "To")]
    pub destination: String,
    #[tabled(rename = "Departure")]
    pub departure: DateTime,
    #[tabled(rename = "Arrival")]
    pub arrival: DateTime,
    #[tabled(rename = "Status")]
    #[serde(default)]
    pub status: FlightStatus,
    #[tabled(rename = "Seats")]
    pub available_seats: i32,
    #[tabled(skip)]
    #[serde(default)]
    pub seat_map: SeatMap,
}

impl Flight {
    /// Builds a flight with clipped text fields and every seat free.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        name: &str,
        origin: &str,
        destination: &str,
        departure: DateTime,
        arrival: DateTime,
        status: FlightStatus,
        available_seats: i32,
    ) -> Flight {
        Flight {
            id,
            name: clip(name, MAX_NAME_LEN),
            origin: clip(origin, MAX_NAME_LEN),
            destination: clip(destination, MAX_NAME_LEN),
            departure,
            arrival,
            status,
            available_seats,
            seat_map: SeatMap::new(),
        }
    }
}

/// Clips text to at most `max` bytes without splitting a UTF-8
/// character.
pub(crate) fn clip(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
