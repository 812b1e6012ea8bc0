use crate::flight::{MAX_NAME_LEN, clip};
use serde::{Deserialize, Serialize};

/// Longest stored passport number, in bytes.
pub const MAX_PASSPORT_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub age: i32,
    /// Unique key within the store.
    pub passport: String,
    /// 0 means unassigned; otherwise a flight ID, not checked against
    /// the flight store.
    #[serde(default)]
    pub assigned_flight_id: i32,
    #[serde(default)]
    pub assigned_seat_no: i32,
}

impl Passenger {
    /// Builds an unassigned passenger with clipped text fields.
    pub fn new(name: &str, age: i32, passport: &str) -> Passenger {
        Passenger {
            name: clip(name, MAX_NAME_LEN),
            age,
            passport: clip(passport, MAX_PASSPORT_LEN),
            assigned_flight_id: 0,
            assigned_seat_no: 0,
        }
    }
}
