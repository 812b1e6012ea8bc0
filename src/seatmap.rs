use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::Write;

/// Seat slots tracked per flight.
pub const MAX_SEATS: usize = 250;

/// Backing bytes of a seat map, eight seats per byte.
pub const SEAT_MAP_BYTES: usize = MAX_SEATS.div_ceil(8);

/// A packed per-flight seat occupancy bitmap, 0 = free and 1 = booked.
///
/// The bitmap travels through the data files as a fixed run of uppercase
/// hex, two digits per byte. Booking itself tracks seats through the
/// ticket list and the per-flight seat counter; the bitmap is carried
/// alongside the flight record, not consulted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SeatMap([u8; SEAT_MAP_BYTES]);

impl SeatMap {
    /// A map with every seat free.
    pub fn new() -> SeatMap {
        SeatMap([0; SEAT_MAP_BYTES])
    }

    pub fn from_bytes(bytes: [u8; SEAT_MAP_BYTES]) -> SeatMap {
        SeatMap(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEAT_MAP_BYTES] {
        &self.0
    }

    /// Renders the wire form: two uppercase hex digits per byte, no
    /// separators.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(SEAT_MAP_BYTES * 2);
        for byte in self.0 {
            let _ = write!(out, "{byte:02X}");
        }
        out
    }

    /// Decodes the wire form, one two-digit pair per byte.
    ///
    /// A pair that is missing or not valid hex leaves that byte zeroed
    /// rather than failing the whole map; lowercase digits are accepted.
    pub fn from_hex(hex: &str) -> SeatMap {
        let raw = hex.as_bytes();
        let mut bytes = [0u8; SEAT_MAP_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            if let Some([hi, lo]) = raw.get(i * 2..i * 2 + 2) {
                if let (Some(hi), Some(lo)) = (hex_digit(*hi), hex_digit(*lo)) {
                    *byte = hi << 4 | lo;
                }
            }
        }
        SeatMap(bytes)
    }
}

fn hex_digit(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

impl Default for SeatMap {
    fn default() -> SeatMap {
        SeatMap::new()
    }
}

impl fmt::Debug for SeatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeatMap({})", self.to_hex())
    }
}

impl Serialize for SeatMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SeatMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<SeatMap, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Ok(SeatMap::from_hex(&hex))
    }
}
