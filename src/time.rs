use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A calendar timestamp with minute resolution.
///
/// Field values are stored verbatim; nothing here validates calendar
/// ranges, so whatever the data file carries is what gets compared.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct DateTime {
    pub day: u8,
    pub month: u8,
    pub year: u16,
    pub hour: u8,
    pub minute: u8,
}

impl DateTime {
    /// Parses the shell's `DD-MM-YYYY` and `HH:MM` entry tokens.
    pub fn parse(date: &str, time: &str) -> Option<DateTime> {
        let mut date_parts = date.splitn(3, '-');
        let day = date_parts.next()?.parse().ok()?;
        let month = date_parts.next()?.parse().ok()?;
        let year = date_parts.next()?.parse().ok()?;
        let mut time_parts = time.splitn(2, ':');
        let hour = time_parts.next()?.parse().ok()?;
        let minute = time_parts.next()?.parse().ok()?;
        Some(DateTime { day, month, year, hour, minute })
    }
}

impl Ord for DateTime {
    /// Chronological order: year, then month, day, hour, minute.
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
            .then_with(|| self.day.cmp(&other.day))
            .then_with(|| self.hour.cmp(&other.hour))
            .then_with(|| self.minute.cmp(&other.minute))
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:04} {:02}:{:02}",
            self.day, self.month, self.year, self.hour, self.minute
        )
    }
}
