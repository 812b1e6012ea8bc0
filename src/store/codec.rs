//! The flat-file record protocol shared by the three stores.
//!
//! Each file starts with a decimal record count line, followed by one
//! comma-joined record per line. Decoding is deliberately forgiving:
//! numeric garbage reads as zero and a malformed record ends the load
//! with everything decoded before it kept. Only an unparsable count
//! line is treated as corruption.

use crate::error::StoreError;
use crate::flight::{Flight, FlightStatus, MAX_NAME_LEN, clip};
use crate::passenger::{MAX_PASSPORT_LEN, Passenger};
use crate::seatmap::SeatMap;
use crate::ticket::Ticket;
use crate::time::DateTime;
use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;
use std::str::Split;

/// One line of the persisted format.
pub(crate) trait Record: Sized {
    /// Store label used in diagnostics.
    const KIND: &'static str;

    /// Appends the comma-joined fields of this record, no newline.
    fn encode(&self, line: &mut String);

    /// Decodes one line. `None` means the line is malformed, which ends
    /// the load.
    fn decode(line: &str) -> Option<Self>;
}

/// What a load did beyond the records it produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Count declared on the first line of the file.
    pub declared: usize,
    /// Records actually decoded.
    pub loaded: usize,
    /// The file could not be read; the store starts empty.
    pub missing_file: bool,
    /// The declared count exceeded the store's hard capacity and was
    /// cut down to it.
    pub clamped: bool,
    /// Set when a malformed record ended the load early.
    pub stopped: Option<String>,
}

#[derive(Debug)]
pub(crate) struct Loaded<R> {
    pub records: Vec<R>,
    pub report: LoadReport,
}

pub(crate) fn save_records<R: Record>(path: &Path, records: &[R]) -> Result<(), StoreError> {
    let mut out = String::new();
    let _ = writeln!(out, "{}", records.len());
    for record in records {
        record.encode(&mut out);
        out.push('\n');
    }
    fs::write(path, out)?;
    tracing::debug!(kind = R::KIND, count = records.len(), "saved {}", path.display());
    Ok(())
}

pub(crate) fn load_records<R: Record>(
    path: &Path,
    capacity: Option<usize>,
) -> Result<Loaded<R>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            if err.kind() != io::ErrorKind::NotFound {
                tracing::warn!(kind = R::KIND, error = %err, "could not read {}", path.display());
            }
            let report = LoadReport { missing_file: true, ..LoadReport::default() };
            return Ok(Loaded { records: Vec::new(), report });
        }
    };

    let mut lines = text.lines();
    let declared = lines
        .next()
        .and_then(|line| line.trim().parse::<i64>().ok())
        .ok_or_else(|| StoreError::Corrupted(format!("unreadable {} count line", R::KIND)))?;
    let declared = declared.max(0) as usize;

    let mut report = LoadReport { declared, ..LoadReport::default() };
    let mut effective = declared;
    if let Some(capacity) = capacity {
        if declared > capacity {
            tracing::warn!(
                kind = R::KIND,
                declared,
                capacity,
                "declared count exceeds capacity, extra records ignored"
            );
            report.clamped = true;
            effective = capacity;
        }
    }

    let mut records = Vec::with_capacity(effective);
    for line in lines.take(effective) {
        match R::decode(line) {
            Some(record) => records.push(record),
            None => {
                report.stopped = Some(format!(
                    "malformed {} record after {} loaded",
                    R::KIND,
                    records.len()
                ));
                break;
            }
        }
    }

    if let Some(stopped) = &report.stopped {
        tracing::warn!(kind = R::KIND, "{stopped}; keeping partial data");
    }
    report.loaded = records.len();
    Ok(Loaded { records, report })
}

/// Comma-field cursor over one record line.
///
/// Fields come back in the fixed order they were written. A missing
/// field is a hard stop for the record; numeric garbage decodes as
/// zero, which is what the historical files did.
struct Fields<'a>(Split<'a, char>);

impl<'a> Fields<'a> {
    fn new(line: &'a str) -> Fields<'a> {
        Fields(line.split(','))
    }

    fn next(&mut self) -> Option<&'a str> {
        self.0.next()
    }

    fn next_int(&mut self) -> Option<i32> {
        Some(lenient_int(self.0.next()?))
    }
}

fn lenient_int(token: &str) -> i32 {
    token.trim().parse().unwrap_or(0)
}

fn encode_datetime(line: &mut String, dt: &DateTime) {
    let _ = write!(line, "{} {} {} {} {}", dt.day, dt.month, dt.year, dt.hour, dt.minute);
}

fn decode_datetime(field: &str) -> Option<DateTime> {
    let mut parts = field.split_whitespace();
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    let hour = parts.next()?.parse().ok()?;
    let minute = parts.next()?.parse().ok()?;
    Some(DateTime { day, month, year, hour, minute })
}

impl Record for Flight {
    const KIND: &'static str = "flight";

    fn encode(&self, line: &mut String) {
        let _ = write!(line, "{},{},{},{},", self.id, self.name, self.origin, self.destination);
        encode_datetime(line, &self.departure);
        line.push(',');
        encode_datetime(line, &self.arrival);
        let _ = write!(line, ",{},{},", self.status.code(), self.available_seats);
        line.push_str(&self.seat_map.to_hex());
    }

    fn decode(line: &str) -> Option<Flight> {
        let mut fields = Fields::new(line);
        Some(Flight {
            id: fields.next_int()?,
            name: clip(fields.next()?, MAX_NAME_LEN),
            origin: clip(fields.next()?, MAX_NAME_LEN),
            destination: clip(fields.next()?, MAX_NAME_LEN),
            departure: decode_datetime(fields.next()?)?,
            arrival: decode_datetime(fields.next()?)?,
            status: FlightStatus::from_code(fields.next_int()?).unwrap_or_default(),
            available_seats: fields.next_int()?,
            seat_map: SeatMap::from_hex(fields.next()?),
        })
    }
}

impl Record for Passenger {
    const KIND: &'static str = "passenger";

    fn encode(&self, line: &mut String) {
        let _ = write!(
            line,
            "{},{},{},{},{}",
            self.name, self.age, self.passport, self.assigned_flight_id, self.assigned_seat_no
        );
    }

    fn decode(line: &str) -> Option<Passenger> {
        let mut fields = Fields::new(line);
        Some(Passenger {
            name: clip(fields.next()?, MAX_NAME_LEN),
            age: fields.next_int()?,
            passport: clip(fields.next()?, MAX_PASSPORT_LEN),
            assigned_flight_id: fields.next_int()?,
            assigned_seat_no: fields.next_int()?,
        })
    }
}

impl Record for Ticket {
    const KIND: &'static str = "ticket";

    fn encode(&self, line: &mut String) {
        let _ = write!(
            line,
            "{},{},{},{}",
            self.id, self.passenger_name, self.flight_id, self.seat_no
        );
    }

    fn decode(line: &str) -> Option<Ticket> {
        let mut fields = Fields::new(line);
        Some(Ticket {
            id: fields.next_int()?,
            passenger_name: clip(fields.next()?, MAX_NAME_LEN),
            flight_id: fields.next_int()?,
            seat_no: fields.next_int()?,
        })
    }
}
