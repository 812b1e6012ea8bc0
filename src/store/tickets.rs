use crate::error::StoreError;
use crate::flight::{MAX_NAME_LEN, clip};
use crate::store::codec::{self, LoadReport};
use crate::ticket::Ticket;
use std::path::Path;

const INITIAL_CAPACITY: usize = 10;

/// Booked tickets. No natural key beyond the assigned ID, so there is
/// no duplicate check.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn new() -> TicketStore {
        TicketStore { tickets: Vec::with_capacity(INITIAL_CAPACITY) }
    }

    /// Books a ticket and returns its ID.
    ///
    /// The ID is the current count plus one rather than a monotonic
    /// counter, so once a cancellation has happened a later booking can
    /// repeat an ID a live ticket still holds. Historical numbering,
    /// kept for file compatibility; `cancel` acts on the first match.
    pub fn book(&mut self, passenger_name: &str, flight_id: i32, seat_no: i32) -> i32 {
        let id = self.tickets.len() as i32 + 1;
        self.tickets.push(Ticket {
            id,
            passenger_name: clip(passenger_name, MAX_NAME_LEN),
            flight_id,
            seat_no,
        });
        id
    }

    pub fn find(&self, id: i32) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Cancels the first ticket with `id`, shifting later tickets one
    /// slot left.
    pub fn cancel(&mut self, id: i32) -> Result<(), StoreError> {
        match self.tickets.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tickets.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("ticket ID {id}"))),
        }
    }

    /// The booked (seat, passenger) pairs for one flight, in booking
    /// order. This reads the ticket list, not the flight's seat map.
    pub fn booked_seats(&self, flight_id: i32) -> impl Iterator<Item = (i32, &str)> {
        self.tickets
            .iter()
            .filter(move |t| t.flight_id == flight_id)
            .map(|t| (t.seat_no, t.passenger_name.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        codec::save_records(path, &self.tickets)
    }

    pub fn load(&mut self, path: &Path) -> Result<LoadReport, StoreError> {
        let loaded = codec::load_records(path, None)?;
        self.tickets = loaded.records;
        Ok(loaded.report)
    }
}
