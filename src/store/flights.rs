use crate::error::StoreError;
use crate::flight::Flight;
use crate::store::codec::{self, LoadReport};
use std::path::Path;

/// Hard upper bound on stored flights, independent of buffer growth.
pub const MAX_FLIGHTS: usize = 100;

/// An ordered, densely packed run of flights.
///
/// All lookups are linear scans; there are no secondary indexes.
#[derive(Debug, Default)]
pub struct FlightStore {
    flights: Vec<Flight>,
}

impl FlightStore {
    pub fn new() -> FlightStore {
        FlightStore { flights: Vec::with_capacity(MAX_FLIGHTS) }
    }

    /// Adds a flight, checking in order: the hard capacity, duplicate
    /// IDs, and that arrival does not precede departure.
    pub fn add(&mut self, flight: Flight) -> Result<(), StoreError> {
        if self.flights.len() >= MAX_FLIGHTS {
            return Err(StoreError::CapacityExceeded { limit: MAX_FLIGHTS });
        }
        if self.flights.iter().any(|f| f.id == flight.id) {
            return Err(StoreError::DuplicateKey(format!("flight ID {}", flight.id)));
        }
        if flight.arrival < flight.departure {
            return Err(StoreError::InvalidTimeOrder);
        }
        self.flights.push(flight);
        Ok(())
    }

    /// First match wins; IDs are unique by construction.
    pub fn search(&self, id: i32) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    /// Removes the flight with `id`, shifting everything after it one
    /// slot left to close the gap.
    pub fn remove(&mut self, id: i32) -> Result<(), StoreError> {
        match self.flights.iter().position(|f| f.id == id) {
            Some(index) => {
                self.flights.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("flight ID {id}"))),
        }
    }

    /// Sorts in place by departure time. Returns false, and leaves the
    /// order alone, when there are fewer than two flights.
    pub fn sort_by_departure(&mut self) -> bool {
        if self.flights.len() < 2 {
            return false;
        }
        self.flights.sort_by_key(|f| f.departure);
        true
    }

    /// Flights in storage order: insertion order until a sort, sorted
    /// order after.
    pub fn iter(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        codec::save_records(path, &self.flights)
    }

    /// Replaces the store's contents with the file's. A missing file
    /// means an empty store, and a malformed record keeps everything
    /// decoded before it; see [`LoadReport`].
    pub fn load(&mut self, path: &Path) -> Result<LoadReport, StoreError> {
        let loaded = codec::load_records(path, Some(MAX_FLIGHTS))?;
        self.flights = loaded.records;
        Ok(loaded.report)
    }
}
