use crate::error::StoreError;
use crate::passenger::Passenger;
use crate::store::codec::{self, LoadReport};
use std::path::Path;

const INITIAL_CAPACITY: usize = 10;

/// Registered passengers, keyed by passport number.
#[derive(Debug, Default)]
pub struct PassengerStore {
    passengers: Vec<Passenger>,
}

impl PassengerStore {
    pub fn new() -> PassengerStore {
        PassengerStore { passengers: Vec::with_capacity(INITIAL_CAPACITY) }
    }

    /// Adds a passenger; a second record with the same passport is
    /// rejected.
    pub fn add(&mut self, passenger: Passenger) -> Result<(), StoreError> {
        if self.passengers.iter().any(|p| p.passport == passenger.passport) {
            return Err(StoreError::DuplicateKey(format!("passport {}", passenger.passport)));
        }
        self.passengers.push(passenger);
        Ok(())
    }

    pub fn find(&self, passport: &str) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.passport == passport)
    }

    /// Removes by passport with the same shift to close the gap as the
    /// flight store.
    pub fn remove(&mut self, passport: &str) -> Result<(), StoreError> {
        match self.passengers.iter().position(|p| p.passport == passport) {
            Some(index) => {
                self.passengers.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("passport {passport}"))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        codec::save_records(path, &self.passengers)
    }

    pub fn load(&mut self, path: &Path) -> Result<LoadReport, StoreError> {
        let loaded = codec::load_records(path, None)?;
        self.passengers = loaded.records;
        Ok(loaded.report)
    }
}
