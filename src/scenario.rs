//! JSON scenario seeding, used to bring up a populated desk for demos.

use crate::flight::Flight;
use crate::passenger::Passenger;
use crate::store::{FlightStore, PassengerStore, TicketStore};
use serde::Deserialize;
use std::io;
use std::path::Path;

#[derive(Deserialize)]
struct RawScenario {
    #[serde(default)]
    flights: Vec<Flight>,
    #[serde(default)]
    passengers: Vec<Passenger>,
    #[serde(default)]
    tickets: Vec<TicketSeed>,
}

/// Scenario tickets carry no ID; booking assigns one.
#[derive(Deserialize)]
struct TicketSeed {
    passenger_name: String,
    flight_id: i32,
    seat_no: i32,
}

/// What seeding accomplished. Records the stores rejected are listed,
/// not fatal.
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub flights: usize,
    pub passengers: usize,
    pub tickets: usize,
    pub rejected: Vec<String>,
}

/// Seeds the stores from a JSON scenario file.
///
/// Records go through the normal store operations, so duplicates and
/// invalid time order are rejected per record rather than failing the
/// whole file.
pub fn seed_from_file(
    path: &Path,
    flights: &mut FlightStore,
    passengers: &mut PassengerStore,
    tickets: &mut TicketStore,
) -> io::Result<SeedSummary> {
    let data = std::fs::read_to_string(path)?;
    let raw: RawScenario = serde_json::from_str(&data)?;

    let mut summary = SeedSummary::default();
    for seed in raw.flights {
        let id = seed.id;
        let mut flight = Flight::new(
            seed.id,
            &seed.name,
            &seed.origin,
            &seed.destination,
            seed.departure,
            seed.arrival,
            seed.status,
            seed.available_seats,
        );
        flight.seat_map = seed.seat_map;
        match flights.add(flight) {
            Ok(()) => summary.flights += 1,
            Err(err) => summary.rejected.push(format!("flight {id}: {err}")),
        }
    }

    for seed in raw.passengers {
        let key = seed.passport.clone();
        let mut passenger = Passenger::new(&seed.name, seed.age, &seed.passport);
        passenger.assigned_flight_id = seed.assigned_flight_id;
        passenger.assigned_seat_no = seed.assigned_seat_no;
        match passengers.add(passenger) {
            Ok(()) => summary.passengers += 1,
            Err(err) => summary.rejected.push(format!("passenger {key}: {err}")),
        }
    }

    for seed in raw.tickets {
        tickets.book(&seed.passenger_name, seed.flight_id, seed.seat_no);
        summary.tickets += 1;
    }

    tracing::info!(
        flights = summary.flights,
        passengers = summary.passengers,
        tickets = summary.tickets,
        rejected = summary.rejected.len(),
        "scenario seeded from {}",
        path.display()
    );
    Ok(summary)
}
