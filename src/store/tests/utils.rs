use crate::flight::{Flight, FlightStatus};
use crate::passenger::Passenger;
use crate::seatmap::SeatMap;
use crate::ticket::Ticket;
use crate::time::DateTime;
use proptest::prelude::*;

pub fn dt(day: u8, month: u8, year: u16, hour: u8, minute: u8) -> DateTime {
    DateTime { day, month, year, hour, minute }
}

pub fn flight(id: i32, departure: DateTime, arrival: DateTime) -> Flight {
    Flight::new(
        id,
        &format!("FD-{id:03}"),
        "Warsaw",
        "Krakow",
        departure,
        arrival,
        FlightStatus::OnTime,
        180,
    )
}

pub fn passenger(name: &str, passport: &str) -> Passenger {
    Passenger::new(name, 30, passport)
}

// Text without the field delimiter; commas are a known format limitation
pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,40}"
}

pub fn arb_datetime() -> impl Strategy<Value = DateTime> {
    (1u8..=31, 1u8..=12, 0u16..=4095, 0u8..=23, 0u8..=59)
        .prop_map(|(day, month, year, hour, minute)| DateTime { day, month, year, hour, minute })
}

pub fn arb_status() -> impl Strategy<Value = FlightStatus> {
    prop_oneof![
        Just(FlightStatus::OnTime),
        Just(FlightStatus::Delayed),
        Just(FlightStatus::Cancelled),
    ]
}

pub fn arb_seat_map() -> impl Strategy<Value = SeatMap> {
    proptest::array::uniform32(any::<u8>()).prop_map(SeatMap::from_bytes)
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (
        1..10_000i32,
        arb_name(),
        arb_name(),
        arb_name(),
        arb_datetime(),
        arb_datetime(),
        arb_status(),
        0..500i32,
        arb_seat_map(),
    )
        .prop_map(|(id, name, origin, destination, departure, arrival, status, seats, seat_map)| {
            Flight {
                id,
                name,
                origin,
                destination,
                departure,
                arrival,
                status,
                available_seats: seats,
                seat_map,
            }
        })
}

pub fn arb_passenger() -> impl Strategy<Value = Passenger> {
    (arb_name(), 1..120i32, "[A-Z0-9]{5,9}", 0..50i32, 0..250i32).prop_map(
        |(name, age, passport, flight_id, seat_no)| Passenger {
            name,
            age,
            passport,
            assigned_flight_id: flight_id,
            assigned_seat_no: seat_no,
        },
    )
}

pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
    (1..1000i32, arb_name(), 1..100i32, 1..250i32).prop_map(
        |(id, passenger_name, flight_id, seat_no)| Ticket { id, passenger_name, flight_id, seat_no },
    )
}
