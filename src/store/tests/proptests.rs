use crate::seatmap::{SEAT_MAP_BYTES, SeatMap};
use crate::store::codec::Record;
use crate::store::flights::FlightStore;
use crate::store::tests::utils::{
    arb_datetime, arb_flight, arb_passenger, arb_seat_map, arb_ticket, flight,
};
use proptest::prelude::*;

fn round_trip<R: Record>(record: &R) -> R {
    let mut line = String::new();
    record.encode(&mut line);
    R::decode(&line).expect("decode of a freshly encoded record")
}

proptest! {
    #[test]
    fn test_flight_codec_round_trip(flight in arb_flight()) {
        prop_assert_eq!(round_trip(&flight), flight);
    }

    #[test]
    fn test_passenger_codec_round_trip(passenger in arb_passenger()) {
        prop_assert_eq!(round_trip(&passenger), passenger);
    }

    #[test]
    fn test_ticket_codec_round_trip(ticket in arb_ticket()) {
        prop_assert_eq!(round_trip(&ticket), ticket);
    }

    #[test]
    fn test_seat_map_hex_round_trip(map in arb_seat_map()) {
        prop_assert_eq!(SeatMap::from_hex(&map.to_hex()), map);
    }

    #[test]
    fn test_corrupting_one_pair_zeroes_exactly_one_byte(
        map in arb_seat_map(),
        index in 0..SEAT_MAP_BYTES,
    ) {
        let mut hex = map.to_hex();
        hex.replace_range(index * 2..index * 2 + 1, "Z");

        let mut expected = *map.as_bytes();
        expected[index] = 0;
        prop_assert_eq!(SeatMap::from_hex(&hex), SeatMap::from_bytes(expected));
    }

    #[test]
    fn test_sort_orders_and_is_idempotent(
        departures in prop::collection::vec(arb_datetime(), 2..40),
    ) {
        let mut store = FlightStore::new();
        for (i, dep) in departures.iter().enumerate() {
            store.add(flight(i as i32 + 1, *dep, *dep)).unwrap();
        }

        prop_assert!(store.sort_by_departure());
        let once: Vec<i32> = store.iter().map(|f| f.id).collect();
        let order: Vec<_> = store.iter().map(|f| f.departure).collect();
        for pair in order.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }

        prop_assert!(store.sort_by_departure());
        let twice: Vec<i32> = store.iter().map(|f| f.id).collect();
        prop_assert_eq!(once, twice);
    }
}
