use crate::error::StoreError;
use crate::seatmap::{SEAT_MAP_BYTES, SeatMap};
use crate::store::flights::{FlightStore, MAX_FLIGHTS};
use crate::store::tests::utils::{dt, flight};

#[test]
fn test_add_then_search_returns_the_record() {
    let mut store = FlightStore::new();
    store.add(flight(7, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0))).unwrap();

    let found = store.search(7).unwrap();
    assert_eq!(found.name, "FD-007");
    assert_eq!(found.departure, dt(1, 1, 2025, 10, 0));
    assert!(store.search(8).is_none());
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut store = FlightStore::new();
    store.add(flight(1, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0))).unwrap();

    let err = store.add(flight(1, dt(2, 1, 2025, 10, 0), dt(2, 1, 2025, 12, 0))).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_arrival_before_departure_is_rejected() {
    let mut store = FlightStore::new();
    let err = store.add(flight(1, dt(2, 1, 2025, 10, 0), dt(1, 1, 2025, 10, 0))).unwrap_err();
    assert!(matches!(err, StoreError::InvalidTimeOrder));
    assert!(store.is_empty());
}

#[test]
fn test_equal_departure_and_arrival_is_accepted() {
    let mut store = FlightStore::new();
    store.add(flight(1, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 10, 0))).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_hard_capacity_bound() {
    let mut store = FlightStore::new();
    for id in 1..=MAX_FLIGHTS as i32 {
        store.add(flight(id, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0))).unwrap();
    }
    assert_eq!(store.len(), MAX_FLIGHTS);

    let err = store
        .add(flight(MAX_FLIGHTS as i32 + 1, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0)))
        .unwrap_err();
    assert!(matches!(err, StoreError::CapacityExceeded { limit: MAX_FLIGHTS }));
    assert_eq!(store.len(), MAX_FLIGHTS);
    assert!(store.search(MAX_FLIGHTS as i32).is_some());
}

#[test]
fn test_remove_shifts_later_records_left() {
    let mut store = FlightStore::new();
    for id in [1, 2, 3, 4] {
        store.add(flight(id, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0))).unwrap();
    }

    store.remove(2).unwrap();
    assert!(store.search(2).is_none());
    assert_eq!(store.len(), 3);
    let order: Vec<i32> = store.iter().map(|f| f.id).collect();
    assert_eq!(order, vec![1, 3, 4]);
}

#[test]
fn test_remove_missing_is_not_found() {
    let mut store = FlightStore::new();
    store.add(flight(1, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0))).unwrap();

    let err = store.remove(9).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_sort_puts_earlier_departure_first() {
    let mut store = FlightStore::new();
    store.add(flight(1, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0))).unwrap();
    store.add(flight(2, dt(1, 1, 2024, 9, 0), dt(1, 1, 2024, 11, 0))).unwrap();

    assert!(store.sort_by_departure());
    let order: Vec<i32> = store.iter().map(|f| f.id).collect();
    assert_eq!(order, vec![2, 1]);
}

#[test]
fn test_sort_needs_at_least_two_flights() {
    let mut store = FlightStore::new();
    assert!(!store.sort_by_departure());

    store.add(flight(1, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0))).unwrap();
    assert!(!store.sort_by_departure());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.txt");

    let mut store = FlightStore::new();
    let mut first = flight(1, dt(1, 6, 2025, 9, 0), dt(1, 6, 2025, 11, 30));
    let mut bytes = [0u8; SEAT_MAP_BYTES];
    bytes[0] = 0x0F;
    bytes[SEAT_MAP_BYTES - 1] = 0xA0;
    first.seat_map = SeatMap::from_bytes(bytes);
    store.add(first).unwrap();
    store.add(flight(2, dt(2, 6, 2025, 14, 0), dt(2, 6, 2025, 16, 45))).unwrap();
    store.save(&path).unwrap();

    let mut reloaded = FlightStore::new();
    let report = reloaded.load(&path).unwrap();
    assert_eq!(report.declared, 2);
    assert_eq!(report.loaded, 2);
    assert!(!report.missing_file);
    assert!(report.stopped.is_none());

    let original: Vec<_> = store.iter().cloned().collect();
    let loaded: Vec<_> = reloaded.iter().cloned().collect();
    assert_eq!(original, loaded);
}

#[test]
fn test_load_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.txt");

    let mut source = FlightStore::new();
    source.add(flight(1, dt(1, 1, 2025, 10, 0), dt(1, 1, 2025, 12, 0))).unwrap();
    source.add(flight(2, dt(2, 1, 2025, 10, 0), dt(2, 1, 2025, 12, 0))).unwrap();
    source.save(&path).unwrap();

    let mut store = FlightStore::new();
    store.add(flight(9, dt(9, 1, 2025, 10, 0), dt(9, 1, 2025, 12, 0))).unwrap();
    store.load(&path).unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.search(9).is_none());
    assert!(store.search(1).is_some());
}

#[test]
fn test_load_missing_file_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = FlightStore::new();
    let report = store.load(&dir.path().join("absent.txt")).unwrap();
    assert!(report.missing_file);
    assert_eq!(report.loaded, 0);
    assert!(store.is_empty());
}
