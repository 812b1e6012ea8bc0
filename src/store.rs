//! The three record stores and the flat-file protocol they persist
//! through.

mod codec;
pub mod flights;
pub mod passengers;
pub mod tickets;


pub use codec::LoadReport;
pub use flights::{FlightStore, MAX_FLIGHTS};
pub use passengers::PassengerStore;
pub use tickets::TicketStore;
