use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct Ticket {
    #[tabled(rename = "Ticket")]
    pub id: i32,
    /// Free text, not a key into the passenger store.
    #[tabled(rename = "Passenger")]
    pub passenger_name: String,
    #[tabled(rename = "Flight")]
    pub flight_id: i32,
    #[tabled(rename = "Seat")]
    pub seat_no: i32,
}
