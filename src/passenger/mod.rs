pub mod passenger;
pub mod passenger_tests;

pub use passenger::Passenger;
pub use passenger::PassengerState;
