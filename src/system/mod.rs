pub mod elevator_system;
pub mod summary;
pub mod summary_tests;

pub use elevator_system::ElevatorSystem;
pub use summary::PassengerStats;
pub use summary::Stats;
pub use summary::TimeSummary;
