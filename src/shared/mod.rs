pub mod error;
pub mod macros;
pub mod structs;

pub use error::SimError;
pub use structs::Direction;
pub use structs::ElevatorId;
pub use structs::Floor;
pub use structs::PassengerId;
pub use structs::PassengerPosition;
pub use structs::PassengerStatus;
pub use structs::Request;
pub use structs::Tick;
pub use structs::TickSnapshot;
