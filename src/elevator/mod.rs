pub mod elevator;

pub use elevator::Elevator;
pub use elevator::NextStop;
pub use elevator::GROUND_FLOOR;
