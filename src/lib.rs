/*
 * Discrete-time simulation of an elevator bank.
 *
 * Requests enter an `ElevatorSystem`, which assigns each one to the nearest
 * car with room, moves cars one floor per tick and records a snapshot of every
 * tick. `simulation::run_simulation` drives a sorted request list to
 * completion.
 */

/* Modules */
pub mod config;
mod config_tests;
pub mod elevator;
pub mod passenger;
pub mod shared;
pub mod simulation;
pub mod system;

pub use elevator::Elevator;
pub use passenger::Passenger;
pub use shared::SimError;
pub use system::ElevatorSystem;
