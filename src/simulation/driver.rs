/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::passenger::Passenger;
use crate::shared::{PassengerId, Request, SimError};
use crate::system::ElevatorSystem;

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Runs a full simulation over `requests`.
 *
 * Requests must be sorted by nondecreasing `time`. Each tick, every request
 * whose time equals the clock is handed to the system before the tick runs.
 * The run stops once every request has been processed, followed by one extra
 * tick so the log ends with the cars' final positions.
 */
pub fn run_simulation(
    config: &SimulationConfig,
    requests: Vec<Request>,
) -> Result<ElevatorSystem, SimError> {
    config.validate()?;
    check_sorted(&requests)?;

    let mut system = ElevatorSystem::from_config(config)?;
    let total_requests = requests.len();
    let mut input_requests: VecDeque<Request> = requests.into();

    info!(
        "Simulating {} requests with {} elevator(s), {} floors, capacity {}",
        total_requests, config.n_elevators, config.n_floors, config.capacity
    );

    while !input_requests.is_empty() || system.processed_requests().len() != total_requests {
        while input_requests
            .front()
            .is_some_and(|request| request.time == system.time())
        {
            let Some(request) = input_requests.pop_front() else {
                break;
            };
            system.add_passenger_request(Passenger::from_request(&request)?)?;
        }
        system.move_time()?;
    }

    debug!("All requests processed at time {}", system.time());
    system.move_time()?;

    info!(
        "Processed {} requests in {} ticks",
        system.processed_requests().len(),
        system.time()
    );
    Ok(system)
}

fn check_sorted(requests: &[Request]) -> Result<(), SimError> {
    for pair in requests.windows(2) {
        if pair[1].time < pair[0].time {
            return Err(SimError::UnsortedRequests {
                id: PassengerId::new(pair[1].id),
                time: pair[1].time,
                previous: pair[0].time,
            });
        }
    }
    Ok(())
}
