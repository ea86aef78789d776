/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::{BTreeMap, HashSet};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::elevator::{Elevator, NextStop, GROUND_FLOOR};
use crate::passenger::Passenger;
use crate::shared::{ElevatorId, Floor, PassengerId, SimError, Tick, TickSnapshot};
use crate::system::summary::TimeSummary;

/**
 * Manages the elevator bank and the passenger requests it serves.
 *
 * Each passenger is owned by exactly one container at a time: the pending
 * list, the elevator it is assigned to, or the processed list. Moving between
 * them is a move of the value, so a passenger can never be in two places.
 *
 * # Fields
 * - `elevators`:           The cars, in id order. Iteration order is the scheduling tie-break.
 * - `n_floors`:            Number of floors served, numbered from 1.
 * - `requests`:            Pending passengers not yet assigned to a car, in arrival order.
 * - `processed_requests`:  Passengers that have been dropped off, in dropoff order.
 * - `known_ids`:           Every passenger id ever submitted.
 * - `time`:                Current tick.
 * - `log`:                 Append-only per-tick snapshots.
 */
#[derive(Debug, Clone)]
pub struct ElevatorSystem {
    elevators: Vec<Elevator>,
    n_floors: Floor,
    requests: Vec<Passenger>,
    processed_requests: Vec<Passenger>,
    known_ids: HashSet<PassengerId>,
    time: Tick,
    log: Vec<TickSnapshot>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl ElevatorSystem {
    pub fn new(n_elevators: usize, n_floors: Floor, capacity: usize) -> Result<ElevatorSystem, SimError> {
        if n_elevators == 0 {
            return Err(SimError::InvalidSystem("at least one elevator is required".into()));
        }
        if n_floors == 0 {
            return Err(SimError::InvalidSystem("at least one floor is required".into()));
        }
        if capacity == 0 {
            return Err(SimError::InvalidSystem("elevator capacity must be at least 1".into()));
        }

        let elevators = (1..=n_elevators)
            .map(|number| Elevator::new(ElevatorId::new(number), capacity))
            .collect();

        Ok(ElevatorSystem {
            elevators,
            n_floors,
            requests: Vec::new(),
            processed_requests: Vec::new(),
            known_ids: HashSet::new(),
            time: 0,
            log: Vec::new(),
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<ElevatorSystem, SimError> {
        ElevatorSystem::new(config.n_elevators, config.n_floors, config.capacity)
    }

    pub fn time(&self) -> Tick {
        self.time
    }

    pub fn n_floors(&self) -> Floor {
        self.n_floors
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn requests(&self) -> &[Passenger] {
        &self.requests
    }

    pub fn processed_requests(&self) -> &[Passenger] {
        &self.processed_requests
    }

    pub fn log(&self) -> &[TickSnapshot] {
        &self.log
    }

    /**
     * Adds a new passenger request to the pending list.
     *
     * Rejects floors outside the building, ids already seen by this system and
     * requests whose time has not been reached yet.
     */
    pub fn add_passenger_request(&mut self, passenger: Passenger) -> Result<(), SimError> {
        let invalid = |reason: String| SimError::InvalidRequest {
            id: passenger.id,
            reason,
        };

        for floor in [passenger.source_floor, passenger.target_floor] {
            if floor < GROUND_FLOOR || floor > self.n_floors {
                return Err(invalid(format!(
                    "floor {} is outside 1..={}",
                    floor, self.n_floors
                )));
            }
        }
        if passenger.request_time > self.time {
            return Err(invalid(format!(
                "request time {} is after the current time {}",
                passenger.request_time, self.time
            )));
        }
        if self.known_ids.contains(&passenger.id) {
            return Err(invalid("duplicate passenger id".into()));
        }

        debug!(
            "Passenger {} requests floor {} -> {} at time {}",
            passenger.id, passenger.source_floor, passenger.target_floor, passenger.request_time
        );
        self.known_ids.insert(passenger.id);
        self.requests.push(passenger);
        Ok(())
    }

    /**
     * Assigns every pending request to the nearest car that has room.
     *
     * Assignments are computed over the pending list as it stood when the pass
     * started, counting seats taken earlier in the same pass, and then applied.
     * Distance ties go to the lowest elevator id. A request with no car free
     * stays pending and accrues one tick of assignation wait.
     */
    pub fn schedule_elevators(&mut self) -> Result<(), SimError> {
        let mut occupancy: Vec<usize> = self.elevators.iter().map(|e| e.passengers().len()).collect();
        let mut assignments = Vec::with_capacity(self.requests.len());

        for request in self.requests.iter() {
            let closest = self
                .elevators
                .iter()
                .enumerate()
                .filter(|(index, elevator)| occupancy[*index] < elevator.capacity())
                .min_by_key(|(index, elevator)| {
                    (elevator.current_floor().abs_diff(request.source_floor), *index)
                })
                .map(|(index, _)| index);

            if let Some(index) = closest {
                occupancy[index] += 1;
            }
            assignments.push(closest);
        }

        let pending = std::mem::take(&mut self.requests);
        for (mut request, assignment) in pending.into_iter().zip(assignments) {
            match assignment {
                Some(index) => {
                    let elevator = &mut self.elevators[index];
                    debug!("Passenger {} is assigned into elevator {}", request.id, elevator.id);
                    elevator.load_passenger(request)?;
                }
                None => {
                    request.add_assignation_wait();
                    debug!(
                        "Passenger {} is waiting. Elevator is full adding wait_time: {}",
                        request.id,
                        request.wait_time()
                    );
                    self.requests.push(request);
                }
            }
        }

        Ok(())
    }

    /// Appends a snapshot of cars and passengers for the current tick.
    pub fn log_positions(&mut self) {
        let time = self.time;

        let mut passengers_positions = BTreeMap::new();
        let aboard = self.elevators.iter().flat_map(|e| e.passengers().iter());
        for passenger in self.requests.iter().chain(aboard) {
            passengers_positions.insert(passenger.id, passenger.position(time));
        }

        let snapshot = TickSnapshot {
            time,
            positions: self
                .elevators
                .iter()
                .map(|e| (e.id, e.current_floor()))
                .collect(),
            passengers_assigned: self
                .elevators
                .iter()
                .map(|e| (e.id, e.passenger_ids()))
                .collect(),
            passengers_positions,
        };

        debug!(
            "Passenger positions: {}",
            snapshot
                .passengers_positions
                .iter()
                .map(|(id, pos)| format!("- {}: {} {:?}", id, pos.floor, pos.status))
                .collect::<Vec<_>>()
                .join(" ")
        );
        self.log.push(snapshot);
    }

    /// Boards and drops off passengers at each car's current floor.
    pub fn move_passengers(&mut self) -> Result<(), SimError> {
        for elevator in self.elevators.iter_mut() {
            let dropped = elevator.exchange_passengers(self.time)?;
            if !dropped.is_empty() {
                self.processed_requests.extend(dropped);
                debug!(
                    "\tRemaining passengers: {:?}",
                    self.requests.iter().map(|p| p.id).collect::<Vec<_>>()
                );
            }
        }
        Ok(())
    }

    /// Moves every car with passengers one floor towards its next stop. Idle
    /// cars stay put.
    pub fn move_elevators(&mut self) {
        for elevator in self.elevators.iter_mut() {
            let Some(stop) = elevator.next_stop() else {
                elevator.step_towards(elevator.current_floor());
                continue;
            };
            match stop {
                NextStop::Dropoff(id, floor) => debug!(
                    "Elevator {} is at floor {} going to drop {} at {}",
                    elevator.id,
                    elevator.current_floor(),
                    id,
                    floor
                ),
                NextStop::Pickup(id, floor) => debug!(
                    "Elevator {} is at floor {} going to pick {} at {}",
                    elevator.id,
                    elevator.current_floor(),
                    id,
                    floor
                ),
            }
            let direction = elevator.step_towards(stop.floor());
            debug!(
                "Elevator {} moved {:?} to floor {}",
                elevator.id,
                direction,
                elevator.current_floor()
            );
        }
    }

    /// Advances the system by one tick.
    pub fn move_time(&mut self) -> Result<(), SimError> {
        debug!("\nTime is {}", self.time);
        self.schedule_elevators()?;
        self.log_positions();
        self.move_passengers()?;
        self.move_elevators();
        self.time += 1;
        Ok(())
    }

    /// True when nothing is pending and every car is empty.
    pub fn all_requests_processed(&self) -> bool {
        self.requests.is_empty() && self.elevators.iter().all(|e| e.is_empty())
    }

    pub fn time_summary(&self) -> TimeSummary {
        TimeSummary::from_passengers(&self.processed_requests)
    }
}
