/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::passenger::Passenger;
use crate::shared::{Direction, ElevatorId, Floor, PassengerId, SimError, Tick};

/***************************************/
/*             Constants               */
/***************************************/
pub const GROUND_FLOOR: Floor = 1;

/***************************************/
/*       Public data structures        */
/***************************************/
/// Where a car is heading and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStop {
    Dropoff(PassengerId, Floor),
    Pickup(PassengerId, Floor),
}

impl NextStop {
    pub fn floor(&self) -> Floor {
        match *self {
            NextStop::Dropoff(_, floor) | NextStop::Pickup(_, floor) => floor,
        }
    }
}

/**
 * A single elevator car.
 *
 * The car owns the passengers assigned to it, both those still waiting at
 * their source floor and those riding. Passengers are kept in boarding order,
 * which is the order ties are broken in when choosing where to go next.
 *
 * # Fields
 * - `id`:              Stable 1-based car identifier.
 * - `current_floor`:   Floor the car is at. Every car starts at the ground floor.
 * - `direction`:       Direction of the last movement step.
 * - `capacity`:        Maximum number of passengers assigned at once.
 * - `passengers`:      Assigned passengers, in boarding order.
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    pub id: ElevatorId,
    current_floor: Floor,
    direction: Direction,
    capacity: usize,
    passengers: Vec<Passenger>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl Elevator {
    pub fn new(id: ElevatorId, capacity: usize) -> Elevator {
        Elevator {
            id,
            current_floor: GROUND_FLOOR,
            direction: Direction::Stop,
            capacity,
            passengers: Vec::with_capacity(capacity),
        }
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn passenger_ids(&self) -> Vec<PassengerId> {
        self.passengers.iter().map(|p| p.id).collect()
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Assigns `passenger` to this car. The caller checks `is_full()` first.
    pub fn load_passenger(&mut self, mut passenger: Passenger) -> Result<(), SimError> {
        if self.is_full() {
            return Err(SimError::ElevatorFull { elevator: self.id });
        }
        passenger.assign_to(self.id);
        self.passengers.push(passenger);
        Ok(())
    }

    pub fn unload_passenger(&mut self, id: PassengerId) -> Option<Passenger> {
        let index = self.passengers.iter().position(|p| p.id == id)?;
        Some(self.passengers.remove(index))
    }

    /**
     * Lets passengers alight and board at the current floor.
     *
     * A picked-up passenger whose target is this floor is dropped off and
     * returned to the caller. Independently, a passenger waiting on this floor
     * is picked up. Both can happen to different passengers in the same tick.
     *
     * Pickups and dropoffs are recorded before anyone leaves the car, so on an
     * error every passenger is still aboard.
     */
    pub fn exchange_passengers(&mut self, time: Tick) -> Result<Vec<Passenger>, SimError> {
        let floor = self.current_floor;

        for passenger in self.passengers.iter_mut() {
            if passenger.target_floor == floor && passenger.is_picked_up() {
                passenger.mark_dropoff(time)?;
                debug!("Elevator {}.\n\tUnloading passenger: {}", self.id, passenger.id);
            } else if passenger.source_floor == floor && !passenger.is_picked_up() {
                passenger.mark_pickup(time)?;
                debug!(
                    "Elevator {} is at floor {} passenger {} is picked up.",
                    self.id, floor, passenger.id
                );
            }
        }

        let (dropped, remaining): (Vec<Passenger>, Vec<Passenger>) =
            std::mem::take(&mut self.passengers)
                .into_iter()
                .partition(|p| p.dropoff_time().is_some());
        self.passengers = remaining;
        Ok(dropped)
    }

    /**
     * Chooses the floor the car heads for next.
     *
     * Riding passengers take priority: the nearest target floor among them.
     * With nobody riding, the nearest source floor among the passengers still
     * waiting for this car. Ties go to the passenger boarded first.
     */
    pub fn next_stop(&self) -> Option<NextStop> {
        let floor = self.current_floor;

        let riding = self
            .passengers
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_picked_up())
            .min_by_key(|(index, p)| (floor.abs_diff(p.target_floor), *index))
            .map(|(_, p)| NextStop::Dropoff(p.id, p.target_floor));

        riding.or_else(|| {
            self.passengers
                .iter()
                .enumerate()
                .filter(|(_, p)| !p.is_picked_up())
                .min_by_key(|(index, p)| (floor.abs_diff(p.source_floor), *index))
                .map(|(_, p)| NextStop::Pickup(p.id, p.source_floor))
        })
    }

    /// Moves at most one floor towards `floor`. Stepping towards the current
    /// floor leaves the car where it is with direction `Stop`.
    pub fn step_towards(&mut self, floor: Floor) -> Direction {
        self.direction = Direction::towards(self.current_floor, floor);
        self.current_floor = self.direction.step(self.current_floor);
        self.direction
    }
}
