/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{
    Direction, ElevatorId, Floor, PassengerId, PassengerPosition, PassengerStatus, Request,
    SimError, Tick,
};

/***************************************/
/*       Public data structures        */
/***************************************/
/// Which container currently owns the passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerState {
    Pending,
    Boarded(ElevatorId),
    Done,
}

/**
 * A single pickup/dropoff request together with its timing state.
 *
 * The request data is fixed at construction. Timing fields are written by the
 * owning `ElevatorSystem`: the wait counter during scheduling, pickup and
 * dropoff while passengers board and alight. Pickup and dropoff are set once,
 * in that order, after which the passenger is terminal.
 *
 * # Fields
 * - `id`:                      Opaque passenger identifier, unique within a system.
 * - `source_floor`:            Floor the passenger is waiting on.
 * - `target_floor`:            Floor the passenger wants to reach. Never equal to `source_floor`.
 * - `request_time`:            Tick at which the request became visible.
 * - `pickup_time`:             Tick the assigned elevator reached `source_floor`.
 * - `dropoff_time`:            Tick the elevator reached `target_floor` with the passenger picked up.
 * - `assignation_wait_time`:   Ticks spent pending while every elevator was full.
 * - `state`:                   Owning container (pending list, an elevator, or processed list).
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub id: PassengerId,
    pub source_floor: Floor,
    pub target_floor: Floor,
    pub request_time: Tick,
    pickup_time: Option<Tick>,
    dropoff_time: Option<Tick>,
    assignation_wait_time: Tick,
    state: PassengerState,
}

/***************************************/
/*             Public API              */
/***************************************/
impl Passenger {
    pub fn new(
        id: PassengerId,
        source_floor: Floor,
        target_floor: Floor,
        request_time: Tick,
    ) -> Result<Passenger, SimError> {
        if source_floor == target_floor {
            return Err(SimError::InvalidRequest {
                id,
                reason: format!("source and target are both floor {}", source_floor),
            });
        }

        Ok(Passenger {
            id,
            source_floor,
            target_floor,
            request_time,
            pickup_time: None,
            dropoff_time: None,
            assignation_wait_time: 0,
            state: PassengerState::Pending,
        })
    }

    pub fn from_request(request: &Request) -> Result<Passenger, SimError> {
        Passenger::new(
            PassengerId::new(request.id),
            request.source,
            request.dest,
            request.time,
        )
    }

    pub fn pickup_time(&self) -> Option<Tick> {
        self.pickup_time
    }

    pub fn dropoff_time(&self) -> Option<Tick> {
        self.dropoff_time
    }

    pub fn assignation_wait_time(&self) -> Tick {
        self.assignation_wait_time
    }

    pub fn state(&self) -> PassengerState {
        self.state
    }

    pub fn is_picked_up(&self) -> bool {
        self.pickup_time.is_some()
    }

    /// Ticks waited before pickup.
    ///
    /// Before pickup this is only the capacity wait counter, used for
    /// in-flight logging. Once picked up it is the gap from request to pickup,
    /// which already includes any capacity waits.
    pub fn wait_time(&self) -> Tick {
        match self.pickup_time {
            Some(pickup) => pickup - self.request_time,
            None => self.assignation_wait_time,
        }
    }

    /// Ticks from request to dropoff, `None` until the ride is complete.
    pub fn total_time(&self) -> Option<Tick> {
        self.pickup_time?;
        self.dropoff_time.map(|dropoff| dropoff - self.request_time)
    }

    /// Estimated position at `time`, interpolated linearly from the pickup.
    pub fn position(&self, time: Tick) -> PassengerPosition {
        let elevator = match self.state {
            PassengerState::Boarded(elevator) => Some(elevator),
            _ => None,
        };

        let (floor, status) = match (self.pickup_time, self.dropoff_time) {
            (None, _) => (self.source_floor, PassengerStatus::Waiting),
            (Some(_), Some(_)) => (self.target_floor, PassengerStatus::Done),
            (Some(pickup), None) => {
                let travelled = time.saturating_sub(pickup);
                let span = self.source_floor.abs_diff(self.target_floor) as Tick;
                if travelled >= span {
                    (self.target_floor, PassengerStatus::Done)
                } else {
                    // travelled < span, so the offset fits in a Floor
                    let offset = travelled as Floor;
                    let floor = match Direction::towards(self.source_floor, self.target_floor) {
                        Direction::Up => self.source_floor + offset,
                        _ => self.source_floor - offset,
                    };
                    (floor, PassengerStatus::Traveling)
                }
            }
        };

        PassengerPosition {
            floor,
            status,
            elevator,
        }
    }

    pub(crate) fn add_assignation_wait(&mut self) {
        self.assignation_wait_time += 1;
    }

    pub(crate) fn assign_to(&mut self, elevator: ElevatorId) {
        self.state = PassengerState::Boarded(elevator);
    }

    pub(crate) fn mark_pickup(&mut self, time: Tick) -> Result<(), SimError> {
        if self.pickup_time.is_some() {
            return Err(self.lifecycle_error("picked up twice"));
        }
        self.pickup_time = Some(time);
        Ok(())
    }

    pub(crate) fn mark_dropoff(&mut self, time: Tick) -> Result<(), SimError> {
        if self.pickup_time.is_none() {
            return Err(self.lifecycle_error("dropped off before pickup"));
        }
        if self.dropoff_time.is_some() {
            return Err(self.lifecycle_error("dropped off twice"));
        }
        self.dropoff_time = Some(time);
        self.state = PassengerState::Done;
        Ok(())
    }

    fn lifecycle_error(&self, reason: &str) -> SimError {
        SimError::Lifecycle {
            id: self.id,
            reason: reason.to_string(),
        }
    }
}
