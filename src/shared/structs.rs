/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::de::Error as _;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use std::collections::BTreeMap;
use std::fmt;

/***************************************/
/*            Type aliases             */
/***************************************/
/// Building floor, 1-based.
pub type Floor = u32;

/// One discrete step of simulated time.
pub type Tick = u64;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    /// Direction of a single step from `from` towards `to`.
    pub fn towards(from: Floor, to: Floor) -> Direction {
        if from < to {
            Direction::Up
        } else if from > to {
            Direction::Down
        } else {
            Direction::Stop
        }
    }

    pub fn step(&self, floor: Floor) -> Floor {
        match *self {
            Direction::Up => floor + 1,
            Direction::Down => floor - 1,
            Direction::Stop => floor,
        }
    }
}

/**
 * Stable identifier of an elevator car.
 *
 * Cars are numbered from 1 in construction order and render as `E1`, `E2`, ...
 * in logs and in the JSON output.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElevatorId(usize);

impl ElevatorId {
    pub fn new(number: usize) -> Self {
        Self(number)
    }

    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl Serialize for ElevatorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElevatorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.strip_prefix('E')
            .and_then(|n| n.parse::<usize>().ok())
            .map(ElevatorId)
            .ok_or_else(|| D::Error::custom(format!("invalid elevator id `{raw}`")))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PassengerId(u64);

impl PassengerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a passenger is in its ride, as shown in the log.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerStatus {
    #[serde(rename = "W")]
    Waiting,
    #[serde(rename = "T")]
    Traveling,
    #[serde(rename = "D")]
    Done,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PassengerPosition {
    pub floor: Floor,
    pub status: PassengerStatus,
    pub elevator: Option<ElevatorId>,
}

/// One request record as read from the line-delimited JSON input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: u64,
    pub source: Floor,
    pub dest: Floor,
    pub time: Tick,
}

/**
 * State of the whole bank at the start of a tick, taken after scheduling and
 * before any passenger boards or alights.
 *
 * # Fields
 * - `time`:                    Tick the snapshot was taken at.
 * - `positions`:               Current floor of every elevator.
 * - `passengers_assigned`:     Passengers aboard each elevator, in boarding order.
 * - `passengers_positions`:    Estimated floor and status of every passenger still in the system.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TickSnapshot {
    pub time: Tick,
    pub positions: BTreeMap<ElevatorId, Floor>,
    pub passengers_assigned: BTreeMap<ElevatorId, Vec<PassengerId>>,
    pub passengers_positions: BTreeMap<PassengerId, PassengerPosition>,
}
