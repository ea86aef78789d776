/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ElevatorId, PassengerId, Tick};

/***************************************/
/*            Error types              */
/***************************************/
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid system: {0}")]
    InvalidSystem(String),

    #[error("invalid request for passenger {id}: {reason}")]
    InvalidRequest { id: PassengerId, reason: String },

    #[error("request {id} at time {time} comes after a request at time {previous}")]
    UnsortedRequests { id: PassengerId, time: Tick, previous: Tick },

    #[error("elevator {elevator} is full")]
    ElevatorFull { elevator: ElevatorId },

    #[error("passenger {id}: {reason}")]
    Lifecycle { id: PassengerId, reason: String },

    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
