/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::passenger::Passenger;
use crate::shared::{PassengerId, Tick};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PassengerStats {
    pub id: PassengerId,
    pub wait_time: Tick,
    pub total_time: Tick,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Stats {
    fn from_values(values: impl Iterator<Item = Tick> + Clone) -> Option<Stats> {
        let count = values.clone().count();
        if count == 0 {
            return None;
        }
        let min = values.clone().min()? as f64;
        let max = values.clone().max()? as f64;
        let mean = values.sum::<Tick>() as f64 / count as f64;
        Some(Stats { min, max, mean })
    }
}

/**
 * Wait and total time statistics over processed passengers.
 *
 * # Fields
 * - `passengers`:  One row per processed passenger, in dropoff order.
 * - `wait_time`:   Min/max/mean of `Passenger::wait_time`, `None` with no passengers.
 * - `total_time`:  Min/max/mean of `Passenger::total_time`, `None` with no passengers.
 */
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimeSummary {
    pub passengers: Vec<PassengerStats>,
    pub wait_time: Option<Stats>,
    pub total_time: Option<Stats>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl TimeSummary {
    pub fn from_passengers(passengers: &[Passenger]) -> TimeSummary {
        // Only completed rides have a total time
        let rows: Vec<PassengerStats> = passengers
            .iter()
            .filter_map(|p| {
                p.total_time().map(|total_time| PassengerStats {
                    id: p.id,
                    wait_time: p.wait_time(),
                    total_time,
                })
            })
            .collect();

        TimeSummary {
            wait_time: Stats::from_values(rows.iter().map(|r| r.wait_time)),
            total_time: Stats::from_values(rows.iter().map(|r| r.total_time)),
            passengers: rows,
        }
    }
}

impl fmt::Display for TimeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(wait), Some(total)) = (self.wait_time, self.total_time) else {
            return write!(f, "No processed passengers");
        };

        let lines = [
            ("Min Wait Time", wait.min),
            ("Max Wait Time", wait.max),
            ("Mean Wait Time", wait.mean),
            ("Min Total Time", total.min),
            ("Max Total Time", total.max),
            ("Mean Total Time", total.mean),
        ];
        for (index, (label, value)) in lines.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {:.1}", label, value)?;
        }
        Ok(())
    }
}
