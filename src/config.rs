/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Floor, SimError};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub io: IoConfig,
}

/// Building parameters. All cars are identical and start at floor 1.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub n_elevators: usize,
    pub n_floors: Floor,
    pub capacity: usize,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct IoConfig {
    pub input_file: String,
    pub output_file: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_elevators: 1,
            n_floors: 10,
            capacity: 2,
        }
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        IoConfig {
            input_file: "input.json".to_string(),
            output_file: "elevator_time.log".to_string(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.n_elevators == 0 {
            return Err(SimError::InvalidSystem("n_elevators must be at least 1".into()));
        }
        if self.n_floors == 0 {
            return Err(SimError::InvalidSystem("n_floors must be at least 1".into()));
        }
        if self.capacity == 0 {
            return Err(SimError::InvalidSystem("capacity must be at least 1".into()));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, SimError> {
    let config: Config = toml::from_str(config_str)?;
    config.simulation.validate()?;
    Ok(config)
}

/// Loads the configuration file, falling back to defaults when it does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SimError> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No configuration at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}
