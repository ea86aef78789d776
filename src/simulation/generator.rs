/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Floor, Request, SimError, Tick};

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * Parameters for a batch of synthetic requests.
 *
 * # Fields
 * - `count`:       Number of requests to generate.
 * - `n_floors`:    Floors are drawn from `1..=n_floors`. Needs at least two.
 * - `max_time`:    Request times are drawn from `0..=max_time`.
 * - `seed`:        RNG seed. The same seed always gives the same requests.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub n_floors: Floor,
    pub max_time: Tick,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 100,
            n_floors: 20,
            max_time: 10,
            seed: 1004,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
/// Generates random requests sorted by time, ready for `run_simulation`.
pub fn generate_requests(config: &GeneratorConfig) -> Result<Vec<Request>, SimError> {
    if config.n_floors < 2 {
        return Err(SimError::InvalidSystem(
            "at least two floors are needed to generate requests".into(),
        ));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut requests: Vec<Request> = (0..config.count as u64)
        .map(|id| {
            let source = rng.random_range(1..=config.n_floors);
            let mut dest = rng.random_range(1..=config.n_floors);
            while dest == source {
                dest = rng.random_range(1..=config.n_floors);
            }
            let time = rng.random_range(0..=config.max_time);
            Request { id, source, dest, time }
        })
        .collect();

    // Stable, so requests at the same time keep their id order
    requests.sort_by_key(|r| r.time);
    Ok(requests)
}
