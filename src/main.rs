/* 3rd party libraries */
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::io::Write;

/* Custom libraries */
use elevator_sim::config::{self, Config};
use elevator_sim::simulation::{self, GeneratorConfig};
use elevator_sim::unwrap_or_exit;

/* Command line */
#[derive(Parser)]
#[clap(name = "elevator_sim", version, about = "Elevator System Simulation.")]
struct Cli {
    /// Configuration file. Built-in defaults are used when it does not exist.
    #[clap(long, default_value = "config.toml", global = true)]
    config: String,

    /// Enable debug mode.
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulation over a line-delimited JSON request file.
    Run {
        /// The input file path with passenger requests.
        input_file: Option<String>,

        /// The output file path for the tick log.
        output_file: Option<String>,

        /// Number of elevators in the building.
        #[clap(short = 'e', long)]
        num_elevators: Option<usize>,

        /// Number of floors in the building.
        #[clap(short = 'f', long)]
        num_floors: Option<u32>,

        /// Passenger capacity in each elevator.
        #[clap(short, long)]
        capacity: Option<usize>,
    },

    /// Write a file of random requests.
    Generate {
        /// Where to write the requests.
        #[clap(default_value = "input.json")]
        output_file: String,

        #[clap(short = 'n', long, default_value_t = 100)]
        count: usize,

        #[clap(short = 'f', long, default_value_t = 20)]
        num_floors: u32,

        #[clap(short = 't', long, default_value_t = 10)]
        max_time: u64,

        #[clap(short, long, default_value_t = 1004)]
        seed: u64,
    },
}

/* Main */
fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Run {
            input_file,
            output_file,
            num_elevators,
            num_floors,
            capacity,
        } => {
            // Flags override the configuration file
            let mut config: Config = unwrap_or_exit!(config::load_config(&cli.config));
            if let Some(path) = input_file {
                config.io.input_file = path;
            }
            if let Some(path) = output_file {
                config.io.output_file = path;
            }
            if let Some(n) = num_elevators {
                config.simulation.n_elevators = n;
            }
            if let Some(n) = num_floors {
                config.simulation.n_floors = n;
            }
            if let Some(n) = capacity {
                config.simulation.capacity = n;
            }

            let requests = unwrap_or_exit!(simulation::read_requests(&config.io.input_file));
            info!("Read {} requests from {}", requests.len(), config.io.input_file);

            let system = unwrap_or_exit!(simulation::run_simulation(&config.simulation, requests));
            unwrap_or_exit!(simulation::write_log(&config.io.output_file, system.log()));
            info!("Wrote {} ticks to {}", system.log().len(), config.io.output_file);

            println!("{}", system.time_summary());
        }

        Command::Generate {
            output_file,
            count,
            num_floors,
            max_time,
            seed,
        } => {
            let generator = GeneratorConfig {
                count,
                n_floors: num_floors,
                max_time,
                seed,
            };
            let requests = unwrap_or_exit!(simulation::generate_requests(&generator));
            unwrap_or_exit!(simulation::write_requests(&output_file, &requests));
            info!("Wrote {} requests to {}", requests.len(), output_file);
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}
