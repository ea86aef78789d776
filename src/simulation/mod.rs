pub mod driver;
pub mod generator;
pub mod records;

pub use driver::run_simulation;
pub use generator::generate_requests;
pub use generator::GeneratorConfig;
pub use records::read_log;
pub use records::read_requests;
pub use records::write_log;
pub use records::write_requests;
