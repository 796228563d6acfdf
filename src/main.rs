pub mod angle_source;
pub mod barista;
pub mod constants;
pub mod errors;
pub mod figure;
pub mod figure_context;
pub mod mood;
pub mod order;
pub mod point;
pub mod scenario_reader;
pub mod strategy;

use std::env;

use log::error;

use constants::DEFAULT_SCENARIO_PATH;
use scenario_reader::run_scenario;

fn main() {
    if let Err(err) = simple_logger::init_with_level(log::Level::Info) {
        eprintln!("Could not initialize the logger: {}", err);
    }

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCENARIO_PATH.to_string());
    if let Err(err) = run_scenario(&path) {
        error!("[MAIN] {}", err);
        std::process::exit(1);
    }
}
