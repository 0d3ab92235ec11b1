//! Minimal end-to-end run with a small queue.
//!
//! ```sh
//! cargo run --example quick_run
//! ```

use lfgsim::{logging, RoleCounts, Simulation, SimulationConfig};

#[tokio::main]
async fn main() {
    logging::init_default();

    let config = SimulationConfig {
        instances: 3,
        roles: RoleCounts::new(6, 6, 20),
        min_run_secs: 1,
        max_run_secs: 3,
    };
    config.validate().expect("demo config is valid");

    let report = Simulation::new(config)
        .run()
        .await
        .expect("simulation failed");
    println!("{report}");
}
