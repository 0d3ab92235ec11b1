//! LFG dungeon-queue simulator.
//!
//! A fixed pool of concurrent dungeon-instance workers each host one party
//! at a time, coordinated by a single dispatcher that forms parties
//! (1 tank / 1 healer / 3 dps) from a depleting queue of players. The
//! interesting part is the synchronization protocol: per-slot blocking
//! wait/notify coordination, atomic check-then-consume resource
//! accounting, deterministic lowest-id instance selection, and a
//! cooperative shutdown handshake that lets in-flight runs finish.
//!
//! Entry point: build a [`SimulationConfig`], validate it (or load it from
//! the `key value` config-file format via
//! [`SimulationConfig::from_file`]), then run it:
//!
//! ```no_run
//! use lfgsim::{RoleCounts, Simulation, SimulationConfig};
//!
//! # async fn demo() {
//! let config = SimulationConfig {
//!     instances: 3,
//!     roles: RoleCounts::new(5, 5, 15),
//!     min_run_secs: 5,
//!     max_run_secs: 15,
//! };
//! let report = Simulation::new(config).run().await.unwrap();
//! println!("{report}");
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod report;
pub mod resource;
pub mod shutdown;
pub mod slot;
pub mod system;
pub mod worker;

// Re-export the types most callers need.
pub use config::{SimulationConfig, MAX_RUN_SECS};
pub use error::{ConfigError, SystemError};
pub use report::SimulationReport;
pub use resource::{ResourcePool, RoleCounts, PARTY_COST};
pub use slot::{InstanceSlot, SlotStats};
pub use system::Simulation;
