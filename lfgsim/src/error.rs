use thiserror::Error;

/// Errors produced while loading or validating a simulation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing required config key: {0}")]
    MissingKey(&'static str),
    #[error("instance count must be at least 1")]
    NoInstances,
    #[error("at least 1 tank must be queued (got {0})")]
    NotEnoughTanks(u64),
    #[error("at least 1 healer must be queued (got {0})")]
    NotEnoughHealers(u64),
    #[error("at least 3 dps must be queued (got {0})")]
    NotEnoughDps(u64),
    #[error("minimum clear time {min}s exceeds maximum clear time {max}s")]
    InvertedRunTimes { min: u64, max: u64 },
    #[error("maximum clear time cannot exceed 15 seconds (got {0})")]
    RunTimeTooLong(u64),
}

/// Errors related to running the simulation itself.
///
/// The running core has no fallible domain operations; the only failure
/// surface is the shutdown join, where a panicked worker task shows up.
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("instance {id} worker did not terminate cleanly")]
    WorkerJoin {
        id: usize,
        #[source]
        source: tokio::task::JoinError,
    },
}
