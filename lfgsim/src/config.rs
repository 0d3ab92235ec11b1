use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::resource::{RoleCounts, PARTY_COST};

/// Hard cap on a single clear time, in seconds.
pub const MAX_RUN_SECS: u64 = 15;

/// Validated inputs for one simulation run.
///
/// The core never re-validates: [`validate`](Self::validate) is expected to
/// run strictly before a [`Simulation`](crate::system::Simulation) is
/// constructed (the file loader does so itself). A hand-built config that
/// skips validation still produces well-defined behavior - a pool that
/// cannot fill a single party simply yields a zero-run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of concurrent dungeon instances.
    pub instances: usize,
    /// Players queued at the start, by role.
    pub roles: RoleCounts,
    /// Shortest possible clear time, in whole seconds.
    pub min_run_secs: u64,
    /// Longest possible clear time, in whole seconds.
    pub max_run_secs: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            instances: num_cpus::get(),
            roles: RoleCounts::new(10, 10, 30),
            min_run_secs: 5,
            max_run_secs: MAX_RUN_SECS,
        }
    }
}

impl SimulationConfig {
    /// Checks every range rule the loader is responsible for.
    ///
    /// The queue minimums are exactly one party's worth of each role, so a
    /// valid config always dispatches at least one party.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.instances < 1 {
            return Err(ConfigError::NoInstances);
        }
        if self.roles.tanks < PARTY_COST.tanks {
            return Err(ConfigError::NotEnoughTanks(self.roles.tanks));
        }
        if self.roles.healers < PARTY_COST.healers {
            return Err(ConfigError::NotEnoughHealers(self.roles.healers));
        }
        if self.roles.dps < PARTY_COST.dps {
            return Err(ConfigError::NotEnoughDps(self.roles.dps));
        }
        if self.min_run_secs > self.max_run_secs {
            return Err(ConfigError::InvertedRunTimes {
                min: self.min_run_secs,
                max: self.max_run_secs,
            });
        }
        if self.max_run_secs > MAX_RUN_SECS {
            return Err(ConfigError::RunTimeTooLong(self.max_run_secs));
        }
        Ok(())
    }

    /// Loads a config file in `key value` line format.
    ///
    /// Recognized keys: `n` (instances), `t`/`h`/`d` (queued tanks, healers
    /// and dps) and `t1`/`t2` (clear-time bounds in seconds). Malformed
    /// lines and unknown keys are skipped with a warning; every recognized
    /// key is required. The result is validated before it is returned.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut instances = None;
        let mut tanks = None;
        let mut healers = None;
        let mut dps = None;
        let mut min_run = None;
        let mut max_run = None;

        for line in text.lines() {
            let mut fields = line.split_whitespace();
            let (Some(key), Some(value)) = (fields.next(), fields.next()) else {
                if !line.trim().is_empty() {
                    warn!("Skipping malformed config line: {}", line);
                }
                continue;
            };
            let Ok(value) = value.parse::<u64>() else {
                warn!("Invalid number for config key {}: {}", key, value);
                continue;
            };
            match key {
                "n" => instances = Some(value),
                "t" => tanks = Some(value),
                "h" => healers = Some(value),
                "d" => dps = Some(value),
                "t1" => min_run = Some(value),
                "t2" => max_run = Some(value),
                _ => warn!("Ignoring unknown config key: {}", key),
            }
        }

        let config = Self {
            instances: instances.ok_or(ConfigError::MissingKey("n"))? as usize,
            roles: RoleCounts::new(
                tanks.ok_or(ConfigError::MissingKey("t"))?,
                healers.ok_or(ConfigError::MissingKey("h"))?,
                dps.ok_or(ConfigError::MissingKey("d"))?,
            ),
            min_run_secs: min_run.ok_or(ConfigError::MissingKey("t1"))?,
            max_run_secs: max_run.ok_or(ConfigError::MissingKey("t2"))?,
        };
        config.validate()?;
        Ok(config)
    }
}
