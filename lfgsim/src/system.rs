use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::SimulationConfig;
use crate::dispatcher::Dispatcher;
use crate::error::SystemError;
use crate::report::SimulationReport;
use crate::resource::ResourcePool;
use crate::shutdown::ShutdownCoordinator;
use crate::slot::InstanceSlot;
use crate::worker::InstanceWorker;

/// Owns one simulation run end to end.
///
/// Builds the player pool, the instance slots and the shutdown
/// coordinator, spawns one worker per slot, drives the dispatcher on the
/// calling task, then signals shutdown, joins every worker and collects
/// the final report. Slot statistics are only read after the last join,
/// so no run is ever observed mid-flight.
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Accepts an already-validated configuration (see
    /// [`SimulationConfig::validate`]).
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<SimulationReport, SystemError> {
        let config = self.config;
        let pool = Arc::new(ResourcePool::new(config.roles));

        if config.instances == 0 {
            // Zero instances would leave the dispatcher parked forever.
            warn!("Simulation started with zero instances, nothing to dispatch");
            return Ok(SimulationReport {
                slots: Vec::new(),
                leftover: pool.remaining(),
            });
        }

        let slots: Vec<Arc<InstanceSlot>> = (0..config.instances)
            .map(|id| Arc::new(InstanceSlot::new(id)))
            .collect();
        let shutdown = Arc::new(ShutdownCoordinator::new(slots.clone()));
        let idle_notify = Arc::new(Notify::new());

        info!(
            "Starting simulation: {} instances, {} queued, {}-{}s clears",
            config.instances,
            pool.remaining(),
            config.min_run_secs,
            config.max_run_secs
        );

        let workers: Vec<(usize, JoinHandle<()>)> = slots
            .iter()
            .map(|slot| {
                let worker = InstanceWorker::new(
                    Arc::clone(slot),
                    Arc::clone(&shutdown),
                    Arc::clone(&idle_notify),
                    config.min_run_secs,
                    config.max_run_secs,
                );
                (slot.id(), worker.spawn())
            })
            .collect();

        let dispatcher = Dispatcher::new(Arc::clone(&pool), slots.clone(), idle_notify);
        let dispatched = dispatcher.run().await;

        // Let in-flight runs finish: signal first, then wait for every
        // worker to exit before touching the per-slot counters.
        shutdown.signal();
        for (id, handle) in workers {
            handle
                .await
                .map_err(|source| SystemError::WorkerJoin { id, source })?;
        }

        let report = SimulationReport {
            slots: slots.iter().map(|slot| slot.stats()).collect(),
            leftover: pool.remaining(),
        };
        debug_assert_eq!(report.total_parties(), dispatched);
        info!("Simulation complete: {} parties served", dispatched);
        Ok(report)
    }
}
