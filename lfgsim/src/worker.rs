use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::shutdown::ShutdownCoordinator;
use crate::slot::{InstanceSlot, Wakeup};

/// # Instance Worker
///
/// A long-lived task bound to one [`InstanceSlot`]. The worker blocks while
/// its slot is idle, hosts one simulated dungeon run per assignment, and
/// terminates once shutdown is signalled while the slot is empty.
///
/// ## Loop shape
/// 1. Guarded wait on the slot's wake primitive until assigned or shut down
/// 2. Sample a clear time uniformly from the configured bounds
/// 3. Let the clear time elapse on the tokio clock
/// 4. Record the run under the slot lock and signal the dispatcher
///
/// Shutdown never preempts step 2-4: a party that was assigned concurrently
/// with the shutdown signal still gets its full run.
pub struct InstanceWorker {
    slot: Arc<InstanceSlot>,
    shutdown: Arc<ShutdownCoordinator>,
    /// Shared signal the dispatcher waits on when every instance is busy.
    idle_notify: Arc<Notify>,
    min_run_secs: u64,
    max_run_secs: u64,
    /// Per-worker RNG so duration sampling never contends across tasks.
    rng: StdRng,
}

impl InstanceWorker {
    pub fn new(
        slot: Arc<InstanceSlot>,
        shutdown: Arc<ShutdownCoordinator>,
        idle_notify: Arc<Notify>,
        min_run_secs: u64,
        max_run_secs: u64,
    ) -> Self {
        Self {
            slot,
            shutdown,
            idle_notify,
            min_run_secs,
            max_run_secs,
            rng: StdRng::from_entropy(),
        }
    }

    /// Launches the worker loop as a tokio task.
    pub fn spawn(mut self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run_loop().await })
    }

    async fn run_loop(&mut self) {
        let id = self.slot.id();
        debug!("Instance {} worker started", id + 1);

        loop {
            // Guarded wait: the predicate is re-evaluated under the slot
            // lock on every wake, and a permit stored before we park makes
            // the park return immediately, so neither an assignment nor the
            // shutdown broadcast can be lost.
            match self.slot.poll_wakeup(&self.shutdown) {
                Wakeup::Pending => {
                    self.slot.notified().await;
                    continue;
                }
                Wakeup::Shutdown => {
                    debug!("Instance {} worker terminating after shutdown", id + 1);
                    return;
                }
                Wakeup::Assigned => {}
            }

            let duration_secs = self.rng.gen_range(self.min_run_secs..=self.max_run_secs);
            info!("Instance {} is active. Time: {}s", id + 1, duration_secs);

            tokio::time::sleep(Duration::from_secs(duration_secs)).await;

            self.slot.complete_run(duration_secs);
            info!("Instance {} has finished. Now empty.", id + 1);

            // Tell the dispatcher a slot opened up.
            self.idle_notify.notify_one();
        }
    }
}
