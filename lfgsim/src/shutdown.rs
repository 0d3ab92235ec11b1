use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::slot::InstanceSlot;

/// Write-once termination signal shared by every worker.
///
/// Once signalled the flag never reverts. Signalling broadcast-wakes every
/// slot so that each idle worker re-checks its wait predicate and exits;
/// a worker still hosting a party finishes that run first, since the
/// signal only stops new parties from being assigned.
#[derive(Debug)]
pub struct ShutdownCoordinator {
    signalled: AtomicBool,
    /// Wake targets for the broadcast.
    slots: Vec<Arc<InstanceSlot>>,
}

impl ShutdownCoordinator {
    pub fn new(slots: Vec<Arc<InstanceSlot>>) -> Self {
        Self {
            signalled: AtomicBool::new(false),
            slots,
        }
    }

    /// Sets the flag and wakes every slot.
    ///
    /// This is a broadcast, not a single wake: several idle workers may be
    /// parked at once and all of them must observe the flag. Expected to be
    /// called exactly once, after the dispatcher has stopped; a repeat call
    /// is ignored.
    pub fn signal(&self) {
        if self.signalled.swap(true, Ordering::SeqCst) {
            warn!("Shutdown signalled more than once, ignoring repeat");
            return;
        }
        debug!("Shutdown signalled, waking {} instances", self.slots.len());
        for slot in &self.slots {
            slot.wake();
        }
    }

    pub fn is_signalled(&self) -> bool {
        self.signalled.load(Ordering::SeqCst)
    }
}
