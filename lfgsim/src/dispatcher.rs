use std::sync::Arc;

use tokio::sync::Notify;
use tracing::{debug, warn};

use crate::resource::{ResourcePool, PARTY_COST};
use crate::slot::InstanceSlot;

/// The single control loop that forms parties and hands them to idle
/// instances.
///
/// Each iteration finds the first idle slot in ascending id order, spends
/// one [`PARTY_COST`] from the player pool, marks the slot busy and wakes
/// its worker. When every instance is hosting, the dispatcher parks on the
/// shared idle signal instead of spinning. The loop ends once the pool can
/// no longer fill a party; partial parties are never formed.
pub struct Dispatcher {
    pool: Arc<ResourcePool>,
    slots: Vec<Arc<InstanceSlot>>,
    /// Signalled by workers whenever an instance goes idle.
    idle_notify: Arc<Notify>,
}

impl Dispatcher {
    pub fn new(
        pool: Arc<ResourcePool>,
        slots: Vec<Arc<InstanceSlot>>,
        idle_notify: Arc<Notify>,
    ) -> Self {
        Self {
            pool,
            slots,
            idle_notify,
        }
    }

    /// Runs until the player pool can no longer fill a party.
    ///
    /// The sufficiency check happens before every assignment attempt, so a
    /// pool that still has players of some roles but cannot cover the full
    /// cost stops the loop without consuming anything.
    ///
    /// Returns the number of parties dispatched.
    pub async fn run(&self) -> u64 {
        let mut dispatched = 0u64;

        while self.pool.can_afford(PARTY_COST) {
            let Some(slot) = self.first_idle_slot() else {
                // Every instance is hosting; park until one opens up. A
                // completion between the scan and this await leaves a
                // permit, so the park returns immediately.
                self.idle_notify.notified().await;
                continue;
            };

            if !self.pool.try_spend(PARTY_COST) {
                // The loop guard and the spend are logically separate
                // steps; treat an interleaved shortfall as transient and
                // rescan. Nothing was reserved, so nothing is released.
                warn!("Player pool fell short between check and spend, rescanning");
                continue;
            }

            debug!("Party formed, dispatching to instance {}", slot.id() + 1);
            slot.assign();
            dispatched += 1;
        }

        debug!(
            "Player pool exhausted after {} parties, left in queue: {}",
            dispatched,
            self.pool.remaining()
        );
        dispatched
    }

    /// First idle slot in ascending id order.
    ///
    /// The ordering is a deliberate determinism guarantee, not an accident
    /// of iteration: two idle slots always resolve to the lower id.
    fn first_idle_slot(&self) -> Option<&Arc<InstanceSlot>> {
        self.slots.iter().find(|slot| !slot.is_busy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_scan_prefers_lowest_id() {
        let slots: Vec<Arc<InstanceSlot>> =
            (0..4).map(|id| Arc::new(InstanceSlot::new(id))).collect();
        let dispatcher = Dispatcher::new(
            Arc::new(ResourcePool::new(crate::resource::RoleCounts::default())),
            slots.clone(),
            Arc::new(Notify::new()),
        );

        assert_eq!(dispatcher.first_idle_slot().unwrap().id(), 0);

        slots[0].assign();
        slots[1].assign();
        assert_eq!(dispatcher.first_idle_slot().unwrap().id(), 2);

        // Slot 1 frees up: it wins over slot 2 on the next scan.
        slots[1].complete_run(1);
        assert_eq!(dispatcher.first_idle_slot().unwrap().id(), 1);

        slots[1].assign();
        slots[2].assign();
        slots[3].assign();
        assert!(dispatcher.first_idle_slot().is_none());
    }
}
