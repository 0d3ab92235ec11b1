use std::sync::Mutex;

use tokio::sync::Notify;

use crate::shutdown::ShutdownCoordinator;

/// Mutable state of one dungeon instance, guarded by the slot lock.
#[derive(Debug, Default)]
struct SlotState {
    /// Whether a party is currently inside the instance.
    busy: bool,
    parties_served: u64,
    total_time_served: u64,
}

/// Final per-instance statistics, read once the bound worker has terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStats {
    pub id: usize,
    pub parties_served: u64,
    /// Accumulated clear time across all runs, in whole seconds.
    pub total_time_served: u64,
}

/// What a worker should do after waking from its slot's wait primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wakeup {
    /// A party was assigned; run it to completion before anything else.
    Assigned,
    /// Shutdown observed with no party inside; terminate.
    Shutdown,
    /// Neither condition holds yet; park again.
    Pending,
}

/// One dungeon instance: identity, busy/idle state, lifetime counters, and
/// the wake primitive its bound worker blocks on.
///
/// # Ownership protocol
/// Exactly two actors ever touch the state, always under the slot lock:
/// the dispatcher flips `busy` false -> true when it assigns a party, and
/// the bound worker flips it true -> false (updating the counters) when a
/// run completes. Neither direction is ever taken by the other actor, and
/// no actor holds two slot locks at once.
#[derive(Debug)]
pub struct InstanceSlot {
    id: usize,
    state: Mutex<SlotState>,
    wakeup: Notify,
}

impl InstanceSlot {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            state: Mutex::new(SlotState::default()),
            wakeup: Notify::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Busy check for the dispatcher's idle scan, read under the slot lock.
    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap().busy
    }

    /// Dispatcher side of the handoff: mark the slot busy and wake its
    /// worker. Must only be called on an idle slot.
    pub(crate) fn assign(&self) {
        {
            let mut state = self.state.lock().unwrap();
            debug_assert!(!state.busy, "assigning a party to a busy instance");
            state.busy = true;
        }
        self.wakeup.notify_one();
    }

    /// Worker side of the handoff: record a completed run and go idle.
    pub(crate) fn complete_run(&self, duration_secs: u64) {
        let mut state = self.state.lock().unwrap();
        debug_assert!(state.busy, "completing a run on an idle instance");
        state.busy = false;
        state.parties_served += 1;
        state.total_time_served += duration_secs;
    }

    /// Evaluates the worker's wait predicate in a single critical section.
    ///
    /// Busy is checked before shutdown so an assignment that raced ahead of
    /// the shutdown signal is always honored; a worker may only terminate
    /// from an idle slot. Because `assign` takes the same lock, the two
    /// reads cannot be interleaved by a concurrent assignment.
    pub(crate) fn poll_wakeup(&self, shutdown: &ShutdownCoordinator) -> Wakeup {
        let state = self.state.lock().unwrap();
        if state.busy {
            Wakeup::Assigned
        } else if shutdown.is_signalled() {
            Wakeup::Shutdown
        } else {
            Wakeup::Pending
        }
    }

    /// Wake the bound worker so it re-checks its wait predicate.
    ///
    /// If the worker is not parked yet, the permit is stored and the next
    /// [`notified`](Self::notified) call completes immediately, so a wake
    /// sent between predicate check and park is never lost.
    pub(crate) fn wake(&self) {
        self.wakeup.notify_one();
    }

    /// Parks until the next wake (or immediately, on a stored permit).
    pub(crate) async fn notified(&self) {
        self.wakeup.notified().await;
    }

    /// Counters snapshot for the final report.
    pub fn stats(&self) -> SlotStats {
        let state = self.state.lock().unwrap();
        SlotStats {
            id: self.id,
            parties_served: state.parties_served,
            total_time_served: state.total_time_served,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_then_complete_updates_counters() {
        let slot = InstanceSlot::new(0);
        assert!(!slot.is_busy());

        slot.assign();
        assert!(slot.is_busy());

        slot.complete_run(7);
        assert!(!slot.is_busy());
        let stats = slot.stats();
        assert_eq!(stats.parties_served, 1);
        assert_eq!(stats.total_time_served, 7);
    }

    #[test]
    fn wakeup_prefers_assignment_over_shutdown() {
        let slot = InstanceSlot::new(0);
        let shutdown = ShutdownCoordinator::new(Vec::new());

        assert_eq!(slot.poll_wakeup(&shutdown), Wakeup::Pending);

        // Assignment and shutdown both pending: the run wins.
        slot.assign();
        shutdown.signal();
        assert_eq!(slot.poll_wakeup(&shutdown), Wakeup::Assigned);

        slot.complete_run(3);
        assert_eq!(slot.poll_wakeup(&shutdown), Wakeup::Shutdown);
    }
}
