use std::fmt;
use std::sync::Mutex;

/// Queued players broken down by role.
///
/// Also serves as the cost vector for forming a party, see [`PARTY_COST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleCounts {
    pub tanks: u64,
    pub healers: u64,
    pub dps: u64,
}

/// Fixed composition of one dungeon party: 1 tank, 1 healer, 3 dps.
pub const PARTY_COST: RoleCounts = RoleCounts {
    tanks: 1,
    healers: 1,
    dps: 3,
};

impl RoleCounts {
    pub fn new(tanks: u64, healers: u64, dps: u64) -> Self {
        Self { tanks, healers, dps }
    }

    /// True if every role meets or exceeds `cost`.
    fn covers(&self, cost: RoleCounts) -> bool {
        self.tanks >= cost.tanks && self.healers >= cost.healers && self.dps >= cost.dps
    }
}

impl fmt::Display for RoleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tanks / {} healers / {} dps",
            self.tanks, self.healers, self.dps
        )
    }
}

/// The depleting pool of queued players.
///
/// Only the dispatcher spends from the pool in the current design, but the
/// check-then-consume step is still guarded by a lock so the all-or-nothing
/// contract of [`try_spend`](ResourcePool::try_spend) holds for any caller,
/// concurrent or not. Counters never go negative.
#[derive(Debug)]
pub struct ResourcePool {
    counts: Mutex<RoleCounts>,
}

impl ResourcePool {
    pub fn new(initial: RoleCounts) -> Self {
        Self {
            counts: Mutex::new(initial),
        }
    }

    /// Atomically consumes `cost` from the pool.
    ///
    /// Returns true and decrements all three counters iff every role can
    /// absorb its share; otherwise returns false and leaves the pool
    /// untouched. No other side effects.
    pub fn try_spend(&self, cost: RoleCounts) -> bool {
        let mut counts = self.counts.lock().unwrap();
        if !counts.covers(cost) {
            return false;
        }
        counts.tanks -= cost.tanks;
        counts.healers -= cost.healers;
        counts.dps -= cost.dps;
        true
    }

    /// Sufficiency check without consuming anything.
    pub fn can_afford(&self, cost: RoleCounts) -> bool {
        self.counts.lock().unwrap().covers(cost)
    }

    /// Snapshot of the remaining pool.
    pub fn remaining(&self) -> RoleCounts {
        *self.counts.lock().unwrap()
    }
}
