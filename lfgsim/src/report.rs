use std::fmt;

use crate::resource::RoleCounts;
use crate::slot::SlotStats;

/// Outcome of a completed simulation run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Per-instance statistics, in id order.
    pub slots: Vec<SlotStats>,
    /// Players still queued once the pool could no longer fill a party.
    pub leftover: RoleCounts,
}

impl SimulationReport {
    /// Total parties served across all instances.
    pub fn total_parties(&self) -> u64 {
        self.slots.iter().map(|slot| slot.parties_served).sum()
    }

    /// Total simulated clear time across all instances, in seconds.
    pub fn total_time(&self) -> u64 {
        self.slots.iter().map(|slot| slot.total_time_served).sum()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        for slot in &self.slots {
            writeln!(
                f,
                "Instance {} served {} parties for a total of {}s",
                slot.id + 1,
                slot.parties_served,
                slot.total_time_served
            )?;
        }
        write!(f, "Left in queue: {}", self.leftover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_across_slots() {
        let report = SimulationReport {
            slots: vec![
                SlotStats {
                    id: 0,
                    parties_served: 3,
                    total_time_served: 17,
                },
                SlotStats {
                    id: 1,
                    parties_served: 2,
                    total_time_served: 12,
                },
            ],
            leftover: RoleCounts::new(0, 0, 1),
        };
        assert_eq!(report.total_parties(), 5);
        assert_eq!(report.total_time(), 29);
    }

    #[test]
    fn renders_one_based_instance_lines() {
        let report = SimulationReport {
            slots: vec![SlotStats {
                id: 0,
                parties_served: 2,
                total_time_served: 11,
            }],
            leftover: RoleCounts::new(1, 0, 2),
        };
        let text = report.to_string();
        assert!(text.contains("Instance 1 served 2 parties for a total of 11s"));
        assert!(text.contains("Left in queue: 1 tanks / 0 healers / 2 dps"));
    }
}
