//! End-to-end simulation tests.
//!
//! All of these run on the paused tokio clock, so multi-second simulated
//! clears elapse instantly and the tests stay deterministic.

use lfgsim::{RoleCounts, Simulation, SimulationConfig};

fn config(
    instances: usize,
    tanks: u64,
    healers: u64,
    dps: u64,
    min: u64,
    max: u64,
) -> SimulationConfig {
    SimulationConfig {
        instances,
        roles: RoleCounts::new(tanks, healers, dps),
        min_run_secs: min,
        max_run_secs: max,
    }
}

#[tokio::test(start_paused = true)]
async fn exhausts_pool_with_fixed_run_time() {
    // 5 tanks / 5 healers / 15 dps fills exactly five parties.
    let report = Simulation::new(config(2, 5, 5, 15, 5, 5)).run().await.unwrap();

    assert_eq!(report.total_parties(), 5);
    assert_eq!(report.leftover, RoleCounts::new(0, 0, 0));
    assert_eq!(report.slots.len(), 2);
    // Fixed 5s clears: per-slot totals follow directly from run counts.
    assert_eq!(report.total_time(), 25);
    for slot in &report.slots {
        assert_eq!(slot.total_time_served, slot.parties_served * 5);
    }
}

#[tokio::test(start_paused = true)]
async fn insufficient_dps_forms_no_party() {
    let report = Simulation::new(config(1, 1, 1, 2, 5, 5)).run().await.unwrap();

    assert_eq!(report.total_parties(), 0);
    assert_eq!(report.leftover, RoleCounts::new(1, 1, 2));
    assert_eq!(report.slots[0].parties_served, 0);
    assert_eq!(report.slots[0].total_time_served, 0);
}

#[tokio::test(start_paused = true)]
async fn scarcest_role_bounds_party_count() {
    // Dps runs out first: floor(10 / 3) = 3 parties, one dps stranded.
    let report = Simulation::new(config(3, 9, 9, 10, 1, 1)).run().await.unwrap();

    assert_eq!(report.total_parties(), 3);
    assert_eq!(report.leftover, RoleCounts::new(6, 6, 1));
}

#[tokio::test(start_paused = true)]
async fn single_party_goes_to_lowest_id() {
    // One party's worth of players, four idle instances: the ascending-id
    // tie-break sends it to instance 0.
    let report = Simulation::new(config(4, 1, 1, 3, 2, 2)).run().await.unwrap();

    assert_eq!(report.slots[0].parties_served, 1);
    for slot in &report.slots[1..] {
        assert_eq!(slot.parties_served, 0);
    }
}

#[tokio::test(start_paused = true)]
async fn durations_stay_within_bounds() {
    let report = Simulation::new(config(2, 6, 6, 18, 2, 4)).run().await.unwrap();

    assert_eq!(report.total_parties(), 6);
    for slot in &report.slots {
        assert!(slot.total_time_served >= slot.parties_served * 2);
        assert!(slot.total_time_served <= slot.parties_served * 4);
    }
}

#[tokio::test(start_paused = true)]
async fn idle_workers_terminate_on_shutdown() {
    // Eight instances, two parties: six workers never host anything and
    // must still exit cleanly once shutdown is broadcast.
    let report = Simulation::new(config(8, 2, 2, 6, 3, 3)).run().await.unwrap();

    assert_eq!(report.total_parties(), 2);
    assert_eq!(report.slots.len(), 8);
    assert_eq!(report.total_time(), 6);
}

#[tokio::test(start_paused = true)]
async fn zero_length_runs_still_count() {
    let report = Simulation::new(config(2, 4, 4, 12, 0, 0)).run().await.unwrap();

    assert_eq!(report.total_parties(), 4);
    assert_eq!(report.total_time(), 0);
    assert_eq!(report.leftover, RoleCounts::new(0, 0, 0));
}

#[tokio::test(start_paused = true)]
async fn single_instance_serializes_all_runs() {
    // One instance hosts every party back to back.
    let report = Simulation::new(config(1, 4, 4, 12, 5, 5)).run().await.unwrap();

    assert_eq!(report.slots.len(), 1);
    assert_eq!(report.slots[0].parties_served, 4);
    assert_eq!(report.slots[0].total_time_served, 20);
}

#[tokio::test(start_paused = true)]
async fn many_workers_saturate_and_drain() {
    // More parties than instances: the dispatcher has to park and resume
    // repeatedly as instances free up.
    let report = Simulation::new(config(3, 12, 12, 36, 1, 2)).run().await.unwrap();

    assert_eq!(report.total_parties(), 12);
    assert_eq!(report.leftover, RoleCounts::new(0, 0, 0));
    let hosted: u64 = report.slots.iter().map(|s| s.parties_served).sum();
    assert_eq!(hosted, 12);
}
