//! Property tests for the efficiency engine

use proptest::prelude::*;
use shopeff::core::compute_report;
use shopeff::entities::{Mechanic, RepairJob, RepairType};

fn mechanics_strategy() -> impl Strategy<Value = Vec<Mechanic>> {
    prop::collection::vec((1..6i32, "[A-Z][a-z]{1,6}"), 0..6).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, name)| Mechanic {
                id,
                name,
                age: 30,
                time_per_day: 8,
                complexity_level: 3,
            })
            .collect()
    })
}

fn types_strategy() -> impl Strategy<Value = Vec<RepairType>> {
    prop::collection::vec((1..6i32, 0..120i32), 0..6).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, estimated_time)| RepairType { id, estimated_time })
            .collect()
    })
}

fn jobs_strategy() -> impl Strategy<Value = Vec<RepairJob>> {
    prop::collection::vec((100..110i32, 0..8i32, 0..150i32, -1..8i32), 0..30).prop_map(|rows| {
        rows.into_iter()
            .map(|(vehicle_id, repair_type_id, actual_time, mechanic_id)| RepairJob {
                vehicle_id,
                declared_complexity: 1,
                repair_type_id,
                actual_time,
                entry_date: "2024-01-01".to_string(),
                mechanic_id,
            })
            .collect()
    })
}

/// Delta of a job that takes part in the aggregation, found by linear scan
fn matched_delta(job: &RepairJob, types: &[RepairType], mechanics: &[Mechanic]) -> Option<i64> {
    if job.mechanic_id == -1 {
        return None;
    }
    let repair_type = types.iter().find(|t| t.id == job.repair_type_id)?;
    mechanics.iter().find(|m| m.id == job.mechanic_id)?;
    Some(i64::from(repair_type.estimated_time) - i64::from(job.actual_time))
}

proptest! {
    #[test]
    fn overrun_list_matches_negative_deltas(
        mechanics in mechanics_strategy(),
        types in types_strategy(),
        jobs in jobs_strategy(),
    ) {
        let report = compute_report(&jobs, &types, &mechanics);

        let expected: Vec<i32> = jobs
            .iter()
            .filter(|job| matches!(matched_delta(job, &types, &mechanics), Some(d) if d < 0))
            .map(|job| job.vehicle_id)
            .collect();
        prop_assert_eq!(&report.overrun_vehicle_ids, &expected);
        prop_assert_eq!(report.overruns.len(), expected.len());
    }

    #[test]
    fn totals_match_brute_force(
        mechanics in mechanics_strategy(),
        types in types_strategy(),
        jobs in jobs_strategy(),
    ) {
        let report = compute_report(&jobs, &types, &mechanics);

        for totals in &report.standings {
            let deltas: Vec<i64> = jobs
                .iter()
                .filter(|job| job.mechanic_id == totals.mechanic_id)
                .filter_map(|job| matched_delta(job, &types, &mechanics))
                .collect();
            let saved: i64 = deltas.iter().filter(|d| **d > 0).sum();
            let over: i64 = deltas.iter().filter(|d| **d < 0).map(|d| -d).sum();

            prop_assert_eq!(totals.efficient_hours, saved);
            prop_assert_eq!(totals.overrun_hours, over);
            prop_assert_eq!(totals.jobs, deltas.len());
            prop_assert!(totals.jobs > 0);
        }
    }

    #[test]
    fn unassigned_jobs_never_count(
        mechanics in mechanics_strategy(),
        types in types_strategy(),
        jobs in jobs_strategy(),
    ) {
        let assigned: Vec<RepairJob> = jobs.iter().filter(|j| j.is_assigned()).cloned().collect();

        let with = compute_report(&jobs, &types, &mechanics);
        let without = compute_report(&assigned, &types, &mechanics);

        prop_assert_eq!(with.overrun_vehicle_ids, without.overrun_vehicle_ids);
        prop_assert_eq!(with.standings, without.standings);
        prop_assert_eq!(with.skipped.unassigned, jobs.len() - assigned.len());
    }

    #[test]
    fn best_mechanic_has_maximal_net(
        mechanics in mechanics_strategy(),
        types in types_strategy(),
        jobs in jobs_strategy(),
    ) {
        let report = compute_report(&jobs, &types, &mechanics);

        match report.best_mechanic() {
            Some(best) => {
                for totals in &report.standings {
                    prop_assert!(best.net_efficiency() >= totals.net_efficiency());
                }
            }
            None => prop_assert!(report.standings.is_empty()),
        }
    }

    #[test]
    fn report_is_repeatable(
        mechanics in mechanics_strategy(),
        types in types_strategy(),
        jobs in jobs_strategy(),
    ) {
        let first = compute_report(&jobs, &types, &mechanics);
        let second = compute_report(&jobs, &types, &mechanics);
        prop_assert_eq!(first, second);
    }
}
