//! Efficiency engine - joins repair jobs to their repair type and mechanic,
//! classifies each job against its estimate and totals the result per mechanic.
//!
//! All aggregation state is local to [`compute_report`]; the inputs are only
//! borrowed, so repeated calls on the same collections give identical reports.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::entities::{Mechanic, RepairJob, RepairType};

/// How a job's actual time compares with its estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Finished early by this many hours
    Efficient(i64),
    /// Ran over the estimate by this many hours
    Overrun(i64),
    OnEstimate,
}

impl Outcome {
    /// Classify a delta (estimated minus actual time)
    pub fn classify(delta: i64) -> Self {
        match delta.cmp(&0) {
            std::cmp::Ordering::Greater => Outcome::Efficient(delta),
            std::cmp::Ordering::Less => Outcome::Overrun(-delta),
            std::cmp::Ordering::Equal => Outcome::OnEstimate,
        }
    }
}

/// A matched, assigned job that took longer than estimated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrunJob {
    pub vehicle_id: i32,
    pub repair_type_id: i32,
    pub mechanic_id: i32,
    pub estimated_time: i32,
    pub actual_time: i32,
    pub hours_over: i64,
}

/// Running totals for one mechanic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MechanicTotals {
    pub mechanic_id: i32,
    pub name: String,
    /// Hours saved across jobs finished under estimate
    pub efficient_hours: i64,
    /// Hours lost across jobs that ran over estimate
    pub overrun_hours: i64,
    /// Matched jobs counted for this mechanic, on-estimate ones included
    pub jobs: usize,
}

impl MechanicTotals {
    fn new(mechanic: &Mechanic) -> Self {
        Self {
            mechanic_id: mechanic.id,
            name: mechanic.name.clone(),
            efficient_hours: 0,
            overrun_hours: 0,
            jobs: 0,
        }
    }

    pub fn net_efficiency(&self) -> i64 {
        self.efficient_hours - self.overrun_hours
    }
}

/// Jobs left out of the aggregation, by reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub unassigned: usize,
    pub unknown_repair_type: usize,
    pub unknown_mechanic: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.unassigned + self.unknown_repair_type + self.unknown_mechanic
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EfficiencyReport {
    /// Vehicle of every overrun job, in input order, repeats kept
    pub overrun_vehicle_ids: Vec<i32>,

    /// Detail for each entry of `overrun_vehicle_ids`
    pub overruns: Vec<OverrunJob>,

    /// One entry per contributing mechanic, in order of first contribution
    pub standings: Vec<MechanicTotals>,

    pub skipped: SkipCounts,
}

impl EfficiencyReport {
    pub fn overrun_count(&self) -> usize {
        self.overrun_vehicle_ids.len()
    }

    /// Mechanic with the highest net efficiency.
    ///
    /// On a tie the mechanic whose first contributing job came earliest in
    /// the input wins. `None` when no mechanic had a matched job.
    pub fn best_mechanic(&self) -> Option<&MechanicTotals> {
        self.standings.iter().fold(None, |best, candidate| match best {
            Some(current) if current.net_efficiency() >= candidate.net_efficiency() => {
                Some(current)
            }
            _ => Some(candidate),
        })
    }

    pub fn best_mechanic_name(&self) -> Option<&str> {
        self.best_mechanic().map(|totals| totals.name.as_str())
    }

    /// Standings ordered by net efficiency, highest first, ties kept in
    /// first-contribution order
    pub fn ranked(&self) -> Vec<&MechanicTotals> {
        let mut ranked: Vec<&MechanicTotals> = self.standings.iter().collect();
        ranked.sort_by_key(|totals| Reverse(totals.net_efficiency()));
        ranked
    }
}

/// Build a key index over a collection. The first record wins on duplicate keys.
fn index_by<'a, T>(records: &'a [T], key: impl Fn(&T) -> i32) -> HashMap<i32, &'a T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(key(record)).or_insert(record);
    }
    index
}

/// Cross-reference jobs with repair types and mechanics and total the outcome
pub fn compute_report(
    jobs: &[RepairJob],
    types: &[RepairType],
    mechanics: &[Mechanic],
) -> EfficiencyReport {
    let types_by_id = index_by(types, |t| t.id);
    let mechanics_by_id = index_by(mechanics, |m| m.id);

    let mut report = EfficiencyReport::default();
    let mut slots: HashMap<i32, usize> = HashMap::new();

    for job in jobs {
        if !job.is_assigned() {
            report.skipped.unassigned += 1;
            continue;
        }

        let Some(repair_type) = types_by_id.get(&job.repair_type_id) else {
            debug!(
                vehicle_id = job.vehicle_id,
                repair_type_id = job.repair_type_id,
                "skipping job with unknown repair type"
            );
            report.skipped.unknown_repair_type += 1;
            continue;
        };
        let delta = job.delta(repair_type.estimated_time);

        let Some(mechanic) = mechanics_by_id.get(&job.mechanic_id) else {
            debug!(
                vehicle_id = job.vehicle_id,
                mechanic_id = job.mechanic_id,
                "skipping job with unknown mechanic"
            );
            report.skipped.unknown_mechanic += 1;
            continue;
        };

        let slot = *slots.entry(mechanic.id).or_insert_with(|| {
            report.standings.push(MechanicTotals::new(mechanic));
            report.standings.len() - 1
        });
        let totals = &mut report.standings[slot];
        totals.jobs += 1;

        match Outcome::classify(delta) {
            Outcome::Efficient(hours) => totals.efficient_hours += hours,
            Outcome::Overrun(hours) => {
                totals.overrun_hours += hours;
                report.overrun_vehicle_ids.push(job.vehicle_id);
                report.overruns.push(OverrunJob {
                    vehicle_id: job.vehicle_id,
                    repair_type_id: job.repair_type_id,
                    mechanic_id: job.mechanic_id,
                    estimated_time: repair_type.estimated_time,
                    actual_time: job.actual_time,
                    hours_over: hours,
                });
            }
            Outcome::OnEstimate => {}
        }
    }

    report
}
