//! Repair job record - one repair task performed on a vehicle

use serde::Serialize;

use crate::core::entity::{Record, Row};
use crate::core::loader::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairJob {
    pub vehicle_id: i32,

    pub declared_complexity: i32,

    /// Foreign key into the repair type catalog
    pub repair_type_id: i32,

    /// Time actually spent; `NULL` in the source loads as 0
    pub actual_time: i32,

    /// Entry date, kept as written
    pub entry_date: String,

    /// Foreign key into the mechanics; [`RepairJob::MECHANIC_UNASSIGNED`] when
    /// nobody was assigned
    pub mechanic_id: i32,
}

impl RepairJob {
    /// Mechanic id used for jobs with no assigned mechanic
    pub const MECHANIC_UNASSIGNED: i32 = -1;

    /// Actual time used when the source has none recorded
    pub const ACTUAL_TIME_ABSENT: i32 = 0;

    pub fn is_assigned(&self) -> bool {
        self.mechanic_id != Self::MECHANIC_UNASSIGNED
    }

    /// Estimated minus actual time; positive means time was saved
    pub fn delta(&self, estimated_time: i32) -> i64 {
        i64::from(estimated_time) - i64::from(self.actual_time)
    }
}

impl Record for RepairJob {
    const KIND: &'static str = "repair job";
    const COLUMNS: &'static [&'static str] = &[
        "vehicle_id",
        "declared_complexity",
        "repair_type_id",
        "actual_time",
        "entry_date",
        "mechanic_id",
    ];

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            vehicle_id: row.int(0)?,
            declared_complexity: row.int(1)?,
            repair_type_id: row.int(2)?,
            actual_time: row.int_or(3, Self::ACTUAL_TIME_ABSENT)?,
            entry_date: row.text(4)?.to_string(),
            mechanic_id: row.int_or(5, Self::MECHANIC_UNASSIGNED)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;

    fn parse(fields: Vec<&str>) -> Result<RepairJob, LoadError> {
        let record = StringRecord::from(fields);
        let row = Row::new::<RepairJob>("jobs.csv", 2, &record);
        RepairJob::from_row(&row)
    }

    #[test]
    fn test_repair_job_from_row() {
        let job = parse(vec!["100", "3", "10", "45", "2024-03-01", "2"]).unwrap();
        assert_eq!(job.vehicle_id, 100);
        assert_eq!(job.declared_complexity, 3);
        assert_eq!(job.repair_type_id, 10);
        assert_eq!(job.actual_time, 45);
        assert_eq!(job.entry_date, "2024-03-01");
        assert_eq!(job.mechanic_id, 2);
        assert!(job.is_assigned());
    }

    #[test]
    fn test_null_actual_time_loads_as_zero() {
        let job = parse(vec!["100", "3", "10", "NULL", "2024-03-01", "2"]).unwrap();
        assert_eq!(job.actual_time, RepairJob::ACTUAL_TIME_ABSENT);
    }

    #[test]
    fn test_null_mechanic_loads_as_unassigned() {
        let job = parse(vec!["100", "3", "10", "45", "2024-03-01", "NULL"]).unwrap();
        assert_eq!(job.mechanic_id, RepairJob::MECHANIC_UNASSIGNED);
        assert!(!job.is_assigned());
    }

    #[test]
    fn test_null_is_not_accepted_for_keys() {
        assert!(matches!(
            parse(vec!["100", "3", "NULL", "45", "2024-03-01", "2"]),
            Err(LoadError::InvalidInteger {
                column: "repair_type_id",
                ..
            })
        ));
    }

    #[test]
    fn test_entry_date_is_opaque() {
        let job = parse(vec!["100", "3", "10", "45", "sometime in march", "2"]).unwrap();
        assert_eq!(job.entry_date, "sometime in march");
    }

    #[test]
    fn test_delta() {
        let job = parse(vec!["100", "3", "10", "90", "2024-03-01", "1"]).unwrap();
        assert_eq!(job.delta(60), -30);
        assert_eq!(job.delta(90), 0);
        assert_eq!(job.delta(100), 10);
    }

    #[test]
    fn test_delta_does_not_overflow() {
        let mut job = parse(vec!["100", "3", "10", "0", "2024-03-01", "1"]).unwrap();
        job.actual_time = i32::MIN;
        assert_eq!(job.delta(i32::MAX), i64::from(i32::MAX) - i64::from(i32::MIN));
    }
}
