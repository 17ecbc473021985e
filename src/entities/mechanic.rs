//! Mechanic record - a worker eligible for assignment to repair jobs

use serde::Serialize;

use crate::core::entity::{Record, Row};
use crate::core::loader::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mechanic {
    /// Primary key
    pub id: i32,

    pub name: String,

    pub age: i32,

    /// Hours available per working day
    pub time_per_day: i32,

    /// Highest repair complexity this mechanic handles
    pub complexity_level: i32,
}

impl Record for Mechanic {
    const KIND: &'static str = "mechanic";
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "age", "time_per_day", "complexity_level"];

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            id: row.int(0)?,
            name: row.text(1)?.to_string(),
            age: row.int(2)?,
            time_per_day: row.int(3)?,
            complexity_level: row.int(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;

    #[test]
    fn test_mechanic_from_row() {
        let fields = StringRecord::from(vec!["3", "Ana Souza", "41", "8", "5"]);
        let row = Row::new::<Mechanic>("mechanics.csv", 2, &fields);
        let mechanic = Mechanic::from_row(&row).unwrap();

        assert_eq!(mechanic.id, 3);
        assert_eq!(mechanic.name, "Ana Souza");
        assert_eq!(mechanic.age, 41);
        assert_eq!(mechanic.time_per_day, 8);
        assert_eq!(mechanic.complexity_level, 5);
    }

    #[test]
    fn test_mechanic_sentinel_is_not_special() {
        let fields = StringRecord::from(vec!["3", "Ana", "NULL", "8", "5"]);
        let row = Row::new::<Mechanic>("mechanics.csv", 2, &fields);
        assert!(matches!(
            Mechanic::from_row(&row),
            Err(LoadError::InvalidInteger { column: "age", .. })
        ));
    }
}
