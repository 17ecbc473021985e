//! Repair type record - catalog entry with an estimated duration

use serde::Serialize;

use crate::core::entity::{Record, Row};
use crate::core::loader::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairType {
    /// Primary key
    pub id: i32,

    /// Estimated time to complete a repair of this type
    pub estimated_time: i32,
}

impl Record for RepairType {
    const KIND: &'static str = "repair type";
    const COLUMNS: &'static [&'static str] = &["id", "estimated_time"];

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            id: row.int(0)?,
            estimated_time: row.int(1)?,
        })
    }
}
