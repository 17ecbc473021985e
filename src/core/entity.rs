//! Record trait - common interface for the tabular record kinds

use csv::StringRecord;

use crate::core::loader::LoadError;

/// Literal token standing in for an absent numeric value
pub const NULL_SENTINEL: &str = "NULL";

/// Common trait for every record kind read from a delimited source
pub trait Record: Sized {
    /// Human-readable kind label used in diagnostics (e.g., "mechanic")
    const KIND: &'static str;

    /// Column names in source order
    const COLUMNS: &'static [&'static str];

    /// Build a record from one data row
    fn from_row(row: &Row<'_>) -> Result<Self, LoadError>;
}

/// One data row of a delimited source, with enough context to report
/// exactly where a bad value came from.
pub struct Row<'a> {
    kind: &'static str,
    columns: &'static [&'static str],
    origin: &'a str,
    line: u64,
    fields: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn new<T: Record>(origin: &'a str, line: u64, fields: &'a StringRecord) -> Self {
        Self {
            kind: T::KIND,
            columns: T::COLUMNS,
            origin,
            line,
            fields,
        }
    }

    /// 1-based line number of this row in its source
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Raw text of a column, untrimmed
    pub fn text(&self, index: usize) -> Result<&'a str, LoadError> {
        self.fields
            .get(index)
            .ok_or_else(|| LoadError::MissingColumn {
                kind: self.kind,
                origin: self.origin.to_string(),
                line: self.line,
                column: self.column_name(index),
                expected: self.columns.len(),
                found: self.fields.len(),
            })
    }

    /// Integer value of a column; whitespace around the number is allowed
    pub fn int(&self, index: usize) -> Result<i32, LoadError> {
        let value = self.text(index)?;
        value.trim().parse().map_err(|_| LoadError::InvalidInteger {
            kind: self.kind,
            origin: self.origin.to_string(),
            line: self.line,
            column: self.column_name(index),
            value: value.to_string(),
        })
    }

    /// Integer value of a column, with the `NULL` token mapped to `absent`
    pub fn int_or(&self, index: usize, absent: i32) -> Result<i32, LoadError> {
        if self.text(index)? == NULL_SENTINEL {
            Ok(absent)
        } else {
            self.int(index)
        }
    }

    fn column_name(&self, index: usize) -> &'static str {
        self.columns.get(index).copied().unwrap_or("?")
    }
}
