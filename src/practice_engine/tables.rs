//! Reference charts for the "learn tables" screen.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{PracticeError, PracticeResult};

pub const LEARNABLE_TABLES: RangeInclusive<i64> = 2..=30;
const ROWS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub table: i64,
    pub multiplier: i64,
    pub result: i64,
}

impl std::fmt::Display for TableRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {} = {}", self.table, self.multiplier, self.result)
    }
}

pub fn learnable_tables() -> RangeInclusive<i64> {
    LEARNABLE_TABLES
}

/// `table × 1` through `table × 10`.
pub fn multiplication_table(table: i64) -> PracticeResult<Vec<TableRow>> {
    if !LEARNABLE_TABLES.contains(&table) {
        return Err(PracticeError::TableOutOfRange(table));
    }
    Ok((1..=ROWS)
        .map(|multiplier| TableRow { table, multiplier, result: table * multiplier })
        .collect())
}
