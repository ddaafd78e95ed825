//! Required-column check run before any computation.

use crate::error::{AnalysisError, Result};
use crate::table::RawTable;

pub const DATE: &str = "Date";
pub const ODOMETER: &str = "Odometer";
pub const FUEL_LITRES: &str = "Fuel_Litres";
pub const AMOUNT_SPENT: &str = "Amount_Spent";

/// Columns every fuel log must expose, matched exactly.
pub const REQUIRED_COLUMNS: [&str; 4] = [DATE, ODOMETER, FUEL_LITRES, AMOUNT_SPENT];

/// Positions of the required columns within a validated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub odometer: usize,
    pub fuel_litres: usize,
    pub amount_spent: usize,
}

/// Confirms `table` has every required column.
///
/// # Errors
///
/// Returns [`AnalysisError::Schema`] listing the missing columns (in
/// required order) and the columns actually found.
pub fn validate(table: &RawTable) -> Result<ColumnMap> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AnalysisError::Schema {
            missing,
            found: table.headers().to_vec(),
        });
    }

    let index = |name: &str| table.column_index(name).unwrap_or_default();
    Ok(ColumnMap {
        date: index(DATE),
        odometer: index(ODOMETER),
        fuel_litres: index(FUEL_LITRES),
        amount_spent: index(AMOUNT_SPENT),
    })
}
