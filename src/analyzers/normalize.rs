//! Turns validated raw rows into typed [`Record`]s with derived distance and
//! mileage.

use crate::analyzers::schema::{AMOUNT_SPENT, ColumnMap, FUEL_LITRES, ODOMETER};
use crate::analyzers::types::{RECORD_FIELDS, Record, RecordDate, YearMonth};
use crate::analyzers::utility::round2;
use crate::error::Warning;
use crate::table::RawTable;

/// Records in input order, plus the passthrough columns and row warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub records: Vec<Record>,
    pub extra_columns: Vec<String>,
    pub warnings: Vec<Warning>,
}

/// Normalizes every row of `table`.
///
/// Raw columns whose name matches a derived field (ignoring case) are
/// dropped; the derived value is always recomputed from `Odometer` and
/// `Fuel_Litres`.
pub fn normalize(table: &RawTable, columns: &ColumnMap) -> Normalized {
    let mut warnings = Vec::new();

    let extra: Vec<(usize, String)> = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(_, name)| !is_shadowed(name))
        .map(|(i, name)| (i, name.clone()))
        .collect();

    let mut records = Vec::with_capacity(table.len());
    let mut previous_odometer: Option<f64> = None;

    for row in 0..table.len() {
        let date_text = table.cell(row, columns.date);
        let date = match YearMonth::parse(date_text) {
            Some(month) => RecordDate::Month(month),
            None => {
                warnings.push(Warning::DateParse {
                    row,
                    value: date_text.to_string(),
                });
                RecordDate::Unparseable(date_text.to_string())
            }
        };

        let odometer = numeric_cell(table, row, columns.odometer, ODOMETER, &mut warnings);
        let fuel_litres = numeric_cell(table, row, columns.fuel_litres, FUEL_LITRES, &mut warnings);
        let amount_spent =
            numeric_cell(table, row, columns.amount_spent, AMOUNT_SPENT, &mut warnings);

        let distance = match (row, previous_odometer, odometer) {
            (0, _, _) => 0.0,
            (_, Some(prev), Some(cur)) => {
                if cur < prev {
                    warnings.push(Warning::OdometerDecrease {
                        row,
                        previous: prev,
                        current: cur,
                    });
                }
                cur - prev
            }
            _ => 0.0,
        };

        records.push(Record {
            date,
            odometer,
            fuel_litres,
            amount_spent,
            distance,
            mileage_kmpl: mileage(distance, fuel_litres),
            extra: extra
                .iter()
                .map(|(i, _)| table.cell(row, *i).to_string())
                .collect(),
        });

        previous_odometer = odometer;
    }

    Normalized {
        records,
        extra_columns: extra.into_iter().map(|(_, name)| name).collect(),
        warnings,
    }
}

/// `distance / fuel` rounded to 2 decimals; exactly 0 when fuel is zero or
/// absent.
pub fn mileage(distance: f64, fuel_litres: Option<f64>) -> f64 {
    match fuel_litres {
        Some(fuel) if fuel != 0.0 => round2(distance / fuel),
        _ => 0.0,
    }
}

fn is_shadowed(name: &str) -> bool {
    RECORD_FIELDS.iter().any(|f| f.eq_ignore_ascii_case(name.trim()))
}

fn numeric_cell(
    table: &RawTable,
    row: usize,
    column: usize,
    name: &str,
    warnings: &mut Vec<Warning>,
) -> Option<f64> {
    let text = table.cell(row, column).trim();
    if text.is_empty() {
        warnings.push(Warning::MissingValue {
            row,
            column: name.to_string(),
        });
        return None;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            warnings.push(Warning::InvalidNumber {
                row,
                column: name.to_string(),
                value: text.to_string(),
            });
            None
        }
    }
}
