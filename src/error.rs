//! Fatal errors and non-fatal warnings raised while analyzing a fuel log.

use serde::Serialize;
use thiserror::Error;

/// Conditions that abort the whole analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Missing required columns: {missing:?}. Found columns: {found:?}")]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error(
        "Insufficient data: {record_count} record(s) available, need more than {skip_first} to compute average mileage"
    )]
    InsufficientData {
        record_count: usize,
        skip_first: usize,
    },

    #[error("Insufficient data: no row has an odometer reading")]
    NoOdometerReading,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Per-row conditions that are reported alongside the result.
///
/// `row` is the 0-based data row index, matching the record index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    DateParse {
        row: usize,
        value: String,
    },
    OdometerDecrease {
        row: usize,
        previous: f64,
        current: f64,
    },
    MissingValue {
        row: usize,
        column: String,
    },
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

impl Warning {
    pub fn row(&self) -> usize {
        match self {
            Warning::DateParse { row, .. }
            | Warning::OdometerDecrease { row, .. }
            | Warning::MissingValue { row, .. }
            | Warning::InvalidNumber { row, .. } => *row,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::DateParse { row, value } => {
                write!(f, "row {row}: date {value:?} is not in YYYY-MM format")
            }
            Warning::OdometerDecrease {
                row,
                previous,
                current,
            } => write!(
                f,
                "row {row}: odometer went backward from {previous} to {current}"
            ),
            Warning::MissingValue { row, column } => {
                write!(f, "row {row}: {column} is empty")
            }
            Warning::InvalidNumber { row, column, value } => {
                write!(f, "row {row}: {column} value {value:?} is not a number")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_lists_columns() {
        let err = AnalysisError::Schema {
            missing: vec!["Amount_Spent".into()],
            found: vec!["Date".into(), "Odometer".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"Amount_Spent\""));
        assert!(msg.contains("\"Odometer\""));
    }

    #[test]
    fn test_warning_display_and_row() {
        let w = Warning::DateParse {
            row: 3,
            value: "Jan 2024".into(),
        };
        assert_eq!(w.row(), 3);
        assert_eq!(w.to_string(), "row 3: date \"Jan 2024\" is not in YYYY-MM format");
    }
}
