//! Data types produced by the analytics pipeline.

use crate::error::Warning;
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// Field names of the detailed record table, in export order.
pub const RECORD_FIELDS: [&str; 6] = [
    "date",
    "odometer",
    "fuel_litres",
    "amount_spent",
    "distance",
    "mileage_kmpl",
];

/// Field names of the monthly summary table, in export order.
pub const MONTHLY_FIELDS: [&str; 9] = [
    "month",
    "total_distance",
    "total_fuel_litres",
    "total_spent",
    "avg_mileage",
    "best_mileage",
    "worst_mileage",
    "refill_count",
    "overall_mileage",
];

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Parses `YYYY-MM`. Anything else, including a full date, is rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let date = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok()?;
        Some(Self {
            year: date.year(),
            month: date.month(),
        })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Month of a record, or a marker when the `Date` cell did not parse.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordDate {
    Month(YearMonth),
    Unparseable(String),
}

impl RecordDate {
    pub fn month(&self) -> Option<YearMonth> {
        match self {
            RecordDate::Month(m) => Some(*m),
            RecordDate::Unparseable(_) => None,
        }
    }
}

impl Serialize for RecordDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordDate::Month(m) => m.serialize(serializer),
            RecordDate::Unparseable(_) => serializer.serialize_none(),
        }
    }
}

/// Result of a guarded division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Computed(f64),
    NotComputable,
}

impl Ratio {
    pub fn value(self) -> Option<f64> {
        match self {
            Ratio::Computed(v) => Some(v),
            Ratio::NotComputable => None,
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ratio::Computed(v) => serializer.serialize_f64(*v),
            Ratio::NotComputable => serializer.serialize_none(),
        }
    }
}

/// One normalized refill, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub date: RecordDate,
    pub odometer: Option<f64>,
    pub fuel_litres: Option<f64>,
    pub amount_spent: Option<f64>,
    pub distance: f64,
    pub mileage_kmpl: f64,
    /// Passthrough cells, aligned with [`FuelReport::extra_columns`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

/// Statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub total_distance: f64,
    pub total_fuel_litres: f64,
    pub total_spent: f64,
    pub avg_mileage: f64,
    pub best_mileage: f64,
    pub worst_mileage: f64,
    pub refill_count: usize,
    pub overall_mileage: Ratio,
}

/// Whole-log statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupSummary {
    pub total_fuel_litres: f64,
    pub total_spent: f64,
    /// Final odometer reading.
    pub total_distance: f64,
    pub average_mileage: f64,
    pub overall_mileage: Ratio,
    pub skip_first: usize,
}

/// Everything the pipeline produces for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelReport {
    pub records: Vec<Record>,
    pub monthly_summaries: Vec<MonthlySummary>,
    pub rollup: RollupSummary,
    pub extra_columns: Vec<String>,
    pub warnings: Vec<Warning>,
}
