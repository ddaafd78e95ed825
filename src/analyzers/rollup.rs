use crate::analyzers::types::{Record, RollupSummary};
use crate::analyzers::utility::{mean, ratio};
use crate::error::{AnalysisError, Result};

/// Computes whole-log totals over `records`.
///
/// `average_mileage` is the mean record mileage from index `skip_first`
/// onward, leaving out the leading refills that have no real baseline.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] when there are no records or not
/// more than `skip_first` of them; [`AnalysisError::NoOdometerReading`]
/// when no record carries an odometer value.
pub fn rollup(records: &[Record], skip_first: usize) -> Result<RollupSummary> {
    if records.is_empty() || records.len() <= skip_first {
        return Err(AnalysisError::InsufficientData {
            record_count: records.len(),
            skip_first,
        });
    }

    let total_fuel_litres: f64 = records.iter().filter_map(|r| r.fuel_litres).sum();
    let total_spent: f64 = records.iter().filter_map(|r| r.amount_spent).sum();
    let total_distance = records
        .iter()
        .rev()
        .find_map(|r| r.odometer)
        .ok_or(AnalysisError::NoOdometerReading)?;

    let tail: Vec<f64> = records[skip_first..]
        .iter()
        .map(|r| r.mileage_kmpl)
        .collect();
    let travelled: f64 = records.iter().map(|r| r.distance).sum();

    Ok(RollupSummary {
        total_fuel_litres,
        total_spent,
        total_distance,
        average_mileage: mean(&tail),
        overall_mileage: ratio(travelled, total_fuel_litres),
        skip_first,
    })
}
