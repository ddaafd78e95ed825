use crate::analyzers::types::{MonthlySummary, Record, YearMonth};
use crate::analyzers::utility::{mean, ratio};
use std::collections::BTreeMap;

#[derive(Default)]
struct MonthAcc {
    total_distance: f64,
    total_fuel_litres: f64,
    total_spent: f64,
    mileages: Vec<f64>,
    refill_count: usize,
}

/// Groups `records` by calendar month into [`MonthlySummary`] rows, oldest
/// month first.
///
/// Records with an unparseable date are left out. Every other record counts
/// toward its month's mileage statistics, including zero-fuel rows whose
/// mileage is the 0 sentinel. `overall_mileage` divides the month's
/// distance total by its fuel total, whereas `avg_mileage` is the plain
/// mean of record mileages.
pub fn aggregate_months(records: &[Record]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<YearMonth, MonthAcc> = BTreeMap::new();

    for record in records {
        let Some(month) = record.date.month() else {
            continue;
        };

        let acc = months.entry(month).or_default();
        acc.total_distance += record.distance;
        acc.mileages.push(record.mileage_kmpl);
        if let Some(fuel) = record.fuel_litres {
            acc.total_fuel_litres += fuel;
            acc.refill_count += 1;
        }
        if let Some(spent) = record.amount_spent {
            acc.total_spent += spent;
        }
    }

    months
        .into_iter()
        .map(|(month, acc)| MonthlySummary {
            month,
            total_distance: acc.total_distance,
            total_fuel_litres: acc.total_fuel_litres,
            total_spent: acc.total_spent,
            avg_mileage: mean(&acc.mileages),
            best_mileage: acc.mileages.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            worst_mileage: acc.mileages.iter().copied().fold(f64::INFINITY, f64::min),
            refill_count: acc.refill_count,
            overall_mileage: ratio(acc.total_distance, acc.total_fuel_litres),
        })
        .collect()
}
