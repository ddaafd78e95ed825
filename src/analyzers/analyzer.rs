use crate::analyzers::monthly::aggregate_months;
use crate::analyzers::normalize::normalize;
use crate::analyzers::rollup::rollup;
use crate::analyzers::schema::validate;
use crate::analyzers::types::FuelReport;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::table::RawTable;
use tracing::{debug, info, warn};

/// Runs the full pipeline over one table.
///
/// The table is only read. Row-level problems are collected in
/// [`FuelReport::warnings`]; schema and insufficient-data errors abort.
#[tracing::instrument(skip_all, fields(rows = table.len(), skip_first = config.skip_first))]
pub fn analyze(table: &RawTable, config: &AnalysisConfig) -> Result<FuelReport> {
    let columns = validate(table)?;
    debug!(?columns, "Schema validated");

    let normalized = normalize(table, &columns);
    for warning in &normalized.warnings {
        warn!(row = warning.row(), "{}", warning);
    }

    let rollup = rollup(&normalized.records, config.skip_first)?;
    let monthly_summaries = aggregate_months(&normalized.records);

    info!(
        records = normalized.records.len(),
        months = monthly_summaries.len(),
        warnings = normalized.warnings.len(),
        "Fuel log analyzed"
    );

    Ok(FuelReport {
        records: normalized.records,
        monthly_summaries,
        rollup,
        extra_columns: normalized.extra_columns,
        warnings: normalized.warnings,
    })
}
