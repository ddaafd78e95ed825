//! Output formatting and persistence for fuel reports.
//!
//! Writes the detailed record table and the monthly summary table as CSV,
//! and renders the whole report as JSON.

use anyhow::Result;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use tracing::{debug, info};

use crate::analyzers::types::{FuelReport, MONTHLY_FIELDS, RECORD_FIELDS, RecordDate};

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes one row per record: the derived fields, then passthrough columns.
pub fn write_records_csv<W: Write>(writer: W, report: &FuelReport) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    let mut header: Vec<&str> = RECORD_FIELDS.to_vec();
    header.extend(report.extra_columns.iter().map(String::as_str));
    wtr.write_record(&header)?;

    for record in &report.records {
        let date = match &record.date {
            RecordDate::Month(m) => m.to_string(),
            RecordDate::Unparseable(_) => String::new(),
        };
        let mut row = vec![
            date,
            opt(record.odometer),
            opt(record.fuel_litres),
            opt(record.amount_spent),
            record.distance.to_string(),
            record.mileage_kmpl.to_string(),
        ];
        row.extend(record.extra.iter().cloned());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes one row per month, oldest first. `NotComputable` is an empty cell.
pub fn write_monthly_csv<W: Write>(writer: W, report: &FuelReport) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(MONTHLY_FIELDS)?;

    for m in &report.monthly_summaries {
        wtr.write_record([
            m.month.to_string(),
            m.total_distance.to_string(),
            m.total_fuel_litres.to_string(),
            m.total_spent.to_string(),
            m.avg_mileage.to_string(),
            m.best_mileage.to_string(),
            m.worst_mileage.to_string(),
            m.refill_count.to_string(),
            opt(m.overall_mileage.value()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the detailed record table to `path`, replacing any existing file.
pub fn export_records(path: &str, report: &FuelReport) -> Result<()> {
    debug!(path, rows = report.records.len(), "Writing detailed log CSV");
    write_records_csv(File::create(path)?, report)?;
    info!(path, "Detailed log written");
    Ok(())
}

/// Writes the monthly summary table to `path`, replacing any existing file.
pub fn export_monthly(path: &str, report: &FuelReport) -> Result<()> {
    debug!(
        path,
        rows = report.monthly_summaries.len(),
        "Writing monthly summary CSV"
    );
    write_monthly_csv(File::create(path)?, report)?;
    info!(path, "Monthly summary written");
    Ok(())
}

/// Renders the report as pretty-printed JSON.
pub fn to_json(report: &FuelReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::analyzer::analyze;
    use crate::config::AnalysisConfig;
    use crate::table::RawTable;
    use std::fs;

    fn report() -> FuelReport {
        let rows = [
            ["2024-01", "1000", "2.0", "200", "Shell"],
            ["bad", "1050", "1.5", "160", "BP"],
            ["2024-01", "1100", "0", "0", ""],
            ["2024-02", "1150", "2.5", "260", "Shell"],
        ];
        let table = RawTable::new(
            ["Date", "Odometer", "Fuel_Litres", "Amount_Spent", "Station"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        );
        analyze(&table, &AnalysisConfig::default()).unwrap()
    }

    fn render<F: Fn(&mut Vec<u8>, &FuelReport) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf, &report()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_records_csv_layout() {
        let csv = render(|w, r| write_records_csv(w, r));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "date,odometer,fuel_litres,amount_spent,distance,mileage_kmpl,Station"
        );
        assert_eq!(lines[1], "2024-01,1000,2,200,0,0,Shell");
        assert_eq!(lines[2], ",1050,1.5,160,50,33.33,BP");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_monthly_csv_layout() {
        let csv = render(|w, r| write_monthly_csv(w, r));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "month,total_distance,total_fuel_litres,total_spent,avg_mileage,best_mileage,worst_mileage,refill_count,overall_mileage"
        );
        assert_eq!(lines[1], "2024-01,50,2,200,0,0,0,2,25");
        assert_eq!(lines[2], "2024-02,50,2.5,260,20,20,20,1,20");
    }

    #[test]
    fn test_not_computable_exports_empty_cell() {
        let table = RawTable::new(
            vec![
                "Date".into(),
                "Odometer".into(),
                "Fuel_Litres".into(),
                "Amount_Spent".into(),
            ],
            vec![vec!["2024-03".into(), "10".into(), "0".into(), "0".into()]],
        );
        let report = analyze(&table, &AnalysisConfig::new(0)).unwrap();
        let mut buf = Vec::new();
        write_monthly_csv(&mut buf, &report).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert_eq!(csv.lines().nth(1), Some("2024-03,0,0,0,0,0,0,1,"));
    }

    #[test]
    fn test_export_files() {
        let dir = tempfile::tempdir().unwrap();
        let details = dir.path().join("fuel_log_detailed.csv");
        let monthly = dir.path().join("fuel_log_monthly.csv");
        let report = report();

        export_records(details.to_str().unwrap(), &report).unwrap();
        export_monthly(monthly.to_str().unwrap(), &report).unwrap();

        assert_eq!(fs::read_to_string(&details).unwrap().lines().count(), 5);
        assert_eq!(fs::read_to_string(&monthly).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_to_json_includes_bundle_sections() {
        let json = to_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["records"].as_array().unwrap().len(), 4);
        assert_eq!(value["records"][1]["date"], serde_json::Value::Null);
        assert_eq!(value["monthly_summaries"][0]["month"], "2024-01");
        assert_eq!(value["rollup"]["total_distance"], 1150.0);
        assert_eq!(value["warnings"][0]["kind"], "date_parse");
    }
}
