use fuel_log_analyzer::analyzers::analyzer::analyze;
use fuel_log_analyzer::analyzers::types::Ratio;
use fuel_log_analyzer::config::AnalysisConfig;
use fuel_log_analyzer::error::{AnalysisError, Warning};
use fuel_log_analyzer::output::{write_monthly_csv, write_records_csv};
use fuel_log_analyzer::parser::parse_table;

const FIXTURE: &[u8] = include_bytes!("fixtures/fuel_log.csv");

#[test]
fn test_full_pipeline() {
    let table = parse_table(FIXTURE).expect("Failed to parse fixture");
    let report = analyze(&table, &AnalysisConfig::default()).expect("Failed to analyze");

    assert_eq!(report.records.len(), 8);
    assert_eq!(report.records[0].distance, 0.0);
    assert_eq!(report.records[1].distance, 210.0);
    assert_eq!(report.records[2].mileage_kmpl, 0.0);
    assert_eq!(report.extra_columns, vec!["Station".to_string()]);

    let months: Vec<String> = report
        .monthly_summaries
        .iter()
        .map(|m| m.month.to_string())
        .collect();
    assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);

    let jan = &report.monthly_summaries[0];
    assert_eq!(jan.total_distance, 400.0);
    assert_eq!(jan.total_fuel_litres, 9.5);
    assert_eq!(jan.worst_mileage, 0.0);
    assert_eq!(jan.best_mileage, 46.67);
    assert_eq!(jan.overall_mileage, Ratio::Computed(42.11));

    let mar = &report.monthly_summaries[2];
    assert_eq!(mar.total_distance, 200.0);
    assert_eq!(mar.worst_mileage, -10.0);

    assert_eq!(report.rollup.total_distance, 13300.0);
    assert_eq!(report.rollup.total_spent, 3665.0);

    assert_eq!(
        report.warnings,
        vec![
            Warning::DateParse {
                row: 5,
                value: "2024-13".into()
            },
            Warning::OdometerDecrease {
                row: 6,
                previous: 13100.0,
                current: 13060.0
            },
        ]
    );
}

#[test]
fn test_pipeline_is_idempotent() {
    let table = parse_table(FIXTURE).unwrap();
    let config = AnalysisConfig::default();
    let first = analyze(&table, &config).unwrap();
    let second = analyze(&table, &config).unwrap();
    assert_eq!(first, second);

    let mut a = Vec::new();
    let mut b = Vec::new();
    write_records_csv(&mut a, &first).unwrap();
    write_records_csv(&mut b, &second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_monthly_export_has_one_row_per_month() {
    let table = parse_table(FIXTURE).unwrap();
    let report = analyze(&table, &AnalysisConfig::default()).unwrap();
    let mut buf = Vec::new();
    write_monthly_csv(&mut buf, &report).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 4);
}

#[test]
fn test_missing_column_is_fatal() {
    let csv = b"Date,Odometer,Fuel_Litres\n2024-01,1000,2\n";
    let table = parse_table(csv).unwrap();
    match analyze(&table, &AnalysisConfig::default()) {
        Err(AnalysisError::Schema { missing, found }) => {
            assert_eq!(missing, vec!["Amount_Spent".to_string()]);
            assert_eq!(found, vec!["Date", "Odometer", "Fuel_Litres"]);
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}
