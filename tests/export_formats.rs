//! Tests for record export in every output format.

use chrono::NaiveDate;
use domain_traffic::export::{export_records, COLUMNS};
use domain_traffic::mock::generate_profile_at;
use domain_traffic::normalize::{normalize_mock, normalize_remote};
use domain_traffic::{NormalizedRecord, OutputFormat};
use serde_json::json;
use tempfile::TempDir;

fn records() -> Vec<NormalizedRecord> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    vec![
        normalize_mock(generate_profile_at("example.com", today)),
        normalize_remote(
            "sparse.example",
            &json!({"overview": {"title": "Sparse, \"quoted\" title"}}),
        ),
    ]
}

#[test]
fn test_json_export_preserves_nesting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    let records = records();

    assert_eq!(export_records(&records, OutputFormat::Json, &path).unwrap(), 2);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert!(array[0]["estimatedMonthlyVisits"].is_object());
    assert!(array[0]["topKeywords"].is_array());
    assert_eq!(array[0]["isDataFromGA"], false);
    assert_eq!(array[1]["domain"], "sparse.example");
    assert_eq!(array[1]["categoryRank"], "");
    assert_eq!(array[1]["countryRank"]["rank"], 0);
}

#[test]
fn test_csv_export_flattens_and_quotes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.csv");
    export_records(&records(), OutputFormat::Csv, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, COLUMNS);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);

    let col = |name: &str| COLUMNS.iter().position(|c| *c == name).unwrap();
    let visits: serde_json::Value =
        serde_json::from_str(&rows[0][col("estimatedMonthlyVisits")]).unwrap();
    assert_eq!(visits.as_object().unwrap().len(), 3);
    assert_eq!(&rows[1][col("title")], "Sparse, \"quoted\" title");
    assert_eq!(&rows[1][col("competitors")], "[]");
    assert_eq!(&rows[1][col("trafficSources")], "{}");
}

#[test]
fn test_xlsx_export_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheets/records.xlsx");
    export_records(&records(), OutputFormat::Xlsx, &path).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_xlsx_export_truncates_oversized_cells() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long.xlsx");
    let record = normalize_remote(
        "long.example",
        &json!({"meta": {"description": "x".repeat(40_000)}}),
    );
    assert_eq!(record.description.len(), 40_000);

    assert_eq!(export_records(&[record], OutputFormat::Xlsx, &path).unwrap(), 1);
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_export_rejects_empty_list() {
    let dir = TempDir::new().unwrap();
    for format in [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Xlsx] {
        let path = dir.path().join(format!("empty.{format}"));
        assert!(export_records(&[], format, &path).is_err());
        assert!(!path.exists());
    }
}
