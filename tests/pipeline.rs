// tests/pipeline.rs
//
// End-to-end runs through runner::analyze_path with real and failing sinks.
//
use std::fs;
use std::path::Path;

use color_analysis::config::DbConfig;
use color_analysis::runner::{ self, AnalysisError, Persisted };
use color_analysis::stats::{ FrequencyTable, StatsError };
use color_analysis::store::{ DatabaseError, FrequencySink, SqliteStore };
use tempfile::tempdir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/week_colors.html");

/// Sink that always fails, standing in for an unreachable server.
struct Unreachable;
impl FrequencySink for Unreachable {
    fn upsert(&mut self, _table: &FrequencyTable) -> Result<usize, DatabaseError> {
        Err(DatabaseError::RemoteHost { host: "10.255.255.1".into() })
    }
}

#[test]
fn sample_report_and_storage() {
    let dir = tempdir().unwrap();
    let mut store = SqliteStore::new(DbConfig::default().with_dir(dir.path()));

    let report = runner::analyze_path(Path::new(SAMPLE), Some(&mut store)).unwrap();
    let m = &report.metrics;
    assert_eq!(m.mode, "BLUE");
    assert_eq!(m.most_worn, "BLUE");
    assert_eq!(m.median, "GREEN");
    assert!((m.variance - 68.231_404_958_677_69).abs() < 1e-9);
    assert!((m.red_probability - 9.0 / 95.0).abs() < 1e-12);
    assert!(matches!(report.persisted, Persisted::Saved(11)));

    let stored = store.load().unwrap();
    assert_eq!(stored.len(), 11);
    assert!(stored.contains(&("BLUE".to_string(), 31)));
    assert!(stored.contains(&("ASH".to_string(), 1)));
}

#[test]
fn unreachable_sink_keeps_metrics() {
    let mut sink = Unreachable;
    let report = runner::analyze_path(Path::new(SAMPLE), Some(&mut sink)).unwrap();

    assert_eq!(report.metrics.mode, "BLUE");
    assert!(matches!(report.persisted, Persisted::Failed(DatabaseError::RemoteHost { .. })));

    let mut out = Vec::new();
    runner::write_report(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("1. Mean color: BLUE"));
    assert!(text.contains("Database error:"));
}

#[test]
fn unwritable_store_directory_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"file in the way").unwrap();

    let mut store = SqliteStore::new(DbConfig::default().with_dir(blocker.join("db")));
    let report = runner::analyze_path(Path::new(SAMPLE), Some(&mut store)).unwrap();
    assert!(matches!(report.persisted, Persisted::Failed(DatabaseError::CreateDir { .. })));
}

#[test]
fn empty_document_fails_before_persisting() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("empty.html");
    fs::write(&doc, "").unwrap();

    let mut store = SqliteStore::new(DbConfig::default().with_dir(dir.path()));
    let err = runner::analyze_path(&doc, Some(&mut store)).unwrap_err();
    assert!(matches!(err, AnalysisError::Stats(StatsError::EmptySequence { .. })));
    assert!(!DbConfig::default().with_dir(dir.path()).database_path().exists());
}

#[test]
fn report_text_matches_console_layout() {
    let report = runner::analyze_path(Path::new(SAMPLE), None).unwrap();
    let mut out = Vec::new();
    runner::write_report(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Total colors extracted: 95\n"));
    assert!(text.contains(
        "Unique colors: ASH, BLACK, BLUE, BROWN, CREAM, GREEN, ORANGE, PINK, RED, WHITE, YELLOW"
    ));
    assert!(text.contains("4. Variance of colors: 68.23"));
    assert!(text.contains("5. Probability of choosing red: 0.0947 (9.47%)"));
    assert!(text.contains("6. Saving skipped"));
}
