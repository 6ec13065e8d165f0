// tests/extract_colors.rs
//
// Extraction + normalization against the bundled sample and small fixtures.
//
use std::path::Path;
use color_analysis::core::normalize_labels;
use color_analysis::labels;
use color_analysis::runner;
use color_analysis::specs::colors;
use color_analysis::stats::LabelSequence;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/week_colors.html");

#[test]
fn sample_document_yields_every_occurrence() {
    let labels = runner::load_labels(Path::new(SAMPLE)).unwrap();
    assert_eq!(labels.len(), 95);
    assert_eq!(labels[0], "GREEN");
    assert!(labels.iter().all(|l| l.as_str() != "MONDAY"));
    // typos are fixed after normalization
    assert!(labels.iter().any(|l| l == "ASH"));
    assert!(labels.iter().all(|l| l != "BLEW" && l != "ARSH"));
}

#[test]
fn misspelled_blue_is_corrected() {
    let raw = colors::extract("<tr><td>TUESDAY</td><td>BLEW, RED</td></tr>");
    assert_eq!(raw, labels!["BLEW", "RED"]);
    assert_eq!(normalize_labels(&raw), labels!["BLUE", "RED"]);
}

#[test]
fn single_label_row_gives_one_entry() {
    assert_eq!(colors::extract("<td>RED</td>"), labels!["RED"]);
    assert_eq!(
        colors::extract("<tr><td>MONDAY</td><td>RED</td></tr>"),
        labels!["RED"]
    );
}

#[test]
fn empty_document_gives_empty_sequence() {
    assert_eq!(colors::extract(""), LabelSequence::default());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = runner::load_labels(Path::new("does/not/exist.html")).unwrap_err();
    assert!(matches!(err, runner::AnalysisError::Read { .. }));
    assert!(err.to_string().contains("does/not/exist.html"));
}

#[test]
fn unknown_day_names_are_still_excluded() {
    let doc = "<tr><td>LUNDI</td><td>RED, BLUE</td></tr><tr><td>SAT</td><td>RED</td></tr>";
    assert_eq!(colors::extract(doc), labels!["RED", "BLUE", "RED"]);
    assert_eq!(
        colors::extract("<tr><td>MON</td><td>RED</td></tr>"),
        labels!["RED"]
    );
}
