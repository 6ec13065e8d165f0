// src/runner.rs
//! Pipeline: read → extract → normalize → statistics → persist.
//!
//! Extraction and statistics errors abort the run. A failing sink is logged and
//! recorded in the report; it never invalidates the metrics already computed.
use std::io::{ self, Write };
use std::path::{ Path, PathBuf };

use crate::core::normalize_labels;
use crate::specs::colors;
use crate::stats::{ FrequencyTable, Label, LabelSequence, Metrics, StatsError };
use crate::store::{ DatabaseError, FrequencySink };

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Outcome of the persistence step.
#[derive(Debug)]
pub enum Persisted {
    Skipped,
    Saved(usize),
    Failed(DatabaseError),
}

/// Everything one analysis run produced.
#[derive(Debug)]
pub struct Report {
    pub labels: LabelSequence,
    pub frequencies: FrequencyTable,
    pub metrics: Metrics,
    pub persisted: Persisted,
}

impl Report {
    pub fn unique(&self) -> Vec<&Label> {
        self.labels.unique_sorted()
    }
}

/// Extract and normalize, without computing anything.
pub fn load_labels(path: &Path) -> Result<LabelSequence, AnalysisError> {
    let raw = colors::extract_from_path(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_labels(&raw))
}

/// Run the statistics over `labels` and hand the frequencies to `sink`, if any.
pub fn analyze_labels(
    labels: LabelSequence,
    sink: Option<&mut dyn FrequencySink>,
) -> Result<Report, AnalysisError> {
    let metrics = Metrics::compute(&labels)?;
    let frequencies = FrequencyTable::from_labels(&labels);

    let persisted = match sink {
        None => Persisted::Skipped,
        Some(sink) => match sink.upsert(&frequencies) {
            Ok(n) => Persisted::Saved(n),
            Err(e) => {
                loge!("Database error: {e}");
                Persisted::Failed(e)
            }
        },
    };

    Ok(Report { labels, frequencies, metrics, persisted })
}

pub fn analyze_path(
    path: &Path,
    sink: Option<&mut dyn FrequencySink>,
) -> Result<Report, AnalysisError> {
    let labels = load_labels(path)?;
    logf!("Extracted {} colors from {}", labels.len(), path.display());
    analyze_labels(labels, sink)
}

/// Console rendering of a report.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let m = &report.metrics;
    let unique: Vec<&str> = report.unique().into_iter().map(Label::as_str).collect();

    writeln!(out, "Total colors extracted: {}", report.labels.len())?;
    writeln!(out, "Unique colors: {}", unique.join(", "))?;
    writeln!(out)?;
    writeln!(out, "1. Mean color: {}", m.mode)?;
    writeln!(out, "2. Most worn color: {}", m.most_worn)?;
    writeln!(out, "3. Median color: {}", m.median)?;
    writeln!(out, "4. Variance of colors: {:.2}", m.variance)?;
    writeln!(
        out,
        "5. Probability of choosing red: {:.4} ({:.2}%)",
        m.red_probability,
        m.red_probability * 100.0
    )?;
    writeln!(out)?;
    match &report.persisted {
        Persisted::Skipped => writeln!(out, "6. Saving skipped")?,
        Persisted::Saved(n) => writeln!(out, "6. Saved {n} color frequencies")?,
        Persisted::Failed(e) => writeln!(out, "6. Database error: {e}")?,
    }
    Ok(())
}
