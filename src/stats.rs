// src/stats.rs
//! Frequency statistics over a normalized label sequence.
//!
//! Every function takes the whole sequence (one entry per occurrence) and fails with
//! [`StatsError::EmptySequence`] when it is empty. Nothing here caches: each call
//! rebuilds whatever it needs from the sequence.
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::config::consts::RED;

/// A single normalized category token, e.g. `RED`.
///
/// Clones share one allocation, so tables keyed by label never copy the text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(Arc<str>);

impl Label {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self { Self(s.into()) }
}

impl From<String> for Label {
    fn from(s: String) -> Self { Self(Arc::from(s)) }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str { &self.0 }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool { &*self.0 == other }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool { &*self.0 == *other }
}

/// Labels in document order, duplicates preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSequence(Vec<Label>);

impl LabelSequence {
    pub fn push(&mut self, label: Label) {
        self.0.push(label);
    }

    pub fn into_vec(self) -> Vec<Label> {
        self.0
    }

    /// Unique labels in ascending lexical order.
    pub fn unique_sorted(&self) -> Vec<&Label> {
        let mut out: Vec<&Label> = self.0.iter().collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    fn require_non_empty(&self, statistic: &'static str) -> Result<(), StatsError> {
        if self.0.is_empty() {
            return Err(StatsError::EmptySequence { statistic });
        }
        Ok(())
    }
}

impl Deref for LabelSequence {
    type Target = [Label];
    fn deref(&self) -> &[Label] { &self.0 }
}

impl From<Vec<Label>> for LabelSequence {
    fn from(v: Vec<Label>) -> Self { Self(v) }
}

impl FromIterator<Label> for LabelSequence {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LabelSequence {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("cannot compute {statistic} of an empty label sequence")]
    EmptySequence { statistic: &'static str },
}

/// Unique label → count, iterated in first-occurrence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(Label, usize)>,
    index: HashMap<Label, usize>,
}

impl FrequencyTable {
    pub fn from_labels(seq: &LabelSequence) -> Self {
        let mut table = Self::default();
        for label in seq {
            match table.index.get(label) {
                Some(&slot) => table.entries[slot].1 += 1,
                None => {
                    table.index.insert(label.clone(), table.entries.len());
                    table.entries.push((label.clone(), 1));
                }
            }
        }
        table
    }

    pub fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, usize)> {
        self.entries.iter().map(|(l, c)| (l, *c))
    }

    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(_, c)| *c)
    }

    /// Highest count; the earliest-seen label wins ties.
    pub fn most_common(&self) -> Option<(&Label, usize)> {
        let mut best: Option<(&Label, usize)> = None;
        for (label, count) in self.iter() {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((label, count));
            }
        }
        best
    }
}

/// The most frequent label. Ties go to whichever label appears first.
pub fn mode(seq: &LabelSequence) -> Result<Label, StatsError> {
    seq.require_non_empty("mode")?;
    FrequencyTable::from_labels(seq)
        .most_common()
        .map(|(label, _)| label.clone())
        .ok_or(StatsError::EmptySequence { statistic: "mode" })
}

/// Same value as [`mode`].
pub fn most_worn(seq: &LabelSequence) -> Result<Label, StatsError> {
    mode(seq)
}

/// Lexical median of the full multiset: element `len / 2` after sorting.
pub fn median(seq: &LabelSequence) -> Result<Label, StatsError> {
    seq.require_non_empty("median")?;
    let mut sorted: Vec<&Label> = seq.iter().collect();
    sorted.sort_unstable();
    Ok(sorted[sorted.len() / 2].clone())
}

/// Population variance of the per-label counts.
pub fn frequency_variance(seq: &LabelSequence) -> Result<f64, StatsError> {
    seq.require_non_empty("frequency variance")?;
    let table = FrequencyTable::from_labels(seq);
    let n = table.len() as f64;
    let mean = table.counts().sum::<usize>() as f64 / n;
    let sq = table.counts().map(|c| (c as f64 - mean).powi(2)).sum::<f64>();
    Ok(sq / n)
}

/// Share of the sequence equal to `label`.
pub fn probability_of(seq: &LabelSequence, label: &str) -> Result<f64, StatsError> {
    seq.require_non_empty("probability")?;
    let hits = seq.iter().filter(|l| *l == label).count();
    Ok(hits as f64 / seq.len() as f64)
}

pub fn red_probability(seq: &LabelSequence) -> Result<f64, StatsError> {
    probability_of(seq, RED)
}

/// All five statistics for one sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Metrics {
    pub mode: Label,
    pub most_worn: Label,
    pub median: Label,
    pub variance: f64,
    pub red_probability: f64,
}

impl Metrics {
    pub fn compute(seq: &LabelSequence) -> Result<Self, StatsError> {
        Ok(Self {
            mode: mode(seq)?,
            most_worn: most_worn(seq)?,
            median: median(seq)?,
            variance: frequency_variance(seq)?,
            red_probability: red_probability(seq)?,
        })
    }
}
