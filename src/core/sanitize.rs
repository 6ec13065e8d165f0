// src/core/sanitize.rs
use crate::config::consts::CORRECTIONS;
use crate::stats::{ Label, LabelSequence };

/// Uppercase, then apply each known correction in order.
pub fn normalize_label(raw: &str) -> Label {
    let mut out = raw.to_uppercase();
    for &(typo, fix) in CORRECTIONS {
        if out.contains(typo) {
            out = out.replace(typo, fix);
        }
    }
    Label::from(out)
}

/// Normalize every label, keeping order and duplicates.
pub fn normalize_labels(seq: &LabelSequence) -> LabelSequence {
    seq.iter().map(|l| normalize_label(l.as_str())).collect()
}
