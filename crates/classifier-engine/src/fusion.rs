//! Weighted fusion of channel scores into a type decision
//!
//! Every (channel, type, score) triple contributes `score x channel_weight`
//! to a running total per type. The winning type is the arg-max of the
//! totals; its value, capped at 1.0, is the reported confidence. Totals live
//! in a `BTreeMap` so ties break on the enum's declared order rather than
//! hash order.

use std::collections::BTreeMap;

use shared_types::DocumentType;

use crate::signals::{
    SignalScores, AUTHOR_CHANNEL, CONTENT_CHANNEL, FILENAME_CHANNEL, METADATA_CHANNEL,
    STRUCTURE_CHANNEL,
};

/// Fixed per-channel weights
pub const CHANNEL_WEIGHTS: &[(&str, f32)] = &[
    (FILENAME_CHANNEL, 0.2),
    (METADATA_CHANNEL, 0.3),
    (CONTENT_CHANNEL, 0.4),
    (AUTHOR_CHANNEL, 0.25),
    (STRUCTURE_CHANNEL, 0.15),
];

/// Weight for a channel; unknown channels get a nominal 0.1
pub fn channel_weight(channel: &str) -> f32 {
    CHANNEL_WEIGHTS
        .iter()
        .find(|(name, _)| *name == channel)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.1)
}

/// Fuse all channel scores into (winning type, confidence).
///
/// No scores at all yields (`Unknown`, 0.0) - the designed catch-all.
pub fn fuse(signals: &BTreeMap<String, SignalScores>) -> (DocumentType, f32) {
    let mut totals: BTreeMap<DocumentType, f32> = BTreeMap::new();

    for (channel, scores) in signals {
        let weight = channel_weight(channel);
        for (doc_type, score) in scores {
            *totals.entry(*doc_type).or_insert(0.0) += score * weight;
        }
    }

    let mut best: Option<(DocumentType, f32)> = None;
    for (doc_type, total) in totals {
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((doc_type, total)),
        }
    }

    match best {
        Some((doc_type, total)) => (doc_type, total.min(1.0)),
        None => (DocumentType::Unknown, 0.0),
    }
}

/// Human-readable explanation listing every channel whose top score is
/// meaningful (> 0.3). Diagnostic only; never used for control flow.
pub fn build_reasoning(
    signals: &BTreeMap<String, SignalScores>,
    doc_type: DocumentType,
    authority: &str,
) -> String {
    let mut reasons = Vec::new();

    for (channel, scores) in signals {
        let top = scores
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal));
        if let Some((top_type, top_score)) = top {
            if *top_score > 0.3 {
                reasons.push(format!(
                    "{channel}: {} (score: {top_score:.2})",
                    top_type.as_str()
                ));
            }
        }
    }

    format!(
        "Classified as {} (authority: {}) based on: {}",
        doc_type.as_str(),
        authority,
        reasons.join("; ")
    )
}
