//! Signal channels - independent heuristic analyzers
//!
//! Each channel inspects one facet of a document (filename, metadata,
//! content, author, structure) and returns a partial map from document type
//! to a score in [0, 1]. Scores within a channel are additive rule hits
//! capped at 1.0 per type; channels never normalize against each other.

pub mod author;
pub mod content;
pub mod filename;
pub mod metadata;
pub mod structure;

use std::collections::BTreeMap;

use shared_types::DocumentType;

/// Partial per-type scores from one channel
pub type SignalScores = BTreeMap<DocumentType, f32>;

pub const FILENAME_CHANNEL: &str = "filename";
pub const METADATA_CHANNEL: &str = "metadata";
pub const CONTENT_CHANNEL: &str = "content";
pub const AUTHOR_CHANNEL: &str = "author";
pub const STRUCTURE_CHANNEL: &str = "structure";

/// Add a rule hit for a type, capping the accumulated score at 1.0
pub(crate) fn add_hit(scores: &mut SignalScores, doc_type: DocumentType, amount: f32) {
    let entry = scores.entry(doc_type).or_insert(0.0);
    *entry = (*entry + amount).min(1.0);
}
