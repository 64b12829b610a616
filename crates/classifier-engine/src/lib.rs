//! Classifier Engine - multi-signal document type and authority inference
//!
//! Five independent signal channels (filename, metadata, content, author,
//! structure) each produce a partial type-score map; a weighted fusion picks
//! the winning type, and the authority level is derived from recognized
//! expert authorship with per-type defaults as the fallback.
//!
//! Classification never fails: malformed or empty inputs simply contribute no
//! signal, and the designed catch-all result is `unknown` with confidence 0.

pub mod authority;
pub mod fusion;
pub mod signals;

use std::collections::BTreeMap;
use std::path::Path;

use authority_engine::AuthorityMapper;
use shared_types::ClassificationResult;

use signals::{
    SignalScores, AUTHOR_CHANNEL, CONTENT_CHANNEL, FILENAME_CHANNEL, METADATA_CHANNEL,
    STRUCTURE_CHANNEL,
};

/// Classifies documents from filename, metadata, content, and author signals
pub struct DocumentClassifier {
    mapper: AuthorityMapper,
}

impl DocumentClassifier {
    /// Classifier over the built-in expert registry
    pub fn new() -> Self {
        Self::with_mapper(AuthorityMapper::new())
    }

    /// Classifier over a caller-supplied authority mapper
    pub fn with_mapper(mapper: AuthorityMapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &AuthorityMapper {
        &self.mapper
    }

    pub fn mapper_mut(&mut self) -> &mut AuthorityMapper {
        &mut self.mapper
    }

    /// Classify one document.
    ///
    /// `filepath` is used only for its basename; `metadata` values are
    /// stringified and concatenated for keyword matching; `authors` is the
    /// raw byline. Deterministic given identical inputs and registry.
    pub fn classify(
        &self,
        filepath: &str,
        content: &str,
        metadata: &BTreeMap<String, serde_json::Value>,
        authors: &str,
    ) -> ClassificationResult {
        let filename = Path::new(filepath)
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let content_lower = content.to_lowercase();
        let metadata_text = stringify_metadata(metadata);

        let mut detected: BTreeMap<String, SignalScores> = BTreeMap::new();
        detected.insert(
            FILENAME_CHANNEL.to_string(),
            signals::filename::analyze(&filename),
        );
        detected.insert(
            METADATA_CHANNEL.to_string(),
            signals::metadata::analyze(&metadata_text),
        );
        detected.insert(
            CONTENT_CHANNEL.to_string(),
            signals::content::analyze(&content_lower),
        );
        detected.insert(
            AUTHOR_CHANNEL.to_string(),
            signals::author::analyze(authors, &self.mapper),
        );
        detected.insert(
            STRUCTURE_CHANNEL.to_string(),
            signals::structure::analyze(content),
        );

        let (document_type, confidence) = fusion::fuse(&detected);
        let authority_level = authority::derive_authority(document_type, authors, &self.mapper);
        let reasoning = fusion::build_reasoning(&detected, document_type, authority_level.as_str());

        tracing::debug!(
            "Classified {} as {} (confidence {:.2}, authority {})",
            filename,
            document_type.as_str(),
            confidence,
            authority_level.as_str()
        );

        ClassificationResult {
            document_type,
            confidence,
            authority_level,
            detected_features: detected,
            reasoning,
            classified_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Join the metadata values into one lowercased keyword-matching string.
/// String values are used verbatim; other JSON values keep their literal form.
fn stringify_metadata(metadata: &BTreeMap<String, serde_json::Value>) -> String {
    metadata
        .values()
        .map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
