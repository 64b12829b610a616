// Metadata channel: keyword presence in stringified metadata values
use shared_types::DocumentType;

use super::{add_hit, SignalScores};

const ACADEMIC_INDICATORS: &[&str] = &[
    "doi:",
    "abstract:",
    "keywords:",
    "acm",
    "ieee",
    "conference",
    "proceedings",
];

const STANDARDS_INDICATORS: &[&str] = &[
    "w3c",
    "iso",
    "standard",
    "specification",
    "recommendation",
];

const BLOG_INDICATORS: &[&str] = &["blog", "post", "article", "medium", "dev.to"];

/// Score document types from the concatenated, lowercased metadata values
pub fn analyze(metadata_text: &str) -> SignalScores {
    let mut scores = SignalScores::new();

    for indicator in ACADEMIC_INDICATORS {
        if metadata_text.contains(indicator) {
            add_hit(&mut scores, DocumentType::AcademicPaper, 0.2);
        }
    }
    for indicator in STANDARDS_INDICATORS {
        if metadata_text.contains(indicator) {
            add_hit(&mut scores, DocumentType::StandardsDocument, 0.3);
        }
    }
    for indicator in BLOG_INDICATORS {
        if metadata_text.contains(indicator) {
            add_hit(&mut scores, DocumentType::ExpertBlog, 0.3);
        }
    }

    scores
}
