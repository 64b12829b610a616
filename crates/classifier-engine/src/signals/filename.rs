// Filename channel: publisher patterns, venue acronyms, type keywords
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::DocumentType;

use super::{add_hit, SignalScores};

lazy_static! {
    /// ACM DOI-style digit groups in downloaded paper filenames
    static ref ACM_DOI: Regex = Regex::new(r"\d{4}\.\d{4}\.\d{4}").unwrap();
    static ref VENUE_ACRONYMS: Regex = Regex::new(r"(ieee|acm|chi|assets|w4a)").unwrap();
    static ref STANDARDS_NAMES: Regex = Regex::new(r"(wcag|section.?508|en.?301)").unwrap();
    static ref STANDARDS_ORGS: Regex = Regex::new(r"(w3c|iso|standard|spec)").unwrap();
    static ref BLOG_KEYWORDS: Regex = Regex::new(r"(blog|post|article)").unwrap();
    static ref AUDIT_KEYWORDS: Regex = Regex::new(r"(audit|ticket|issue|violation)").unwrap();
    static ref TESTING_KEYWORDS: Regex =
        Regex::new(r"(test|transcript|recording|session)").unwrap();
}

/// Score document types from a lowercased basename
pub fn analyze(filename: &str) -> SignalScores {
    let mut scores = SignalScores::new();

    if ACM_DOI.is_match(filename) {
        add_hit(&mut scores, DocumentType::AcademicPaper, 0.8);
    }
    if VENUE_ACRONYMS.is_match(filename) {
        add_hit(&mut scores, DocumentType::AcademicPaper, 0.6);
    }

    if STANDARDS_NAMES.is_match(filename) {
        add_hit(&mut scores, DocumentType::StandardsDocument, 0.9);
    }
    if STANDARDS_ORGS.is_match(filename) {
        add_hit(&mut scores, DocumentType::StandardsDocument, 0.5);
    }

    if BLOG_KEYWORDS.is_match(filename) {
        add_hit(&mut scores, DocumentType::ExpertBlog, 0.6);
    }
    if AUDIT_KEYWORDS.is_match(filename) {
        add_hit(&mut scores, DocumentType::AuditTicket, 0.7);
    }
    if TESTING_KEYWORDS.is_match(filename) {
        add_hit(&mut scores, DocumentType::TestingTranscript, 0.6);
    }

    scores
}
