use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Document categories in the accessibility corpus
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    AcademicPaper,
    StandardsDocument,
    ExpertBlog,
    AuditTicket,
    TestingTranscript,
    Newsletter,
    JournalArticle,
    Unknown,
}

impl DocumentType {
    /// Get the document type name as stored in metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::AcademicPaper => "academic_paper",
            DocumentType::StandardsDocument => "standards_document",
            DocumentType::ExpertBlog => "expert_blog",
            DocumentType::AuditTicket => "audit_ticket",
            DocumentType::TestingTranscript => "testing_transcript",
            DocumentType::Newsletter => "newsletter",
            DocumentType::JournalArticle => "journal_article",
            DocumentType::Unknown => "unknown",
        }
    }

    /// Parse a stored type name. Legacy or unrecognized values map to
    /// `Unknown` rather than failing, so old metadata never blocks a pipeline.
    pub fn parse(s: &str) -> Self {
        match s {
            "academic_paper" => DocumentType::AcademicPaper,
            "standards_document" => DocumentType::StandardsDocument,
            "expert_blog" => DocumentType::ExpertBlog,
            "audit_ticket" => DocumentType::AuditTicket,
            "testing_transcript" => DocumentType::TestingTranscript,
            "newsletter" => DocumentType::Newsletter,
            "journal_article" => DocumentType::JournalArticle,
            _ => DocumentType::Unknown,
        }
    }
}

/// How much a document's claims should be trusted based on authorship/venue.
///
/// The numeric ordering is load-bearing: document-level aggregation takes the
/// maximum level across authors, and comparisons use the derived `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AuthorityLevel {
    /// Unclassified content
    Unknown = 0,
    /// General community content
    Community = 1,
    /// Industry best practices, audit findings
    Professional = 2,
    /// Academic papers, research
    PeerReviewed = 3,
    /// Standards authors' blogs, expert guidance
    ExpertInterpretive = 4,
    /// WCAG standards, official specifications
    Normative = 5,
}

impl AuthorityLevel {
    /// Numeric value on the 0-5 trust scale
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Convert a stored numeric level; out-of-range values map to `Unknown`
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => AuthorityLevel::Community,
            2 => AuthorityLevel::Professional,
            3 => AuthorityLevel::PeerReviewed,
            4 => AuthorityLevel::ExpertInterpretive,
            5 => AuthorityLevel::Normative,
            _ => AuthorityLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorityLevel::Unknown => "unknown",
            AuthorityLevel::Community => "community",
            AuthorityLevel::Professional => "professional",
            AuthorityLevel::PeerReviewed => "peer_reviewed",
            AuthorityLevel::ExpertInterpretive => "expert_interpretive",
            AuthorityLevel::Normative => "normative",
        }
    }
}

/// Authority profile for a single parsed author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub name: String,
    pub authority_level: AuthorityLevel,
    pub expertise_areas: Vec<String>,
    pub affiliations: Vec<String>,
    pub confidence: f32,
}

/// Result of classifying one document
///
/// `confidence` is a capped weighted score, not a probability.
/// `detected_features` maps each signal channel name to its per-type scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub document_type: DocumentType,
    pub confidence: f32,
    pub authority_level: AuthorityLevel,
    pub detected_features: BTreeMap<String, BTreeMap<DocumentType, f32>>,
    pub reasoning: String,
    pub classified_at: u64,
}
