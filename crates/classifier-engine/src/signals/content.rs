//! Content channel: category-specific regex pattern sets
//!
//! Patterns run against the lowercased document text. Each matched pattern
//! contributes a fixed increment to its category, capped at 1.0. Patterns use
//! `.*` within a line only (no multi-line spans), so the prose cues must
//! co-occur on one line.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::DocumentType;

use super::{add_hit, SignalScores};

struct ContentRule {
    doc_type: DocumentType,
    per_hit: f32,
    patterns: Vec<Regex>,
}

lazy_static! {
    static ref CONTENT_RULES: Vec<ContentRule> = vec![
        ContentRule {
            doc_type: DocumentType::AcademicPaper,
            per_hit: 0.15,
            patterns: vec![
                Regex::new(r"\babstract\b.*?\bkeywords\b").unwrap(),
                Regex::new(r"\bmethodology\b.*?\bresults\b").unwrap(),
                Regex::new(r"\bexperiment\b.*?\bconclusion\b").unwrap(),
                Regex::new(r"\breferences\b.*?\bcitation\b").unwrap(),
                // Statistical significance
                Regex::new(r"\bp\s*<\s*0\.\d+").unwrap(),
                // Sample size
                Regex::new(r"\bn\s*=\s*\d+").unwrap(),
            ],
        },
        ContentRule {
            doc_type: DocumentType::StandardsDocument,
            per_hit: 0.2,
            patterns: vec![
                Regex::new(r"\b(must|shall|should|may)\b.*\b(conformance|compliance)\b")
                    .unwrap(),
                Regex::new(r"\bsuccess criteri[ao]n?\b").unwrap(),
                Regex::new(r"\blevel\s+(a|aa|aaa)\b").unwrap(),
                Regex::new(r"\bnormative\b.*\binformative\b").unwrap(),
                Regex::new(r"\bthis\s+(standard|specification|recommendation)\b").unwrap(),
            ],
        },
        ContentRule {
            doc_type: DocumentType::ExpertBlog,
            per_hit: 0.2,
            patterns: vec![
                Regex::new(r"\bin this (post|article)\b").unwrap(),
                Regex::new(r"\bi (recommend|suggest|think)\b").unwrap(),
                Regex::new(r"\bbest practice\b").unwrap(),
                Regex::new(r"\btip\b.*\btrick\b").unwrap(),
                Regex::new(r"\bhow to\b.*\bstep\b").unwrap(),
            ],
        },
        ContentRule {
            doc_type: DocumentType::AuditTicket,
            per_hit: 0.2,
            patterns: vec![
                Regex::new(r"\b(violation|issue|error|warning)\b.*\b(found|detected|identified)\b")
                    .unwrap(),
                Regex::new(r"\bremediation\b.*\bsteps?\b").unwrap(),
                Regex::new(r"\bpriority\b.*\b(high|medium|low|critical)\b").unwrap(),
                Regex::new(r"\bwcag\s+\d+\.\d+\.\d+\b").unwrap(),
                Regex::new(r"\bassistive technology\b.*\b(fails?|problem)\b").unwrap(),
            ],
        },
        ContentRule {
            doc_type: DocumentType::TestingTranscript,
            per_hit: 0.2,
            patterns: vec![
                Regex::new(r"\b(user|tester)\b.*\b(said|reported|mentioned)\b").unwrap(),
                Regex::new(r"\bscreen reader\b.*\b(announced|read|spoke)\b").unwrap(),
                Regex::new(r"\bnavigation\b.*\b(successful|failed|difficult)\b").unwrap(),
                Regex::new(r"\btask\b.*\b(completed|failed|abandoned)\b").unwrap(),
                Regex::new(r"\btimestamp\b|\b\d{2}:\d{2}\b").unwrap(),
            ],
        },
    ];
}

/// Score document types from the lowercased content
pub fn analyze(content: &str) -> SignalScores {
    let mut scores = SignalScores::new();

    for rule in CONTENT_RULES.iter() {
        for pattern in &rule.patterns {
            if pattern.is_match(content) {
                add_hit(&mut scores, rule.doc_type, rule.per_hit);
            }
        }
    }

    scores
}
