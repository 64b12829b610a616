// Structure channel: layout counts with fixed thresholds
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::DocumentType;

use super::{add_hit, SignalScores};

lazy_static! {
    /// Numbered section headers ("3. Results")
    static ref SECTION_HEADER: Regex = Regex::new(r"\n\s*\d+\.?\s+[A-Z]").unwrap();
    static ref BULLET_POINT: Regex = Regex::new(r"\n\s*[•\-\*]\s+").unwrap();
    static ref NUMBERED_LIST: Regex = Regex::new(r"\n\s*\d+\.\s+").unwrap();
    /// Inline citations: "[12]" or "(2021)"
    static ref CITATION: Regex = Regex::new(r"\[\d+\]|\(\d{4}\)").unwrap();
}

/// Score document types from layout counts over the raw content
pub fn analyze(content: &str) -> SignalScores {
    let mut scores = SignalScores::new();

    let section_headers = SECTION_HEADER.find_iter(content).count();
    let bullet_points = BULLET_POINT.find_iter(content).count();
    let numbered_lists = NUMBERED_LIST.find_iter(content).count();
    let citations = CITATION.find_iter(content).count();

    // Heavily cited with numbered sections reads like a paper
    if citations > 10 && section_headers > 3 {
        add_hit(&mut scores, DocumentType::AcademicPaper, 0.6);
    }

    // Formal numbered structure reads like a standard
    if section_headers > 5 && numbered_lists > 10 {
        add_hit(&mut scores, DocumentType::StandardsDocument, 0.5);
    }

    // Bullet-heavy, lightly cited text reads like a blog post
    if bullet_points > 5 && citations < 5 {
        add_hit(&mut scores, DocumentType::ExpertBlog, 0.4);
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cited_sectioned_text_scores_academic() {
        let mut content = String::new();
        for i in 1..=5 {
            content.push_str(&format!("\n{i}. Section Heading\n"));
        }
        for i in 1..=12 {
            content.push_str(&format!("as shown in [{i}] "));
        }

        let scores = analyze(&content);
        assert_eq!(scores[&DocumentType::AcademicPaper], 0.6);
    }

    #[test]
    fn test_numbered_structure_scores_standards() {
        let mut content = String::new();
        for i in 1..=7 {
            content.push_str(&format!("\n{i}. Requirement\n"));
        }
        for i in 1..=12 {
            content.push_str(&format!("\n{i}. apply the technique\n"));
        }

        let scores = analyze(&content);
        assert_eq!(scores[&DocumentType::StandardsDocument], 0.5);
    }

    #[test]
    fn test_bullets_without_citations_score_blog() {
        let mut content = String::new();
        for _ in 0..7 {
            content.push_str("\n- a practical tip\n");
        }

        let scores = analyze(&content);
        assert_eq!(scores[&DocumentType::ExpertBlog], 0.4);
    }

    #[test]
    fn test_plain_prose_scores_nothing() {
        assert!(analyze("just a short paragraph of text").is_empty());
    }
}
