// Author channel: expert recognition and institution cues
use authority_engine::AuthorityMapper;
use shared_types::{AuthorityLevel, DocumentType};

use super::{add_hit, SignalScores};

const ACADEMIC_INDICATORS: &[&str] = &["university", "college", "institute", "research", "lab"];

/// Score document types from the raw author string.
///
/// Recognized high-authority experts mostly publish interpretive blogs and
/// standards material; institutional bylines suggest papers.
pub fn analyze(authors: &str, mapper: &AuthorityMapper) -> SignalScores {
    let mut scores = SignalScores::new();

    if authors.is_empty() {
        return scores;
    }

    if let Some(level) = mapper.max_registered_authority(authors) {
        if level >= AuthorityLevel::ExpertInterpretive {
            add_hit(&mut scores, DocumentType::ExpertBlog, 0.8);
            add_hit(&mut scores, DocumentType::StandardsDocument, 0.6);
        }
    }

    let authors_lower = authors.to_lowercase();
    if ACADEMIC_INDICATORS
        .iter()
        .any(|indicator| authors_lower.contains(indicator))
    {
        add_hit(&mut scores, DocumentType::AcademicPaper, 0.5);
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_expert_boosts_blog_and_standards() {
        let mapper = AuthorityMapper::new();
        let scores = analyze("Steve Faulkner", &mapper);

        assert_eq!(scores[&DocumentType::ExpertBlog], 0.8);
        assert_eq!(scores[&DocumentType::StandardsDocument], 0.6);
    }

    #[test]
    fn test_low_authority_expert_does_not_boost() {
        let mapper = AuthorityMapper::new();
        // Registered at authority 3
        let scores = analyze("Clayton Lewis", &mapper);

        assert!(!scores.contains_key(&DocumentType::ExpertBlog));
    }

    #[test]
    fn test_institution_byline_scores_academic() {
        let mapper = AuthorityMapper::new();
        let scores = analyze("Jane Doe, University of X", &mapper);

        assert_eq!(scores[&DocumentType::AcademicPaper], 0.5);
    }

    #[test]
    fn test_empty_authors_score_nothing() {
        let mapper = AuthorityMapper::new();
        assert!(analyze("", &mapper).is_empty());
    }
}
