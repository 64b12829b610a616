//! Authority Engine - maps authors to authority levels and expertise areas
//!
//! This crate provides:
//! - Author-string parsing (delimiters, affiliations, honorifics)
//! - An expert registry with exact and fuzzy name resolution
//! - Affiliation-tier authority inference
//! - Document-level authority aggregation
//!
//! All analysis is synchronous and pure given the loaded registry. The only
//! mutation is `add_expert`, which follows single-writer discipline: call it
//! before concurrent read traffic begins.

pub mod affiliation;
pub mod matching;
pub mod parser;
pub mod registry;

pub use matching::{NameMatcher, TokenOverlapMatcher};
pub use registry::{ExpertEntry, ExpertRegistry};

use std::collections::BTreeSet;

use shared_types::{AuthorProfile, AuthorityLevel};

/// Confidence assigned to a registry expert match
pub const EXPERT_MATCH_CONFIDENCE: f32 = 0.9;
/// Confidence assigned when only affiliation inference fires
pub const AFFILIATION_CONFIDENCE: f32 = 0.5;
/// Confidence assigned to entirely unrecognized authors
pub const UNKNOWN_CONFIDENCE: f32 = 0.1;
/// Threshold above which a profile counts as confidently resolved
pub const CONFIDENT_THRESHOLD: f32 = 0.7;

/// Resolves author strings into per-author credibility profiles
pub struct AuthorityMapper {
    registry: ExpertRegistry,
    matcher: Box<dyn NameMatcher>,
}

impl AuthorityMapper {
    /// Mapper over the built-in curated registry with the default matcher
    pub fn new() -> Self {
        Self::with_registry(ExpertRegistry::builtin())
    }

    /// Mapper over a caller-supplied registry
    pub fn with_registry(registry: ExpertRegistry) -> Self {
        Self {
            registry,
            matcher: Box::new(TokenOverlapMatcher),
        }
    }

    /// Replace the name-matching strategy
    pub fn with_matcher(mut self, matcher: Box<dyn NameMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Analyze an author string and return one profile per parsed author
    pub fn analyze_authors(&self, authors: &str) -> Vec<AuthorProfile> {
        parser::parse_authors(authors)
            .into_iter()
            .map(|author| self.analyze_single(author))
            .collect()
    }

    /// Overall authority for a document based on its authors.
    ///
    /// Returns the maximum authority level across authors and the fraction of
    /// authors that were confidently resolved. Empty input yields
    /// (`Unknown`, 0.0).
    pub fn document_authority_score(&self, authors: &str) -> (AuthorityLevel, f32) {
        let profiles = self.analyze_authors(authors);
        if profiles.is_empty() {
            return (AuthorityLevel::Unknown, 0.0);
        }

        let highest = profiles
            .iter()
            .map(|p| p.authority_level)
            .max()
            .unwrap_or(AuthorityLevel::Unknown);

        let known = profiles
            .iter()
            .filter(|p| p.confidence > CONFIDENT_THRESHOLD)
            .count();
        let confidence = (known as f32 / profiles.len() as f32).min(1.0);

        (highest, confidence)
    }

    /// All expertise areas covered by the authors, deduplicated and sorted
    pub fn expertise_areas(&self, authors: &str) -> Vec<String> {
        let areas: BTreeSet<String> = self
            .analyze_authors(authors)
            .into_iter()
            .flat_map(|p| p.expertise_areas)
            .collect();
        areas.into_iter().collect()
    }

    /// Highest registry authority among the parsed authors, if any matched.
    ///
    /// Used by the classifier's author channel and authority derivation;
    /// affiliation inference does not contribute here.
    pub fn max_registered_authority(&self, authors: &str) -> Option<AuthorityLevel> {
        parser::parse_authors(authors)
            .iter()
            .filter_map(|author| self.registry.find(&author.name, self.matcher.as_ref()))
            .map(|(_, entry)| entry.authority)
            .max()
    }

    /// Add an expert to the registry at runtime. Last write wins on
    /// duplicate names; not safe under concurrent writers.
    pub fn add_expert(&mut self, name: &str, authority: AuthorityLevel, expertise: Vec<String>) {
        self.registry.add(name, authority, expertise);
    }

    pub fn registry(&self) -> &ExpertRegistry {
        &self.registry
    }

    fn analyze_single(&self, author: parser::ParsedAuthor) -> AuthorProfile {
        if let Some((_, entry)) = self.registry.find(&author.name, self.matcher.as_ref()) {
            return AuthorProfile {
                name: author.name,
                authority_level: entry.authority,
                expertise_areas: entry.expertise.clone(),
                affiliations: author.affiliations,
                confidence: EXPERT_MATCH_CONFIDENCE,
            };
        }

        if let Some(level) = author
            .affiliations
            .iter()
            .find_map(|a| affiliation::infer_authority(a))
        {
            return AuthorProfile {
                name: author.name,
                authority_level: level,
                expertise_areas: Vec::new(),
                affiliations: author.affiliations,
                confidence: AFFILIATION_CONFIDENCE,
            };
        }

        AuthorProfile {
            name: author.name,
            authority_level: AuthorityLevel::Unknown,
            expertise_areas: Vec::new(),
            affiliations: author.affiliations,
            confidence: UNKNOWN_CONFIDENCE,
        }
    }
}

impl Default for AuthorityMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registered_expert_with_organization() {
        let mapper = AuthorityMapper::new();
        let (level, confidence) = mapper.document_authority_score("Steve Faulkner, TPG");

        assert_eq!(level, AuthorityLevel::ExpertInterpretive);
        assert!(confidence >= 0.7, "confidence was {confidence}");
    }

    #[test]
    fn test_unknown_author() {
        let mapper = AuthorityMapper::new();
        let (level, confidence) = mapper.document_authority_score("John Nobody");

        assert_eq!(level, AuthorityLevel::Unknown);
        assert!(confidence <= 0.1);
    }

    #[test]
    fn test_empty_author_string() {
        let mapper = AuthorityMapper::new();
        let (level, confidence) = mapper.document_authority_score("");

        assert_eq!(level, AuthorityLevel::Unknown);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_affiliation_only_author() {
        let mapper = AuthorityMapper::new();
        let profiles = mapper.analyze_authors("Jane Doe (University of Washington)");

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].authority_level, AuthorityLevel::PeerReviewed);
        assert_eq!(profiles[0].confidence, 0.5);
    }

    #[test]
    fn test_highest_authority_wins_across_authors() {
        let mapper = AuthorityMapper::new();
        let (level, _) =
            mapper.document_authority_score("John Nobody; Michael Cooper; Jane Doe (Google)");

        assert_eq!(level, AuthorityLevel::Normative);
    }

    #[test]
    fn test_confidence_is_fraction_of_confident_authors() {
        let mapper = AuthorityMapper::new();
        let (_, confidence) = mapper.document_authority_score("Steve Faulkner; John Nobody");

        // One confident expert out of two authors
        assert!((confidence - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_expertise_areas_sorted_and_deduplicated() {
        let mapper = AuthorityMapper::new();
        // Both experts tag "testing"
        let areas = mapper.expertise_areas("Steve Faulkner; Adrian Roselli");

        let mut sorted = areas.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(areas, sorted);
        assert!(areas.iter().any(|a| a == "testing"));
        assert_eq!(areas.iter().filter(|a| *a == "testing").count(), 1);
    }

    #[test]
    fn test_add_expert_at_runtime() {
        let mut mapper = AuthorityMapper::with_registry(ExpertRegistry::empty());
        mapper.add_expert(
            "New Expert",
            AuthorityLevel::ExpertInterpretive,
            vec!["aria".to_string()],
        );

        let (level, confidence) = mapper.document_authority_score("New Expert");
        assert_eq!(level, AuthorityLevel::ExpertInterpretive);
        assert!(confidence >= 0.7);
    }

    #[test]
    fn test_max_registered_authority_ignores_affiliations() {
        let mapper = AuthorityMapper::new();

        assert_eq!(
            mapper.max_registered_authority("Alastair Campbell"),
            Some(AuthorityLevel::Normative)
        );
        // Affiliation inference alone is not registry recognition
        assert_eq!(mapper.max_registered_authority("Jane Doe (W3C)"), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Analysis never panics on arbitrary byline text
        #[test]
        fn analyze_authors_no_panic(authors in "\\PC*") {
            let mapper = AuthorityMapper::new();
            let _ = mapper.analyze_authors(&authors);
        }

        /// Document confidence always stays within [0, 1]
        #[test]
        fn document_confidence_in_range(authors in "\\PC{0,200}") {
            let mapper = AuthorityMapper::new();
            let (_, confidence) = mapper.document_authority_score(&authors);
            prop_assert!((0.0..=1.0).contains(&confidence));
        }
    }
}
