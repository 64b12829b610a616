use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node in the concept graph.
///
/// The graph formed by `parent`/`subconcepts` is forest-like but is not
/// guaranteed acyclic or consistent - dangling references are tolerated
/// everywhere and only surfaced by consistency validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Concept {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
    #[serde(default)]
    pub subconcepts: Vec<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub standards: Vec<String>,
    #[serde(default)]
    pub wcag_criteria: Vec<String>,
    /// Instance strings for technology entries (indexed as search terms)
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Relation list kinds on a concept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Synonyms,
    RelatedTerms,
    Subconcepts,
    Technologies,
    Standards,
    WcagCriteria,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Synonyms => "synonyms",
            RelationKind::RelatedTerms => "related_terms",
            RelationKind::Subconcepts => "subconcepts",
            RelationKind::Technologies => "technologies",
            RelationKind::Standards => "standards",
            RelationKind::WcagCriteria => "wcag_criteria",
        }
    }

    /// Default kinds consulted by related-concept lookups
    pub const DEFAULT: &'static [RelationKind] = &[
        RelationKind::Synonyms,
        RelationKind::RelatedTerms,
        RelationKind::Subconcepts,
    ];
}

impl Concept {
    /// The relation list for a kind
    pub fn relation(&self, kind: RelationKind) -> &[String] {
        match kind {
            RelationKind::Synonyms => &self.synonyms,
            RelationKind::RelatedTerms => &self.related_terms,
            RelationKind::Subconcepts => &self.subconcepts,
            RelationKind::Technologies => &self.technologies,
            RelationKind::Standards => &self.standards,
            RelationKind::WcagCriteria => &self.wcag_criteria,
        }
    }
}

/// On-disk shape of one ontology source file: a `concepts` namespace and an
/// optional `technologies` namespace, both keyed by id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OntologySource {
    #[serde(default)]
    pub concepts: BTreeMap<String, Concept>,
    #[serde(default)]
    pub technologies: BTreeMap<String, Concept>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_default_on_sparse_input() {
        let concept: Concept = serde_json::from_str(r#"{"label": "Screen Reader"}"#).unwrap();

        assert_eq!(concept.label, "Screen Reader");
        assert!(concept.synonyms.is_empty());
        assert!(concept.parent.is_none());
        assert!(concept.examples.is_empty());
    }

    #[test]
    fn test_source_tolerates_missing_namespaces() {
        let source: OntologySource = serde_json::from_str("{}").unwrap();
        assert!(source.concepts.is_empty());
        assert!(source.technologies.is_empty());
    }

    #[test]
    fn test_relation_accessor() {
        let concept = Concept {
            synonyms: vec!["sr".to_string()],
            ..Default::default()
        };
        assert_eq!(concept.relation(RelationKind::Synonyms), ["sr".to_string()]);
        assert!(concept.relation(RelationKind::Standards).is_empty());
    }
}
