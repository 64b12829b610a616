//! Ontology Engine
//!
//! Concept graph for accessibility research: loads JSON schema files into a
//! [`ConceptStore`], then answers query-expansion, relationship-traversal, and
//! domain-classification questions over the graph. All lookups are
//! case-insensitive and all outputs are deterministically ordered.

pub mod concept;
pub mod domains;
pub mod store;

pub use concept::{Concept, OntologySource, RelationKind};
pub use store::{ConceptStore, OntologyError};

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Summary counters for a loaded ontology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OntologyStats {
    pub sources: usize,
    pub concepts: usize,
    pub term_mappings: usize,
}

/// High-level interface over a [`ConceptStore`].
///
/// Construction never fails: unreadable directories or malformed schema files
/// degrade to a smaller (possibly empty) graph, logged via `tracing`.
pub struct OntologyManager {
    store: ConceptStore,
    schema_dir: Option<PathBuf>,
}

impl OntologyManager {
    /// Load every `*.json` schema under `path`, in sorted filename order.
    pub fn load_dir(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        OntologyManager {
            store: ConceptStore::load_dir(path),
            schema_dir: Some(path.to_path_buf()),
        }
    }

    /// Build a manager over the compiled-in schemas.
    pub fn builtin() -> Self {
        OntologyManager {
            store: ConceptStore::builtin(),
            schema_dir: None,
        }
    }

    /// Re-read the schema directory this manager was loaded from, replacing
    /// the in-memory graph. Builtin managers rebuild from the compiled-in
    /// schemas.
    pub fn reload(&mut self) {
        self.store = match &self.schema_dir {
            Some(dir) => ConceptStore::load_dir(dir),
            None => ConceptStore::builtin(),
        };
        tracing::info!(
            concepts = self.store.concept_count(),
            terms = self.store.term_count(),
            "ontology reloaded"
        );
    }

    pub fn store(&self) -> &ConceptStore {
        &self.store
    }

    /// Expand a free-text query with up to `max_expansions` ontology terms.
    ///
    /// A concept is considered mentioned when any of its indexed terms occurs
    /// as a substring of the lowercased query, or when every word of a
    /// multi-word term appears among the query's words. Mentioned concepts
    /// contribute up to 3 synonyms, 3 related terms, and 2 subconcepts each,
    /// in concept-id order. Terms equal to a query word are skipped and
    /// duplicates keep their first position.
    pub fn expand_query_terms(&self, query: &str, max_expansions: usize) -> Vec<String> {
        let query_lower = query.to_lowercase();
        let query_words: BTreeSet<&str> = query_lower.split_whitespace().collect();

        let mut seen = BTreeSet::new();
        let mut expanded = Vec::new();
        for id in self.mentioned_concepts(&query_lower, &query_words) {
            let Some(concept) = self.store.concept(id) else {
                continue;
            };
            let candidates = concept
                .synonyms
                .iter()
                .take(3)
                .chain(concept.related_terms.iter().take(3))
                .chain(concept.subconcepts.iter().take(2));
            for term in candidates {
                let lower = term.to_lowercase();
                if query_words.contains(lower.as_str()) {
                    continue;
                }
                if seen.insert(lower) {
                    expanded.push(term.clone());
                }
            }
        }
        expanded.truncate(max_expansions);
        expanded
    }

    /// Concept ids mentioned by the query, in id order.
    fn mentioned_concepts(
        &self,
        query_lower: &str,
        query_words: &BTreeSet<&str>,
    ) -> BTreeSet<&str> {
        let mut mentioned = BTreeSet::new();
        for (term, id) in self.store.terms() {
            if query_lower.contains(term.as_str()) {
                mentioned.insert(id.as_str());
                continue;
            }
            let words: Vec<&str> = term.split_whitespace().collect();
            if words.len() > 1 && words.iter().all(|word| query_words.contains(word)) {
                mentioned.insert(id.as_str());
            }
        }
        mentioned
    }

    /// Every non-empty relation list of a concept, keyed by relation name.
    /// Unknown ids yield an empty map.
    pub fn concept_relationships(&self, concept_id: &str) -> BTreeMap<String, Vec<String>> {
        let mut relationships = BTreeMap::new();
        let Some(concept) = self.store.concept(concept_id) else {
            return relationships;
        };

        let lists: &[(&str, &[String])] = &[
            ("synonyms", &concept.synonyms),
            ("related_terms", &concept.related_terms),
            ("subconcepts", &concept.subconcepts),
            ("technologies", &concept.technologies),
            ("standards", &concept.standards),
            ("wcag_criteria", &concept.wcag_criteria),
        ];
        for (name, list) in lists {
            if !list.is_empty() {
                relationships.insert(name.to_string(), list.to_vec());
            }
        }
        if let Some(parent) = &concept.parent {
            relationships.insert("parent".to_string(), vec![parent.clone()]);
        }
        relationships
    }

    /// Terms related to `term` through the given relation kinds (defaults to
    /// synonyms, related terms, and subconcepts).
    ///
    /// Combines the forward lists of the concept the term maps to with a
    /// reverse scan for concepts that list the term, sorted and deduplicated.
    pub fn find_related_concepts(
        &self,
        term: &str,
        kinds: Option<&[RelationKind]>,
    ) -> Vec<String> {
        let kinds = kinds.unwrap_or(RelationKind::DEFAULT);
        let term_lower = term.to_lowercase();

        let mut related = BTreeSet::new();
        if let Some(id) = self.store.concept_for_term(&term_lower) {
            if let Some(concept) = self.store.concept(id) {
                for kind in kinds {
                    related.extend(concept.relation(*kind).iter().cloned());
                }
            }
        }
        for (id, concept) in self.store.concepts() {
            for kind in kinds {
                if concept
                    .relation(*kind)
                    .iter()
                    .any(|item| item.to_lowercase() == term_lower)
                {
                    related.insert(id.clone());
                }
            }
        }
        related.into_iter().collect()
    }

    /// Score each known domain against the query. Delegates to the static
    /// domain vocabulary; the loaded graph does not influence scores.
    pub fn classify_query_domain(&self, query: &str) -> Vec<(String, f32)> {
        domains::classify_query_domain(query)
    }

    /// Vocabulary of a domain: the static term list when the domain is a
    /// builtin one, otherwise the labels, synonyms, and subconcepts of every
    /// concept matching or parented by `domain`, sorted and deduplicated.
    pub fn domain_terms(&self, domain: &str) -> Vec<String> {
        if let Some(terms) = domains::builtin_domain_terms(domain) {
            return terms.iter().map(|term| term.to_string()).collect();
        }

        let mut collected = BTreeSet::new();
        for (id, concept) in self.store.concepts() {
            let in_domain = id == domain || concept.parent.as_deref() == Some(domain);
            if !in_domain {
                continue;
            }
            if !concept.label.is_empty() {
                collected.insert(concept.label.clone());
            }
            collected.extend(concept.synonyms.iter().cloned());
            collected.extend(concept.subconcepts.iter().cloned());
        }
        collected.into_iter().collect()
    }

    pub fn stats(&self) -> OntologyStats {
        OntologyStats {
            sources: self.store.source_count(),
            concepts: self.store.concept_count(),
            term_mappings: self.store.term_count(),
        }
    }

    /// Report dangling parent and subconcept references. An empty report
    /// means the graph is internally consistent.
    pub fn validate_consistency(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for (id, concept) in self.store.concepts() {
            if let Some(parent) = &concept.parent {
                if self.store.concept(parent).is_none() {
                    issues.push(format!("Concept {id} references unknown parent: {parent}"));
                }
            }
            for sub in &concept.subconcepts {
                if self.store.concept(sub).is_none() {
                    issues.push(format!("Concept {id} references unknown subconcept: {sub}"));
                }
            }
        }
        issues
    }
}

impl Default for OntologyManager {
    fn default() -> Self {
        Self::builtin()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn expansion_never_echoes_query_words(query in "\\PC*") {
            let manager = OntologyManager::builtin();
            let words: Vec<String> = query
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            for term in manager.expand_query_terms(&query, 25) {
                prop_assert!(!words.contains(&term.to_lowercase()));
            }
        }

        #[test]
        fn expansion_respects_cap(query in "\\PC*", cap in 0usize..30) {
            let manager = OntologyManager::builtin();
            prop_assert!(manager.expand_query_terms(&query, cap).len() <= cap);
        }

        #[test]
        fn domain_scores_are_normalized(query in "\\PC*") {
            let manager = OntologyManager::builtin();
            for (_, score) in manager.classify_query_domain(&query) {
                prop_assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}
