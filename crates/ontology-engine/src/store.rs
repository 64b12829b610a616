//! Concept graph store - source loading and the case-insensitive term index
//!
//! Loading is additive across sources with last-write-wins on id collision.
//! Source files are read in sorted filename order, which makes the collision
//! outcome deterministic: the lexicographically last file wins. The same
//! policy applies inside the term index, where every label, synonym, and
//! example maps to exactly one concept id.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::concept::{Concept, OntologySource};

#[derive(Debug, Error)]
pub enum OntologyError {
    #[error("failed to read ontology source {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed ontology source {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Bundled default schemas, compiled into the crate
const BUILTIN_SCHEMAS: &[(&str, &str)] = &[
    (
        "accessibility",
        include_str!("../schemas/accessibility.json"),
    ),
    (
        "technologies",
        include_str!("../schemas/technologies.json"),
    ),
];

/// Loaded concept graph plus the term index derived from it
#[derive(Debug, Clone, Default)]
pub struct ConceptStore {
    sources: usize,
    concepts: BTreeMap<String, Concept>,
    term_index: BTreeMap<String, String>,
}

impl ConceptStore {
    /// Load every `*.json` source in a directory, sorted by filename.
    ///
    /// A missing directory yields an empty store; unreadable or malformed
    /// files are skipped. Both cases emit a diagnostic and never fail - an
    /// empty graph degrades every query to its empty answer.
    pub fn load_dir(path: &Path) -> Self {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %path.display(), %error, "ontology directory unavailable, starting empty");
                return Self::default();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let mut store = Self::default();
        for file in files {
            match Self::load_file(&file) {
                Ok(source) => {
                    store.absorb(source);
                    info!(file = %file.display(), "loaded ontology source");
                }
                Err(error) => warn!(%error, "skipping ontology source"),
            }
        }
        store
    }

    /// The bundled accessibility schemas
    pub fn builtin() -> Self {
        let mut store = Self::default();
        for (name, json) in BUILTIN_SCHEMAS {
            match serde_json::from_str::<OntologySource>(json) {
                Ok(source) => store.absorb(source),
                Err(error) => warn!(schema = name, %error, "skipping bundled schema"),
            }
        }
        store
    }

    fn load_file(path: &Path) -> Result<OntologySource, OntologyError> {
        let text = fs::read_to_string(path).map_err(|source| OntologyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| OntologyError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge one source into the store, indexing as we go
    fn absorb(&mut self, source: OntologySource) {
        self.sources += 1;
        for (id, concept) in source.concepts.into_iter().chain(source.technologies) {
            self.index_terms(&id, &concept);
            self.concepts.insert(id, concept);
        }
    }

    /// Register id, label, synonyms, and examples under the term index.
    /// Later writes silently overwrite earlier ones; empty strings are never
    /// indexed (an empty term would substring-match every query).
    fn index_terms(&mut self, id: &str, concept: &Concept) {
        let mut insert = |term: &str| {
            if !term.is_empty() {
                self.term_index.insert(term.to_lowercase(), id.to_string());
            }
        };

        insert(id);
        insert(&concept.label);
        for synonym in &concept.synonyms {
            insert(synonym);
        }
        for example in &concept.examples {
            insert(example);
        }
    }

    pub fn concept(&self, id: &str) -> Option<&Concept> {
        self.concepts.get(id)
    }

    /// Look up the concept id an indexed term maps to
    pub fn concept_for_term(&self, term: &str) -> Option<&str> {
        self.term_index.get(&term.to_lowercase()).map(String::as_str)
    }

    /// All concepts, in id order
    pub fn concepts(&self) -> impl Iterator<Item = (&String, &Concept)> {
        self.concepts.iter()
    }

    /// All (term, concept id) pairs, in term order
    pub fn terms(&self) -> impl Iterator<Item = (&String, &String)> {
        self.term_index.iter()
    }

    pub fn source_count(&self) -> usize {
        self.sources
    }

    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    pub fn term_count(&self) -> usize {
        self.term_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
