//! Expert registry - curated reference table of known accessibility experts
//!
//! The built-in table covers WCAG working group chairs and editors
//! (authority 5), prominent practitioners (authority 4), and academic
//! researchers (authority 3). The registry can also be loaded from an
//! external JSON table of the form `{"Name": {"authority": 4,
//! "expertise": ["aria", "testing"]}}` and extended at runtime.
//!
//! Runtime additions are single-writer: perform them before concurrent read
//! traffic begins, or guard with external mutual exclusion.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;
use shared_types::AuthorityLevel;

use crate::matching::NameMatcher;

/// Registry entry for one known expert
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertEntry {
    pub authority: AuthorityLevel,
    pub expertise: Vec<String>,
}

/// External JSON shape for a registry entry
#[derive(Debug, Deserialize)]
struct RawEntry {
    authority: u8,
    #[serde(default)]
    expertise: Vec<String>,
}

/// Reference table mapping expert names to authority and expertise
#[derive(Debug, Clone, Default)]
pub struct ExpertRegistry {
    entries: BTreeMap<String, ExpertEntry>,
}

impl ExpertRegistry {
    /// Empty registry (for tests or callers supplying their own table)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The curated built-in table
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for (name, authority, expertise) in BUILTIN_EXPERTS {
            registry.add(
                name,
                AuthorityLevel::from_value(*authority),
                expertise.iter().map(|s| s.to_string()).collect(),
            );
        }
        registry
    }

    /// Load a registry from its external JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawEntry> =
            serde_json::from_str(json).context("malformed expert registry table")?;

        let mut registry = Self::default();
        for (name, entry) in raw {
            registry.add(
                &name,
                AuthorityLevel::from_value(entry.authority),
                entry.expertise,
            );
        }
        Ok(registry)
    }

    /// Add or replace an entry. Last write wins on duplicate names.
    pub fn add(&mut self, name: &str, authority: AuthorityLevel, expertise: Vec<String>) {
        self.entries.insert(
            name.to_string(),
            ExpertEntry {
                authority,
                expertise,
            },
        );
    }

    /// Resolve a cleaned author name against the registry.
    ///
    /// Exact case-insensitive matches are preferred; fuzzy matching via the
    /// supplied strategy is the fallback.
    pub fn find(&self, name: &str, matcher: &dyn NameMatcher) -> Option<(&str, &ExpertEntry)> {
        for (expert_name, entry) in &self.entries {
            if expert_name.eq_ignore_ascii_case(name) {
                return Some((expert_name, entry));
            }
        }

        for (expert_name, entry) in &self.entries {
            if matcher.matches(name, expert_name) {
                return Some((expert_name, entry));
            }
        }

        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// (name, authority 1-5, expertise tags)
const BUILTIN_EXPERTS: &[(&str, u8, &[&str])] = &[
    // WCAG working group chairs and editors
    ("Alastair Campbell", 5, &["wcag", "usability", "cognitive"]),
    ("Michael Cooper", 5, &["wcag", "aria", "standards"]),
    ("Andrew Kirkpatrick", 5, &["wcag", "policy", "testing"]),
    ("Joshue O Connor", 5, &["wcag", "html", "advocacy"]),
    // Prominent accessibility experts
    ("Steve Faulkner", 4, &["html", "aria", "testing"]),
    ("Léonie Watson", 4, &["screen_readers", "html", "aria"]),
    ("Scott O'Hara", 4, &["aria", "forms", "navigation"]),
    ("Adrian Roselli", 4, &["forms", "tables", "testing"]),
    ("Heydon Pickering", 4, &["design_systems", "inclusive_design"]),
    ("Eric Eggert", 4, &["wcag", "tutorials", "education"]),
    ("Laura Kalbag", 4, &["design", "privacy", "ethics"]),
    ("Derek Featherstone", 4, &["testing", "training", "consulting"]),
    ("Karl Groves", 4, &["automation", "testing", "business"]),
    ("Marcy Sutton", 4, &["javascript", "react", "testing"]),
    // Academic researchers
    ("Clayton Lewis", 3, &["research", "cognitive", "design"]),
    ("Gregg Vanderheiden", 3, &["research", "standards", "technology"]),
    ("Jeffrey Bigham", 3, &["research", "ai", "crowdsourcing"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::TokenOverlapMatcher;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_table_loads() {
        let registry = ExpertRegistry::builtin();
        assert_eq!(registry.len(), 17);
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let registry = ExpertRegistry::builtin();
        let (name, entry) = registry
            .find("steve faulkner", &TokenOverlapMatcher)
            .expect("should resolve");
        assert_eq!(name, "Steve Faulkner");
        assert_eq!(entry.authority, AuthorityLevel::ExpertInterpretive);
    }

    #[test]
    fn test_fuzzy_match_with_middle_name() {
        let registry = ExpertRegistry::builtin();
        let (name, _) = registry
            .find("Adrian James Roselli", &TokenOverlapMatcher)
            .expect("should resolve");
        assert_eq!(name, "Adrian Roselli");
    }

    #[test]
    fn test_unknown_name_not_found() {
        let registry = ExpertRegistry::builtin();
        assert!(registry.find("John Nobody", &TokenOverlapMatcher).is_none());
    }

    #[test]
    fn test_from_json_external_table() {
        let json = r#"{
            "Test Expert": {"authority": 4, "expertise": ["aria"]},
            "Other Person": {"authority": 2}
        }"#;
        let registry = ExpertRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);

        let (_, entry) = registry
            .find("Test Expert", &TokenOverlapMatcher)
            .unwrap();
        assert_eq!(entry.authority, AuthorityLevel::ExpertInterpretive);
        assert_eq!(entry.expertise, vec!["aria"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_table() {
        assert!(ExpertRegistry::from_json("not json").is_err());
    }

    #[test]
    fn test_add_replaces_existing_entry() {
        let mut registry = ExpertRegistry::empty();
        registry.add("Jane Doe", AuthorityLevel::Community, vec![]);
        registry.add(
            "Jane Doe",
            AuthorityLevel::Normative,
            vec!["wcag".to_string()],
        );

        assert_eq!(registry.len(), 1);
        let (_, entry) = registry.find("Jane Doe", &TokenOverlapMatcher).unwrap();
        assert_eq!(entry.authority, AuthorityLevel::Normative);
    }
}
