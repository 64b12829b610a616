// Author-string parsing: splitting, affiliation extraction, name cleaning
use lazy_static::lazy_static;
use regex::Regex;

use crate::affiliation;

lazy_static! {
    /// Delimiters between authors in a free-text byline
    static ref AUTHOR_SPLIT: Regex = Regex::new(r"[,;]|\sand\s|&").unwrap();

    /// "Name (Affiliation)"
    static ref PAREN_AFFILIATION: Regex = Regex::new(r"^(.+?)\s*\((.+?)\)$").unwrap();

    /// "Name, Affiliation" - kept for parity with the affiliation grammar even
    /// though commas are consumed by the split above
    static ref COMMA_AFFILIATION: Regex = Regex::new(r"^(.+?)\s*,\s*(.+?)$").unwrap();

    /// "Name - Affiliation"
    static ref DASH_AFFILIATION: Regex = Regex::new(r"^(.+?)\s*-\s*(.+?)$").unwrap();

    /// Honorific prefixes (Dr. Jane Doe)
    static ref HONORIFIC_PREFIX: Regex =
        Regex::new(r"(?i)\b(Dr|Prof|Professor|Mr|Ms|Mrs)\.?\s*").unwrap();

    /// Trailing credential suffixes (Jane Doe, PhD)
    static ref CREDENTIAL_SUFFIX: Regex =
        Regex::new(r"(?i)\s*(Jr|Sr|PhD|Ph\.D\.|MD|M\.D\.)\.?\s*$").unwrap();
}

/// One parsed author with any affiliations gathered from the byline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAuthor {
    pub name: String,
    pub affiliations: Vec<String>,
}

/// Split a free-text author string into individual parsed authors.
///
/// Splits on commas, semicolons, "&", and the word "and"; empty fragments are
/// dropped. Affiliations are taken from "Name (Affiliation)" and
/// "Name - Affiliation" forms. Because commas separate authors, a trailing
/// organization written comma-style ("Steve Faulkner, TPG") arrives as its
/// own token; tokens that are recognizable organizations are folded into the
/// preceding author's affiliations instead of being counted as authors, so
/// the document confidence reflects the fraction of actual authors resolved.
pub fn parse_authors(authors: &str) -> Vec<ParsedAuthor> {
    let mut parsed: Vec<ParsedAuthor> = Vec::new();

    for part in AUTHOR_SPLIT.split(authors) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (name, affiliation) = extract_name_and_affiliation(part);
        if name.is_empty() {
            continue;
        }

        // Bare organization fragment following an author: attach, don't emit
        if affiliation.is_none() && affiliation::infer_authority(part).is_some() {
            if let Some(previous) = parsed.last_mut() {
                previous.affiliations.push(part.to_string());
                continue;
            }
        }

        parsed.push(ParsedAuthor {
            name,
            affiliations: affiliation.into_iter().collect(),
        });
    }

    parsed
}

/// Split a single author token into (cleaned name, optional affiliation)
fn extract_name_and_affiliation(part: &str) -> (String, Option<String>) {
    for pattern in [&*PAREN_AFFILIATION, &*COMMA_AFFILIATION, &*DASH_AFFILIATION] {
        if let Some(caps) = pattern.captures(part.trim()) {
            let name = clean_name(caps.get(1).map(|m| m.as_str()).unwrap_or(""));
            let affiliation = caps
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .filter(|a| !a.is_empty());
            return (name, affiliation);
        }
    }

    (clean_name(part.trim()), None)
}

/// Strip honorifics and credential suffixes, collapse whitespace
pub fn clean_name(name: &str) -> String {
    let cleaned = HONORIFIC_PREFIX.replace_all(name, "");
    let cleaned = CREDENTIAL_SUFFIX.replace_all(&cleaned, "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_splits_on_common_delimiters() {
        let authors = parse_authors("Jane Doe; John Smith and Alice Wu & Bob Lee");
        let names: Vec<_> = authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "John Smith", "Alice Wu", "Bob Lee"]);
    }

    #[test]
    fn test_drops_empty_fragments() {
        let authors = parse_authors("Jane Doe,, ; ");
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name, "Jane Doe");
    }

    #[test]
    fn test_extracts_parenthesized_affiliation() {
        let authors = parse_authors("Jane Doe (W3C)");
        assert_eq!(authors[0].name, "Jane Doe");
        assert_eq!(authors[0].affiliations, vec!["W3C"]);
    }

    #[test]
    fn test_extracts_dash_affiliation() {
        let authors = parse_authors("Jane Doe - Deque Systems");
        assert_eq!(authors[0].name, "Jane Doe");
        assert_eq!(authors[0].affiliations, vec!["Deque Systems"]);
    }

    #[test]
    fn test_comma_style_organization_attaches_to_author() {
        let authors = parse_authors("Steve Faulkner, TPG");
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name, "Steve Faulkner");
        assert_eq!(authors[0].affiliations, vec!["TPG"]);
    }

    #[test]
    fn test_leading_organization_stays_a_token() {
        // No preceding author to attach to
        let authors = parse_authors("TPG");
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name, "TPG");
    }

    #[test]
    fn test_multiple_authors_with_organizations() {
        let authors = parse_authors("Jane Doe, University of X; John Smith (Google)");
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0].name, "Jane Doe");
        assert_eq!(authors[0].affiliations, vec!["University of X"]);
        assert_eq!(authors[1].name, "John Smith");
        assert_eq!(authors[1].affiliations, vec!["Google"]);
    }

    #[test]
    fn test_clean_name_strips_titles() {
        assert_eq!(clean_name("Dr. Jane Doe"), "Jane Doe");
        assert_eq!(clean_name("Prof Jane Doe"), "Jane Doe");
        assert_eq!(clean_name("Jane Doe PhD"), "Jane Doe");
        assert_eq!(clean_name("Jane   Doe"), "Jane Doe");
    }

    #[test]
    fn test_empty_string_yields_no_authors() {
        assert!(parse_authors("").is_empty());
        assert!(parse_authors("   ").is_empty());
    }
}
