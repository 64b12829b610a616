//! Name matching strategies for expert resolution
//!
//! The default strategy is deliberately permissive token overlap: it accepts
//! "Steve Faulkner" against "Stephen Steve Faulkner" and survives middle
//! names, but it can collide on short or common names. Keeping it behind a
//! trait lets a curation pipeline swap in a stricter matcher without touching
//! the mapper contract.

/// Strategy for deciding whether a parsed author name refers to a registry name
pub trait NameMatcher: Send + Sync {
    fn matches(&self, query: &str, candidate: &str) -> bool;
}

/// Default matcher: exact case-insensitive equality, else first+last token
/// overlap checked in both directions.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenOverlapMatcher;

impl NameMatcher for TokenOverlapMatcher {
    fn matches(&self, query: &str, candidate: &str) -> bool {
        let query = query.to_lowercase();
        let candidate = candidate.to_lowercase();

        if query == candidate {
            return true;
        }

        let query_parts: Vec<&str> = query.split_whitespace().collect();
        let candidate_parts: Vec<&str> = candidate.split_whitespace().collect();

        if query_parts.len() < 2 || candidate_parts.len() < 2 {
            return false;
        }

        let first_last_in = |parts: &[&str], other: &[&str]| {
            other.contains(&parts[0]) && other.contains(parts.last().unwrap())
        };

        first_last_in(&query_parts, &candidate_parts)
            || first_last_in(&candidate_parts, &query_parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_ignores_case() {
        let matcher = TokenOverlapMatcher;
        assert!(matcher.matches("steve faulkner", "Steve Faulkner"));
    }

    #[test]
    fn test_matches_with_middle_name() {
        let matcher = TokenOverlapMatcher;
        assert!(matcher.matches("Leonie Maria Watson", "Leonie Watson"));
        assert!(matcher.matches("Leonie Watson", "Leonie Maria Watson"));
    }

    #[test]
    fn test_single_token_never_fuzzy_matches() {
        let matcher = TokenOverlapMatcher;
        assert!(!matcher.matches("Faulkner", "Steve Faulkner"));
    }

    #[test]
    fn test_rejects_different_people() {
        let matcher = TokenOverlapMatcher;
        assert!(!matcher.matches("Jane Doe", "Steve Faulkner"));
    }

    #[test]
    fn test_known_collision_risk_is_accepted() {
        // First+last overlap deliberately matches reordered names.
        let matcher = TokenOverlapMatcher;
        assert!(matcher.matches("Faulkner Steve", "Steve Faulkner"));
    }
}
