// Affiliation-based authority inference, used when no expert match exists

use shared_types::AuthorityLevel;

/// Standards bodies whose staff write normative material
pub const STANDARDS_BODIES: &[&str] = &["w3c", "world wide web consortium", "iso"];

/// Major tech employers with dedicated accessibility teams
pub const TECH_COMPANIES: &[&str] = &[
    "google",
    "microsoft",
    "apple",
    "mozilla",
    "adobe",
    "facebook",
    "meta",
];

/// Academic institution keywords
pub const ACADEMIC_KEYWORDS: &[&str] = &["university", "college", "institute", "research"];

/// Accessibility consultancy keywords
pub const CONSULTING_KEYWORDS: &[&str] = &[
    "accessibility",
    "usability",
    "inclusive",
    "deque",
    "tpg",
];

/// Infer an authority level from an affiliation string.
///
/// Tiers are checked in order and the first hit wins: standards bodies,
/// then big tech, then academia, then accessibility consultancies.
pub fn infer_authority(affiliation: &str) -> Option<AuthorityLevel> {
    if affiliation.is_empty() {
        return None;
    }

    let affiliation = affiliation.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| affiliation.contains(k));

    if contains_any(STANDARDS_BODIES) {
        return Some(AuthorityLevel::Normative);
    }
    if contains_any(TECH_COMPANIES) {
        return Some(AuthorityLevel::Professional);
    }
    if contains_any(ACADEMIC_KEYWORDS) {
        return Some(AuthorityLevel::PeerReviewed);
    }
    if contains_any(CONSULTING_KEYWORDS) {
        return Some(AuthorityLevel::Professional);
    }

    None
}
