// Fixed domain term tables for query domain classification

/// Accessibility domains and their indicator terms
pub const ACCESSIBILITY_DOMAINS: &[(&str, &[&str])] = &[
    (
        "visual",
        &[
            "blindness",
            "low_vision",
            "color_blindness",
            "photosensitivity",
            "screen_reader",
            "magnification",
            "high_contrast",
        ],
    ),
    (
        "motor",
        &[
            "limited_fine_motor",
            "tremor",
            "paralysis",
            "switch_navigation",
            "keyboard_only",
            "voice_control",
            "eye_tracking",
        ],
    ),
    (
        "cognitive",
        &[
            "dyslexia",
            "adhd",
            "memory_issues",
            "processing_disorders",
            "autism",
            "learning_disabilities",
            "cognitive_load",
        ],
    ),
    (
        "auditory",
        &[
            "deafness",
            "hard_of_hearing",
            "auditory_processing",
            "captions",
            "transcripts",
            "sign_language",
        ],
    ),
];

/// Technology domains and their indicator terms
pub const TECHNOLOGY_DOMAINS: &[(&str, &[&str])] = &[
    (
        "html",
        &[
            "semantic_elements",
            "forms",
            "tables",
            "images",
            "landmarks",
            "headings",
            "lists",
            "links",
            "buttons",
        ],
    ),
    (
        "aria",
        &[
            "roles",
            "properties",
            "states",
            "live_regions",
            "labels",
            "descriptions",
            "controls",
            "expanded",
            "hidden",
        ],
    ),
    (
        "css",
        &[
            "focus_indicators",
            "responsive_design",
            "animations",
            "transforms",
            "visibility",
            "color_contrast",
            "typography",
            "layout",
        ],
    ),
    (
        "javascript",
        &[
            "dynamic_content",
            "spa_navigation",
            "event_handling",
            "ajax",
            "progressive_enhancement",
            "frameworks",
            "libraries",
        ],
    ),
];

/// Terms for a built-in domain, if it exists
pub fn builtin_domain_terms(domain: &str) -> Option<&'static [&'static str]> {
    ACCESSIBILITY_DOMAINS
        .iter()
        .chain(TECHNOLOGY_DOMAINS)
        .find(|(name, _)| *name == domain)
        .map(|(_, terms)| *terms)
}

/// Score every domain against a lowercased query.
///
/// Score = matched terms / table size. Zero-score domains are excluded;
/// technology domains report as `tech_<name>`. Output is sorted descending
/// by score with name as the tiebreak.
pub fn classify_query_domain(query: &str) -> Vec<(String, f32)> {
    let query = query.to_lowercase();
    let mut scored = Vec::new();

    for (domain, terms) in ACCESSIBILITY_DOMAINS {
        let hits = terms.iter().filter(|term| query.contains(*term)).count();
        if hits > 0 {
            scored.push((domain.to_string(), hits as f32 / terms.len() as f32));
        }
    }
    for (domain, terms) in TECHNOLOGY_DOMAINS {
        let hits = terms.iter().filter(|term| query.contains(*term)).count();
        if hits > 0 {
            scored.push((format!("tech_{domain}"), hits as f32 / terms.len() as f32));
        }
    }

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored
}
