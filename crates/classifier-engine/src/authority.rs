// Authority derivation: expert authorship first, then per-type defaults
use authority_engine::AuthorityMapper;
use shared_types::{AuthorityLevel, DocumentType};

/// Derive a document's authority level.
///
/// An authority-5 author makes the document normative only when the winning
/// type is a standards document; anywhere else the author is interpreting,
/// not legislating. Authority-4 authors are always interpretive. Without a
/// recognized expert, the document type's default applies.
pub fn derive_authority(
    doc_type: DocumentType,
    authors: &str,
    mapper: &AuthorityMapper,
) -> AuthorityLevel {
    match mapper.max_registered_authority(authors) {
        Some(AuthorityLevel::Normative) => {
            if doc_type == DocumentType::StandardsDocument {
                AuthorityLevel::Normative
            } else {
                AuthorityLevel::ExpertInterpretive
            }
        }
        Some(AuthorityLevel::ExpertInterpretive) => AuthorityLevel::ExpertInterpretive,
        _ => default_authority(doc_type),
    }
}

/// Default authority level for each document type
pub fn default_authority(doc_type: DocumentType) -> AuthorityLevel {
    match doc_type {
        DocumentType::StandardsDocument => AuthorityLevel::Normative,
        DocumentType::AcademicPaper => AuthorityLevel::PeerReviewed,
        DocumentType::ExpertBlog => AuthorityLevel::Professional,
        DocumentType::AuditTicket => AuthorityLevel::Professional,
        DocumentType::TestingTranscript => AuthorityLevel::Professional,
        DocumentType::Newsletter => AuthorityLevel::Community,
        DocumentType::JournalArticle => AuthorityLevel::PeerReviewed,
        DocumentType::Unknown => AuthorityLevel::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_five_normative_only_for_standards() {
        let mapper = AuthorityMapper::new();
        // Michael Cooper is registered at authority 5

        assert_eq!(
            derive_authority(DocumentType::StandardsDocument, "Michael Cooper", &mapper),
            AuthorityLevel::Normative
        );
        assert_eq!(
            derive_authority(DocumentType::ExpertBlog, "Michael Cooper", &mapper),
            AuthorityLevel::ExpertInterpretive
        );
    }

    #[test]
    fn test_authority_four_always_interpretive() {
        let mapper = AuthorityMapper::new();

        assert_eq!(
            derive_authority(DocumentType::StandardsDocument, "Steve Faulkner", &mapper),
            AuthorityLevel::ExpertInterpretive
        );
        assert_eq!(
            derive_authority(DocumentType::TestingTranscript, "Steve Faulkner", &mapper),
            AuthorityLevel::ExpertInterpretive
        );
    }

    #[test]
    fn test_authority_three_falls_back_to_defaults() {
        let mapper = AuthorityMapper::new();
        // Clayton Lewis is registered at authority 3

        assert_eq!(
            derive_authority(DocumentType::ExpertBlog, "Clayton Lewis", &mapper),
            AuthorityLevel::Professional
        );
    }

    #[test]
    fn test_default_table() {
        assert_eq!(
            default_authority(DocumentType::StandardsDocument),
            AuthorityLevel::Normative
        );
        assert_eq!(
            default_authority(DocumentType::AcademicPaper),
            AuthorityLevel::PeerReviewed
        );
        assert_eq!(
            default_authority(DocumentType::Newsletter),
            AuthorityLevel::Community
        );
        assert_eq!(
            default_authority(DocumentType::Unknown),
            AuthorityLevel::Unknown
        );
    }
}
