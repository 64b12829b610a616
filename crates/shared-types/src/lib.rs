pub mod types;

pub use types::{AuthorProfile, AuthorityLevel, ClassificationResult, DocumentType};
