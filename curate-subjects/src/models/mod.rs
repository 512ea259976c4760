//! Data models for the subject-flattening curation step

pub mod metadata;
pub mod object;
pub mod report;

pub use metadata::{MetadataField, MetadataValue, FLAT_SUBJECT, HIERARCHICAL_SUBJECT};
pub use object::{ObjectKind, RepositoryObject};
pub use report::{CurationReport, CurationStatus};
