//! curate-subjects library interface
//!
//! Exposes the subject-flattening curation step for embedding and testing:
//! hierarchical subject values ("Top::Mid::Leaf") are reduced to their leaf
//! node and recorded as flat subject values, once per distinct leaf.

pub mod db;
pub mod error;
pub mod models;
pub mod report;
pub mod services;
pub mod store;

pub use crate::error::CurateError;
pub use crate::models::{
    CurationReport, CurationStatus, MetadataField, MetadataValue, ObjectKind, RepositoryObject,
    FLAT_SUBJECT, HIERARCHICAL_SUBJECT,
};
pub use crate::report::{CollectingReportSink, ReportSink, TracingReportSink};
pub use crate::services::{classify, extract_leaf, Eligibility, SubjectFlattener};
pub use crate::store::MetadataStore;
