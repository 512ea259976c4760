//! Services implementing the subject-flattening curation step

pub mod eligibility;
pub mod leaf_extractor;
pub mod subject_flattener;

pub use eligibility::{classify, Eligibility};
pub use leaf_extractor::{extract_leaf, HIERARCHY_SEPARATOR};
pub use subject_flattener::{plan_writes, LeafDisposition, SubjectFlattener};
