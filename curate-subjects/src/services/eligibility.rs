//! Eligibility gate
//!
//! The flattening step can be pointed at an entire hierarchy (site,
//! communities, collections, items); only leaf items are processed, so the
//! gate lets the caller invoke the step uniformly without failing on
//! non-applicable objects.

use crate::models::{ObjectKind, RepositoryObject};

/// Whether an object is a candidate for subject flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    NotEligible,
}

/// Pure classification: only leaf content items are eligible.
pub fn classify(object: &RepositoryObject) -> Eligibility {
    match object.kind {
        ObjectKind::Item => Eligibility::Eligible,
        _ => Eligibility::NotEligible,
    }
}
