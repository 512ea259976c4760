//! Error taxonomy for the subject-flattening step
//!
//! Every failure is fatal for the current object and carries the original
//! cause; the step never retries internally.

use thiserror::Error;

/// Errors surfaced by a curation run on a single object
#[derive(Error, Debug)]
pub enum CurateError {
    /// The transactional write context could not be obtained; no metadata
    /// was read or modified.
    #[error("could not obtain curation write context")]
    ContextAcquisition(#[source] curate_common::Error),

    /// An individual metadata append failed; remaining writes for the
    /// object were abandoned and nothing was committed.
    #[error("failed to append {field} value to object {object}")]
    Write {
        object: String,
        field: String,
        #[source]
        source: curate_common::Error,
    },

    /// The final persist step failed; staged writes were discarded.
    #[error("failed to commit changes to object {object}")]
    Commit {
        object: String,
        #[source]
        source: curate_common::Error,
    },

    /// A metadata read or object lookup failed.
    #[error(transparent)]
    Store(#[from] curate_common::Error),
}

impl CurateError {
    /// Render the error with its cause chain, for failure summaries.
    pub fn chain(&self) -> String {
        use std::error::Error as _;

        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}
