//! Curation outcomes and per-object reports
//!
//! Each invocation of the step yields exactly one report: an outcome code
//! plus a free-text summary suitable for an operator-facing audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final status of a curation run on one object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurationStatus {
    /// Object was not a processable item; nothing was read or written
    Skip,
    /// Run completed; either new values were added or there was nothing new to add
    Success,
    /// Run aborted; no changes were committed for this object
    Failure,
}

impl CurationStatus {
    /// Stable uppercase form, matching the serialized wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            CurationStatus::Skip => "SKIP",
            CurationStatus::Success => "SUCCESS",
            CurationStatus::Failure => "FAILURE",
        }
    }
}

/// Outcome report for one curation invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationReport {
    /// Display label of the processed object (handle, or "in workflow")
    pub object: String,
    pub status: CurationStatus,
    /// Human-readable account of what happened, one line per step
    pub summary: String,
    pub finished_at: DateTime<Utc>,
}

impl CurationReport {
    pub fn new(object: impl Into<String>, status: CurationStatus, summary: String) -> Self {
        Self {
            object: object.into(),
            status,
            summary,
            finished_at: Utc::now(),
        }
    }

    pub fn skip(object: impl Into<String>, summary: String) -> Self {
        Self::new(object, CurationStatus::Skip, summary)
    }

    pub fn success(object: impl Into<String>, summary: String) -> Self {
        Self::new(object, CurationStatus::Success, summary)
    }

    pub fn failure(object: impl Into<String>, summary: String) -> Self {
        Self::new(object, CurationStatus::Failure, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&CurationStatus::Skip).unwrap();
        assert_eq!(json, "\"SKIP\"");
        let json = serde_json::to_string(&CurationStatus::Success).unwrap();
        assert_eq!(json, "\"SUCCESS\"");
    }

    #[test]
    fn status_text_form_matches_the_wire_form() {
        for status in [
            CurationStatus::Skip,
            CurationStatus::Success,
            CurationStatus::Failure,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(format!("\"{}\"", status.as_str()), wire);
        }
    }
}
