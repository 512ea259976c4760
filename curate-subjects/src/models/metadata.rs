//! Metadata field keys and values
//!
//! Field names are fixed contract constants: hierarchical subjects live in
//! `dc.subject`, derived flat subjects in `local.subject.flat`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (schema, element, qualifier) metadata field key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataField {
    pub schema: &'static str,
    pub element: &'static str,
    pub qualifier: Option<&'static str>,
}

/// Source field: hierarchical subject classifications
pub const HIERARCHICAL_SUBJECT: MetadataField = MetadataField {
    schema: "dc",
    element: "subject",
    qualifier: None,
};

/// Target field: flat leaf-only subject terms
pub const FLAT_SUBJECT: MetadataField = MetadataField {
    schema: "local",
    element: "subject",
    qualifier: Some("flat"),
};

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.qualifier {
            Some(q) => write!(f, "{}.{}.{}", self.schema, self.element, q),
            None => write!(f, "{}.{}", self.schema, self.element),
        }
    }
}

/// A single stored metadata value
///
/// The language tag is opaque to the curation step and carried through to
/// staged writes unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataValue {
    pub value: String,
    pub language: Option<String>,
}

impl MetadataValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
        }
    }

    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
        }
    }

    /// True when the text is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_display_includes_qualifier_when_present() {
        assert_eq!(HIERARCHICAL_SUBJECT.to_string(), "dc.subject");
        assert_eq!(FLAT_SUBJECT.to_string(), "local.subject.flat");
    }

    #[test]
    fn blank_detection_trims_whitespace() {
        assert!(MetadataValue::new("").is_blank());
        assert!(MetadataValue::new("   \t").is_blank());
        assert!(!MetadataValue::new(" x ").is_blank());
    }
}
