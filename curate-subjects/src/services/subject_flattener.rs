//! Subject flattening engine
//!
//! Copies hierarchical subject terms from `dc.subject` to
//! `local.subject.flat` by extracting only the last node of the hierarchy.
//!
//! Example: `"Top::Mid::Leaf"` contributes the flat value `"Leaf"`. A value
//! is written at most once per object: duplicates of already-recorded flat
//! subjects, and duplicates produced within the same run, are both skipped.

use std::fmt::Write as _;

use crate::error::CurateError;
use crate::models::{
    CurationReport, MetadataValue, RepositoryObject, FLAT_SUBJECT, HIERARCHICAL_SUBJECT,
};
use crate::report::ReportSink;
use crate::services::eligibility::{classify, Eligibility};
use crate::services::leaf_extractor::extract_leaf;
use crate::store::MetadataStore;

/// Per-value result of planning a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafDisposition {
    /// Leaf is new for this object and will be written
    Staged(MetadataValue),
    /// Leaf already exists (stored, or staged earlier in the same run)
    AlreadyPresent(String),
}

/// Decide which flat values a run would write, without touching the store.
///
/// Blank subject values are dropped silently. Each remaining value is
/// reduced to its leaf node, then deduplicated by exact string equality
/// against the existing flat values and against leaves staged earlier in
/// the same plan. Input order is preserved; the language tag of the source
/// value is carried through on staged writes.
pub fn plan_writes(
    subjects: &[MetadataValue],
    existing: &[MetadataValue],
) -> Vec<LeafDisposition> {
    let mut plan = Vec::new();
    let mut staged: Vec<String> = Vec::new();

    for subject in subjects {
        if subject.is_blank() {
            continue;
        }

        let leaf = extract_leaf(&subject.value);
        tracing::debug!(leaf = %leaf, value = %subject.value, "Extracted leaf node");

        let already_has = existing.iter().any(|v| v.value == leaf)
            || staged.iter().any(|s| s == leaf);
        if already_has {
            plan.push(LeafDisposition::AlreadyPresent(leaf.to_string()));
        } else {
            staged.push(leaf.to_string());
            plan.push(LeafDisposition::Staged(MetadataValue {
                value: leaf.to_string(),
                language: subject.language.clone(),
            }));
        }
    }

    plan
}

/// Subject flattening curation step
///
/// One invocation processes one object; invocations are independent and
/// keep no state between calls.
pub struct SubjectFlattener<S: MetadataStore> {
    store: S,
}

impl<S: MetadataStore> SubjectFlattener<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run the step on one object and submit exactly one report to `sink`,
    /// including on the failure path, then propagate the error (retry is a
    /// caller policy).
    pub async fn perform_and_report(
        &self,
        object: &RepositoryObject,
        sink: &mut dyn ReportSink,
    ) -> Result<CurationReport, CurateError> {
        match self.perform(object).await {
            Ok(report) => {
                sink.submit(&report);
                Ok(report)
            }
            Err(err) => {
                let summary = format!("Error: {}\n", err.chain());
                sink.submit(&CurationReport::failure(object.display_handle(), summary));
                Err(err)
            }
        }
    }

    /// Run the step on one object.
    ///
    /// Non-items yield a SKIP report without any metadata access. Items
    /// with no hierarchical subjects, and items whose every candidate leaf
    /// already exists, both yield SUCCESS. Any store failure aborts the run;
    /// nothing is committed unless the whole update succeeds.
    pub async fn perform(
        &self,
        object: &RepositoryObject,
    ) -> Result<CurationReport, CurateError> {
        let mut summary = String::new();

        if classify(object) == Eligibility::NotEligible {
            summary.push_str("Skipping non-item object.\n");
            tracing::debug!(object = %object.display_handle(), kind = ?object.kind, "Not an item, skipping");
            return Ok(CurationReport::skip(object.display_handle(), summary));
        }

        let _ = writeln!(summary, "Item: {}", object.display_handle());

        // One transactional context per object, acquired up front; dropping
        // it on any early return discards staged writes.
        let mut ctx = self.store.begin_write().await.map_err(|e| {
            tracing::error!(object = %object.display_handle(), error = %e, "Unable to obtain write context");
            CurateError::ContextAcquisition(e)
        })?;

        let subjects = self
            .store
            .read_values(object.guid, &HIERARCHICAL_SUBJECT)
            .await?;

        if subjects.is_empty() {
            let _ = writeln!(
                summary,
                "No {} values present. Nothing to process.",
                HIERARCHICAL_SUBJECT
            );
            tracing::info!(object = %object.display_handle(), "No hierarchical subjects, nothing to process");
            return Ok(CurationReport::success(object.display_handle(), summary));
        }

        let existing = self.store.read_values(object.guid, &FLAT_SUBJECT).await?;
        let plan = plan_writes(&subjects, &existing);

        let mut modified = false;
        for disposition in &plan {
            match disposition {
                LeafDisposition::AlreadyPresent(leaf) => {
                    let _ = writeln!(summary, "   Subject '{}' already exists.", leaf);
                }
                LeafDisposition::Staged(value) => {
                    self.store
                        .append_value(&mut ctx, object.guid, &FLAT_SUBJECT, value)
                        .await
                        .map_err(|e| CurateError::Write {
                            object: object.display_handle().to_string(),
                            field: FLAT_SUBJECT.to_string(),
                            source: e,
                        })?;
                    let _ = writeln!(
                        summary,
                        "   Added '{}' to {}.",
                        value.value, FLAT_SUBJECT
                    );
                    tracing::info!(
                        object = %object.display_handle(),
                        value = %value.value,
                        "Added flat subject value"
                    );
                    modified = true;
                }
            }
        }

        if modified {
            self.store
                .commit(ctx, object.guid)
                .await
                .map_err(|e| CurateError::Commit {
                    object: object.display_handle().to_string(),
                    source: e,
                })?;
            summary.push_str("   -> Changes saved.\n");
            tracing::info!(object = %object.display_handle(), "Saved new flat subject values");
        } else {
            let _ = writeln!(summary, "No new {} values added.", FLAT_SUBJECT);
        }

        Ok(CurationReport::success(object.display_handle(), summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(texts: &[&str]) -> Vec<MetadataValue> {
        texts.iter().map(|t| MetadataValue::new(*t)).collect()
    }

    #[test]
    fn plan_stages_each_new_leaf() {
        let plan = plan_writes(&values(&["Top::Leaf1", "Top::Mid::Leaf2"]), &[]);
        assert_eq!(
            plan,
            vec![
                LeafDisposition::Staged(MetadataValue::new("Leaf1")),
                LeafDisposition::Staged(MetadataValue::new("Leaf2")),
            ]
        );
    }

    #[test]
    fn plan_skips_leaves_already_recorded() {
        let plan = plan_writes(
            &values(&["Top::Leaf1", "Top::Leaf2"]),
            &values(&["Leaf1"]),
        );
        assert_eq!(
            plan,
            vec![
                LeafDisposition::AlreadyPresent("Leaf1".to_string()),
                LeafDisposition::Staged(MetadataValue::new("Leaf2")),
            ]
        );
    }

    #[test]
    fn plan_dedups_within_the_same_run() {
        let plan = plan_writes(&values(&["A::X", "B::X"]), &[]);
        assert_eq!(
            plan,
            vec![
                LeafDisposition::Staged(MetadataValue::new("X")),
                LeafDisposition::AlreadyPresent("X".to_string()),
            ]
        );
    }

    #[test]
    fn blank_values_are_dropped_silently() {
        let plan = plan_writes(&values(&["", "   ", "Top::Leaf"]), &[]);
        assert_eq!(
            plan,
            vec![LeafDisposition::Staged(MetadataValue::new("Leaf"))]
        );
    }

    #[test]
    fn empty_input_plans_nothing() {
        assert!(plan_writes(&[], &[]).is_empty());
    }

    #[test]
    fn language_tag_is_carried_through() {
        let subjects = vec![MetadataValue::with_language("Top::Leaf", "en")];
        let plan = plan_writes(&subjects, &[]);
        assert_eq!(
            plan,
            vec![LeafDisposition::Staged(MetadataValue::with_language(
                "Leaf", "en"
            ))]
        );
    }

    #[test]
    fn flat_values_without_hierarchy_pass_through() {
        let plan = plan_writes(&values(&["  Chemistry  "]), &[]);
        assert_eq!(
            plan,
            vec![LeafDisposition::Staged(MetadataValue::new("Chemistry"))]
        );
    }

    #[test]
    fn planning_twice_over_applied_plan_stages_nothing() {
        let subjects = values(&["Top::Leaf1", "Top::Mid::Leaf2", "Leaf3"]);
        let first = plan_writes(&subjects, &[]);

        let after_first: Vec<MetadataValue> = first
            .iter()
            .filter_map(|d| match d {
                LeafDisposition::Staged(v) => Some(v.clone()),
                LeafDisposition::AlreadyPresent(_) => None,
            })
            .collect();

        let second = plan_writes(&subjects, &after_first);
        assert!(second
            .iter()
            .all(|d| matches!(d, LeafDisposition::AlreadyPresent(_))));
    }
}
