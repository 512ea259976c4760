//! Repository object model
//!
//! Object kind is a closed enum rather than runtime type inspection: the
//! curation step only cares whether the target is a leaf content item or
//! some container/site-level object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of repository object a curation run may be pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectKind {
    /// Leaf content item (the only kind the flattening step processes)
    Item,
    /// Collection of items
    Collection,
    /// Community of collections
    Community,
    /// Site root
    Site,
}

impl ObjectKind {
    /// Stable storage form, used in the objects table
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Item => "ITEM",
            ObjectKind::Collection => "COLLECTION",
            ObjectKind::Community => "COMMUNITY",
            ObjectKind::Site => "SITE",
        }
    }

    /// Parse the storage form back into a kind
    pub fn parse(s: &str) -> Option<ObjectKind> {
        match s {
            "ITEM" => Some(ObjectKind::Item),
            "COLLECTION" => Some(ObjectKind::Collection),
            "COMMUNITY" => Some(ObjectKind::Community),
            "SITE" => Some(ObjectKind::Site),
            _ => None,
        }
    }
}

/// Target of a single curation invocation
///
/// Everything about the object other than its kind and display label is
/// opaque to the curation step; metadata access goes through the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryObject {
    pub guid: Uuid,
    pub kind: ObjectKind,
    /// Public handle, if assigned. Absent for unpublished/in-workflow objects.
    pub handle: Option<String>,
}

impl RepositoryObject {
    /// Create a new object record with a fresh guid
    pub fn new(kind: ObjectKind, handle: Option<String>) -> Self {
        Self {
            guid: Uuid::new_v4(),
            kind,
            handle,
        }
    }

    /// User-facing label for reports. Objects without a handle are assumed
    /// to still be in workflow.
    pub fn display_handle(&self) -> &str {
        self.handle.as_deref().unwrap_or("in workflow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_storage_form_round_trips() {
        for kind in [
            ObjectKind::Item,
            ObjectKind::Collection,
            ObjectKind::Community,
            ObjectKind::Site,
        ] {
            assert_eq!(ObjectKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ObjectKind::parse("BUNDLE"), None);
    }

    #[test]
    fn display_handle_falls_back_for_workflow_objects() {
        let published = RepositoryObject::new(ObjectKind::Item, Some("123456789/42".to_string()));
        assert_eq!(published.display_handle(), "123456789/42");

        let in_workflow = RepositoryObject::new(ObjectKind::Item, None);
        assert_eq!(in_workflow.display_handle(), "in workflow");
    }
}
