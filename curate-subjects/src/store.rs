//! Metadata store seam
//!
//! The curation step never touches persistence directly; it goes through
//! this trait. The write context is a transactional handle: acquired once
//! per object, used for every append on that object, then either committed
//! exactly once or dropped to discard all staged writes.

use crate::models::{MetadataField, MetadataValue};
use async_trait::async_trait;
use curate_common::Result;
use uuid::Uuid;

/// Host persistence boundary for metadata reads and writes
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Transactional write handle; dropping it discards staged writes.
    type WriteContext: Send;

    /// Current values for one field of one object, in storage order.
    async fn read_values(&self, object: Uuid, field: &MetadataField)
        -> Result<Vec<MetadataValue>>;

    /// Acquire the write context for a curation run.
    async fn begin_write(&self) -> Result<Self::WriteContext>;

    /// Append a new value for the given field, staged in the write context.
    async fn append_value(
        &self,
        ctx: &mut Self::WriteContext,
        object: Uuid,
        field: &MetadataField,
        value: &MetadataValue,
    ) -> Result<()>;

    /// Durably persist all staged writes for the object.
    async fn commit(&self, ctx: Self::WriteContext, object: Uuid) -> Result<()>;
}
