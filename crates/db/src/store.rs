use async_trait::async_trait;
use catalog_core::document::Collection;
use catalog_core::types::DocId;
use serde_json::{Map, Value};

/// A stored document before it is decoded into a typed model.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: DocId,
    /// Always a JSON object.
    pub body: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to encode {collection} document: {source}")]
    Encode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode {collection} document {id}: {source}")]
    Decode {
        collection: Collection,
        id: DocId,
        #[source]
        source: serde_json::Error,
    },

    #[error("{collection} document body is not a JSON object")]
    NotAnObject { collection: Collection },
}

/// Collection-oriented document storage.
///
/// Identifiers are assigned by the store on insert. Listing returns
/// documents in insertion order. `update_by_id` merges `set` into the
/// stored body key by key, leaving every other key untouched.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: Collection, body: Value) -> Result<RawDocument, StoreError>;

    async fn find_all(&self, collection: Collection) -> Result<Vec<RawDocument>, StoreError>;

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocId,
    ) -> Result<Option<RawDocument>, StoreError>;

    /// Fetch every document whose id is in `ids`, in no particular order.
    /// Unknown ids are skipped.
    async fn find_by_ids(
        &self,
        collection: Collection,
        ids: &[DocId],
    ) -> Result<Vec<RawDocument>, StoreError>;

    /// Returns `None` if no document has this id.
    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocId,
        set: Map<String, Value>,
    ) -> Result<Option<RawDocument>, StoreError>;

    /// Returns whether a document was removed.
    async fn delete_by_id(&self, collection: Collection, id: DocId) -> Result<bool, StoreError>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
