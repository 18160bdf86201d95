//! In-process [`DocumentStore`] used by tests and `CATALOG_STORE=memory`.
//!
//! Nothing is persisted; every collection is a vector in insertion order.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use catalog_core::document::Collection;
use catalog_core::types::DocId;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::store::{DocumentStore, RawDocument, StoreError};

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<RawDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: Collection, body: Value) -> Result<RawDocument, StoreError> {
        if !body.is_object() {
            return Err(StoreError::NotAnObject { collection });
        }
        let doc = RawDocument {
            id: DocId::new_v4(),
            body,
        };
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<RawDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocId,
    ) -> Result<Option<RawDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn find_by_ids(
        &self,
        collection: Collection,
        ids: &[DocId],
    ) -> Result<Vec<RawDocument>, StoreError> {
        let wanted: HashSet<DocId> = ids.iter().copied().collect();
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| wanted.contains(&doc.id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocId,
        set: Map<String, Value>,
    ) -> Result<Option<RawDocument>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
        else {
            return Ok(None);
        };
        let Value::Object(body) = &mut doc.body else {
            return Err(StoreError::NotAnObject { collection });
        };
        body.extend(set);
        Ok(Some(doc.clone()))
    }

    async fn delete_by_id(&self, collection: Collection, id: DocId) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        Ok(docs.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
