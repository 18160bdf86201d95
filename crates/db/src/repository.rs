//! Typed access to any [`DocumentStore`].
//!
//! Encodes documents and field-sets to JSON on the way in, decodes stored
//! bodies into [`Record`]s on the way out, and implements population as an
//! explicit two-step read: owning documents first, then one batch fetch of
//! every referenced document.

use std::collections::HashMap;

use catalog_core::document::{Document, Populate, Record};
use catalog_core::types::DocId;
use serde::Serialize;
use serde_json::Value;

use crate::store::{DocumentStore, RawDocument, StoreError};

/// Provides CRUD operations for every catalog document type.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a validated document, returning it with its new id.
    pub async fn create<D: Document>(
        store: &dyn DocumentStore,
        doc: &D,
    ) -> Result<Record<D>, StoreError> {
        let body = encode::<D, _>(doc)?;
        let raw = store.insert(D::COLLECTION, body).await?;
        decode(raw)
    }

    /// All documents of the collection in insertion order.
    pub async fn list<D: Document>(store: &dyn DocumentStore) -> Result<Vec<Record<D>>, StoreError> {
        store
            .find_all(D::COLLECTION)
            .await?
            .into_iter()
            .map(decode::<D>)
            .collect()
    }

    pub async fn find_by_id<D: Document>(
        store: &dyn DocumentStore,
        id: DocId,
    ) -> Result<Option<Record<D>>, StoreError> {
        store
            .find_by_id(D::COLLECTION, id)
            .await?
            .map(decode::<D>)
            .transpose()
    }

    pub async fn find_by_ids<D: Document>(
        store: &dyn DocumentStore,
        ids: &[DocId],
    ) -> Result<Vec<Record<D>>, StoreError> {
        store
            .find_by_ids(D::COLLECTION, ids)
            .await?
            .into_iter()
            .map(decode::<D>)
            .collect()
    }

    /// Apply the field-set carried by `patch`.
    ///
    /// Returns `None` if no document with the given `id` exists.
    pub async fn update<D: Document>(
        store: &dyn DocumentStore,
        id: DocId,
        patch: &D::Patch,
    ) -> Result<Option<Record<D>>, StoreError> {
        let Value::Object(set) = encode::<D, _>(patch)? else {
            return Err(StoreError::NotAnObject {
                collection: D::COLLECTION,
            });
        };
        tracing::debug!(
            collection = %D::COLLECTION,
            %id,
            fields = ?set.keys().collect::<Vec<_>>(),
            "Applying field-set"
        );
        store
            .update_by_id(D::COLLECTION, id, set)
            .await?
            .map(decode::<D>)
            .transpose()
    }

    /// Hard delete. References held by other documents are left in place.
    pub async fn delete<D: Document>(store: &dyn DocumentStore, id: DocId) -> Result<bool, StoreError> {
        store.delete_by_id(D::COLLECTION, id).await
    }

    /// List every document with its reference list expanded.
    pub async fn list_populated<D: Populate>(
        store: &dyn DocumentStore,
    ) -> Result<Vec<Record<D::Populated>>, StoreError> {
        let records = Self::list::<D>(store).await?;
        populate_all(store, records).await
    }

    pub async fn find_populated<D: Populate>(
        store: &dyn DocumentStore,
        id: DocId,
    ) -> Result<Option<Record<D::Populated>>, StoreError> {
        let Some(record) = Self::find_by_id::<D>(store, id).await? else {
            return Ok(None);
        };
        Ok(populate_all(store, vec![record]).await?.pop())
    }
}

/// Expand the references of `records` with a single batch fetch.
async fn populate_all<D: Populate>(
    store: &dyn DocumentStore,
    records: Vec<Record<D>>,
) -> Result<Vec<Record<D::Populated>>, StoreError> {
    let mut ids: Vec<DocId> = records
        .iter()
        .flat_map(|record| record.doc.references().iter().copied())
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let resolved: HashMap<DocId, Record<D::Target>> = if ids.is_empty() {
        HashMap::new()
    } else {
        DocumentRepo::find_by_ids::<D::Target>(store, &ids)
            .await?
            .into_iter()
            .map(|record| (record.id, record))
            .collect()
    };

    if resolved.len() < ids.len() {
        tracing::debug!(
            collection = %D::COLLECTION,
            missing = ids.len() - resolved.len(),
            "Skipping dangling references during populate"
        );
    }

    Ok(records
        .into_iter()
        .map(|record| record.map(|doc| doc.populate(&resolved)))
        .collect())
}

fn encode<D: Document, T: Serialize>(value: &T) -> Result<Value, StoreError> {
    serde_json::to_value(value).map_err(|source| StoreError::Encode {
        collection: D::COLLECTION,
        source,
    })
}

fn decode<D: Document>(raw: RawDocument) -> Result<Record<D>, StoreError> {
    let id = raw.id;
    serde_json::from_value(raw.body)
        .map(|doc| Record::new(id, doc))
        .map_err(|source| StoreError::Decode {
            collection: D::COLLECTION,
            id,
            source,
        })
}
