//! Postgres-backed [`DocumentStore`]: one JSONB table per collection.

use async_trait::async_trait;
use catalog_core::document::Collection;
use catalog_core::types::DocId;
use serde_json::{Map, Value};
use sqlx::FromRow;

use crate::store::{DocumentStore, RawDocument, StoreError};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, body";

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: DocId,
    body: Value,
}

impl From<DocumentRow> for RawDocument {
    fn from(row: DocumentRow) -> Self {
        RawDocument {
            id: row.id,
            body: row.body,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: Collection, body: Value) -> Result<RawDocument, StoreError> {
        if !body.is_object() {
            return Err(StoreError::NotAnObject { collection });
        }
        let query = format!(
            "INSERT INTO {} (body) VALUES ($1) RETURNING {COLUMNS}",
            collection.table()
        );
        let row = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(&body)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<RawDocument>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM {} ORDER BY seq", collection.table());
        let rows = sqlx::query_as::<_, DocumentRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(RawDocument::from).collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocId,
    ) -> Result<Option<RawDocument>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", collection.table());
        let row = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(RawDocument::from))
    }

    async fn find_by_ids(
        &self,
        collection: Collection,
        ids: &[DocId],
    ) -> Result<Vec<RawDocument>, StoreError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE id = ANY($1) ORDER BY seq",
            collection.table()
        );
        let rows = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(RawDocument::from).collect())
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocId,
        set: Map<String, Value>,
    ) -> Result<Option<RawDocument>, StoreError> {
        // `||` on two JSONB objects replaces top-level keys from the right.
        let query = format!(
            "UPDATE {} SET body = body || $2 WHERE id = $1 RETURNING {COLUMNS}",
            collection.table()
        );
        let row = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(id)
            .bind(Value::Object(set))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(RawDocument::from))
    }

    async fn delete_by_id(&self, collection: Collection, id: DocId) -> Result<bool, StoreError> {
        let query = format!("DELETE FROM {} WHERE id = $1", collection.table());
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
