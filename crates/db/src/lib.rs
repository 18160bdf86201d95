//! Document storage for the music catalog.
//!
//! [`DocumentStore`] is the seam between handlers and persistence. The
//! Postgres implementation keeps one JSONB table per collection; the memory
//! implementation backs tests and throwaway local runs. [`DocumentRepo`]
//! layers typed documents and reference population on top of either.

pub mod memory;
pub mod pg;
pub mod repository;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use memory::MemoryDocumentStore;
pub use pg::PgDocumentStore;
pub use repository::DocumentRepo;
pub use store::{DocumentStore, RawDocument, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations that create the collection tables.
pub async fn run_migrations(pool: &DbPool) -> Result<(), StoreError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    Ok(())
}
