//! The contract every catalog document implements.
//!
//! A [`Document`] knows which collection it lives in, how to build itself
//! from a validated create input, and which fields an update may touch.
//! Documents that hold reference lists additionally implement [`Populate`].

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::{DocId, Timestamp};
use crate::validation::ValidationErrors;

/// The four catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tracks,
    Albums,
    SamplePacks,
    Sounds,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Tracks,
        Collection::Albums,
        Collection::SamplePacks,
        Collection::Sounds,
    ];

    /// Public name, also used as the URL path segment.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Tracks => "tracks",
            Collection::Albums => "albums",
            Collection::SamplePacks => "samplePacks",
            Collection::Sounds => "sounds",
        }
    }

    /// Backing table name in the Postgres store.
    pub fn table(self) -> &'static str {
        match self {
            Collection::Tracks => "tracks",
            Collection::Albums => "albums",
            Collection::SamplePacks => "sample_packs",
            Collection::Sounds => "sounds",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog document stored in one collection.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// Display name used in `"<Entity> not found"` style messages.
    const ENTITY: &'static str;

    /// Request body accepted on create.
    type Create: DeserializeOwned + Send + 'static;

    /// Request body accepted on update. Serializes to the field-set: only
    /// whitelisted fields that were present in the request.
    type Patch: DeserializeOwned + Serialize + Send + Sync + 'static;

    /// Validate a create input and build the document, defaulting
    /// `releaseDate`-style fields to `now`.
    fn from_create(input: Self::Create, now: Timestamp) -> Result<Self, ValidationErrors>;

    fn validate_patch(patch: &Self::Patch) -> Result<(), ValidationErrors>;
}

/// A document together with its store-assigned identifier.
///
/// Serializes flat, with the identifier under `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<D> {
    #[serde(rename = "_id")]
    pub id: DocId,
    #[serde(flatten)]
    pub doc: D,
}

impl<D> Record<D> {
    pub fn new(id: DocId, doc: D) -> Self {
        Self { id, doc }
    }

    pub fn map<E>(self, f: impl FnOnce(D) -> E) -> Record<E> {
        Record {
            id: self.id,
            doc: f(self.doc),
        }
    }
}

/// A document whose reference list can be expanded into full documents.
pub trait Populate: Document {
    /// The referenced document type.
    type Target: Document;

    /// The document with its references replaced by [`Record`]s.
    type Populated: Serialize + Send + Sync + 'static;

    fn references(&self) -> &[DocId];

    /// Swap references for the documents found in `resolved`.
    fn populate(self, resolved: &HashMap<DocId, Record<Self::Target>>) -> Self::Populated;
}

/// Expand `ids` in order using `resolved`.
///
/// Duplicates expand as often as they appear; ids with no matching document
/// (deleted since they were referenced) are skipped.
pub fn resolve_references<T: Clone>(
    ids: &[DocId],
    resolved: &HashMap<DocId, Record<T>>,
) -> Vec<Record<T>> {
    ids.iter()
        .filter_map(|id| resolved.get(id).cloned())
        .collect()
}
