//! Albums: priced bundles holding an ordered list of track references.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::{resolve_references, Collection, Document, Populate, Record};
use crate::models::track::Track;
use crate::types::{DocId, Timestamp};
use crate::validation::{reject_empty_text, require, require_text, ValidationErrors};

/// An album whose `tracks` are either stored ids (`T = DocId`) or, once
/// populated, full track records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album<T = DocId> {
    pub title: String,
    pub artist: String,
    pub release_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub price: f64,
    #[serde(default = "Vec::new")]
    pub tracks: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_path: Option<String>,
}

/// An album as returned by list and get-one.
pub type PopulatedAlbum = Album<Record<Track>>;

/// Body of `POST /api/albums`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbum {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub release_date: Option<Timestamp>,
    pub genre: Option<String>,
    pub price: Option<f64>,
    pub tracks: Option<Vec<DocId>>,
    pub artwork_path: Option<String>,
}

/// Body of `PUT /api/albums/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<DocId>>,
}

impl Document for Album {
    const COLLECTION: Collection = Collection::Albums;
    const ENTITY: &'static str = "Album";

    type Create = CreateAlbum;
    type Patch = UpdateAlbum;

    fn from_create(input: CreateAlbum, now: Timestamp) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = require_text(&mut errors, "title", input.title);
        let artist = require_text(&mut errors, "artist", input.artist);
        let price = require(&mut errors, "price", input.price);

        match (title, artist, price) {
            (Some(title), Some(artist), Some(price)) => Ok(Album {
                title,
                artist,
                release_date: input.release_date.unwrap_or(now),
                genre: input.genre,
                price,
                tracks: input.tracks.unwrap_or_default(),
                artwork_path: input.artwork_path,
            }),
            _ => Err(errors),
        }
    }

    fn validate_patch(patch: &UpdateAlbum) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        reject_empty_text(&mut errors, "title", patch.title.as_deref());
        reject_empty_text(&mut errors, "artist", patch.artist.as_deref());
        errors.into_result()
    }
}

impl Populate for Album {
    type Target = Track;
    type Populated = PopulatedAlbum;

    fn references(&self) -> &[DocId] {
        &self.tracks
    }

    fn populate(self, resolved: &HashMap<DocId, Record<Track>>) -> PopulatedAlbum {
        Album {
            tracks: resolve_references(&self.tracks, resolved),
            title: self.title,
            artist: self.artist,
            release_date: self.release_date,
            genre: self.genre,
            price: self.price,
            artwork_path: self.artwork_path,
        }
    }
}
