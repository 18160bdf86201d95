//! Sample packs: priced bundles holding an ordered list of sound references.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::{resolve_references, Collection, Document, Populate, Record};
use crate::models::sound::Sound;
use crate::types::{DocId, Timestamp};
use crate::validation::{reject_empty_text, require, require_text, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePack<T = DocId> {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "Vec::new")]
    pub sounds: Vec<T>,
    pub preview_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub type PopulatedSamplePack = SamplePack<Record<Sound>>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSamplePack {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub sounds: Option<Vec<DocId>>,
    pub preview_path: Option<String>,
    pub genre: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSamplePack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sounds: Option<Vec<DocId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Document for SamplePack {
    const COLLECTION: Collection = Collection::SamplePacks;
    const ENTITY: &'static str = "Sample pack";

    type Create = CreateSamplePack;
    type Patch = UpdateSamplePack;

    fn from_create(input: CreateSamplePack, _now: Timestamp) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = require_text(&mut errors, "name", input.name);
        let price = require(&mut errors, "price", input.price);
        let preview_path = require_text(&mut errors, "previewPath", input.preview_path);

        match (name, price, preview_path) {
            (Some(name), Some(price), Some(preview_path)) => Ok(SamplePack {
                name,
                description: input.description,
                price,
                sounds: input.sounds.unwrap_or_default(),
                preview_path,
                genre: input.genre,
                tags: input.tags.unwrap_or_default(),
            }),
            _ => Err(errors),
        }
    }

    fn validate_patch(patch: &UpdateSamplePack) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        reject_empty_text(&mut errors, "name", patch.name.as_deref());
        errors.into_result()
    }
}

impl Populate for SamplePack {
    type Target = Sound;
    type Populated = PopulatedSamplePack;

    fn references(&self) -> &[DocId] {
        &self.sounds
    }

    fn populate(self, resolved: &HashMap<DocId, Record<Sound>>) -> PopulatedSamplePack {
        SamplePack {
            sounds: resolve_references(&self.sounds, resolved),
            name: self.name,
            description: self.description,
            price: self.price,
            preview_path: self.preview_path,
            genre: self.genre,
            tags: self.tags,
        }
    }
}
