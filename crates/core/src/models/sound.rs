//! Individual sounds (one-shots, loops) sold alone or bundled into sample packs.

use serde::{Deserialize, Serialize};

use crate::document::{Collection, Document};
use crate::media::{validate_files, MediaFile, MediaFileInput};
use crate::types::Timestamp;
use crate::validation::{reject_empty_text, require, require_text, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sound {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub files: Vec<MediaFile>,
    pub preview_path: String,
    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSound {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub files: Option<Vec<MediaFileInput>>,
    pub preview_path: Option<String>,
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Document for Sound {
    const COLLECTION: Collection = Collection::Sounds;
    const ENTITY: &'static str = "Sound";

    type Create = CreateSound;
    type Patch = UpdateSound;

    fn from_create(input: CreateSound, _now: Timestamp) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = require_text(&mut errors, "name", input.name);
        let price = require(&mut errors, "price", input.price);
        let preview_path = require_text(&mut errors, "previewPath", input.preview_path);
        let files = validate_files(&mut errors, input.files.unwrap_or_default());

        match (name, price, preview_path) {
            (Some(name), Some(price), Some(preview_path)) if errors.is_empty() => Ok(Sound {
                name,
                description: input.description,
                price,
                tags: input.tags.unwrap_or_default(),
                files,
                preview_path,
                duration: input.duration,
            }),
            _ => Err(errors),
        }
    }

    fn validate_patch(patch: &UpdateSound) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        reject_empty_text(&mut errors, "name", patch.name.as_deref());
        errors.into_result()
    }
}
