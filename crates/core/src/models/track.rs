//! Single tracks sold individually and bundled into albums.

use serde::{Deserialize, Serialize};

use crate::document::{Collection, Document};
use crate::media::{validate_files, MediaFile, MediaFileInput};
use crate::types::Timestamp;
use crate::validation::{reject_empty_text, require, require_text, ValidationErrors};

/// A stored track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub release_date: Timestamp,
    #[serde(default)]
    pub files: Vec<MediaFile>,
    pub preview_path: String,
    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Body of `POST /api/tracks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub release_date: Option<Timestamp>,
    pub files: Option<Vec<MediaFileInput>>,
    pub preview_path: Option<String>,
    pub duration: Option<f64>,
}

/// Body of `PUT /api/tracks/{id}`. Files, preview and duration are fixed
/// once a track is created.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Document for Track {
    const COLLECTION: Collection = Collection::Tracks;
    const ENTITY: &'static str = "Track";

    type Create = CreateTrack;
    type Patch = UpdateTrack;

    fn from_create(input: CreateTrack, now: Timestamp) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = require_text(&mut errors, "title", input.title);
        let artist = require_text(&mut errors, "artist", input.artist);
        let price = require(&mut errors, "price", input.price);
        let preview_path = require_text(&mut errors, "previewPath", input.preview_path);
        let files = validate_files(&mut errors, input.files.unwrap_or_default());

        match (title, artist, price, preview_path) {
            (Some(title), Some(artist), Some(price), Some(preview_path)) if errors.is_empty() => {
                Ok(Track {
                    title,
                    artist,
                    price,
                    description: input.description,
                    genre: input.genre,
                    release_date: input.release_date.unwrap_or(now),
                    files,
                    preview_path,
                    duration: input.duration,
                })
            }
            _ => Err(errors),
        }
    }

    fn validate_patch(patch: &UpdateTrack) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        reject_empty_text(&mut errors, "title", patch.title.as_deref());
        reject_empty_text(&mut errors, "artist", patch.artist.as_deref());
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::AudioFormat;
    use chrono::{TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn minimal() -> CreateTrack {
        CreateTrack {
            title: Some("New Track".into()),
            artist: Some("New Artist".into()),
            price: Some(12.99),
            preview_path: Some("/p.mp3".into()),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_input_builds_track_with_defaults() {
        let track = Track::from_create(minimal(), now()).unwrap();
        assert_eq!(track.title, "New Track");
        assert_eq!(track.release_date, now());
        assert!(track.files.is_empty());
        assert_eq!(track.duration, None);
    }

    #[test]
    fn explicit_release_date_is_kept() {
        let date = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        let input = CreateTrack {
            release_date: Some(date),
            ..minimal()
        };
        assert_eq!(Track::from_create(input, now()).unwrap().release_date, date);
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let errors = Track::from_create(CreateTrack::default(), now()).unwrap_err();
        for field in ["title", "artist", "price", "previewPath"] {
            assert!(errors.has_field(field), "missing violation for {field}");
        }
    }

    #[test]
    fn zero_price_is_accepted() {
        let input = CreateTrack {
            price: Some(0.0),
            ..minimal()
        };
        assert_eq!(Track::from_create(input, now()).unwrap().price, 0.0);
    }

    #[test]
    fn unknown_file_format_is_rejected() {
        let input = CreateTrack {
            files: Some(vec![MediaFileInput {
                format: Some("ogg".into()),
                file_path: Some("/a.ogg".into()),
            }]),
            ..minimal()
        };
        let errors = Track::from_create(input, now()).unwrap_err();
        assert!(errors.has_field("files.0.format"));
    }

    #[test]
    fn valid_files_are_stored() {
        let input = CreateTrack {
            files: Some(vec![MediaFileInput {
                format: Some("wav".into()),
                file_path: Some("/uploads/new_test.wav".into()),
            }]),
            ..minimal()
        };
        let track = Track::from_create(input, now()).unwrap();
        assert_eq!(track.files[0].format, AudioFormat::Wav);
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch: UpdateTrack =
            serde_json::from_value(serde_json::json!({"price": 0, "files": []})).unwrap();
        let set = serde_json::to_value(&patch).unwrap();
        assert_eq!(set, serde_json::json!({"price": 0.0}));
    }

    #[test]
    fn patch_rejects_empty_title() {
        let patch = UpdateTrack {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(Track::validate_patch(&patch).is_err());
    }

    #[test]
    fn patch_allows_empty_description() {
        let patch = UpdateTrack {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(Track::validate_patch(&patch).is_ok());
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_optionals() {
        let track = Track::from_create(minimal(), now()).unwrap();
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["previewPath"], "/p.mp3");
        assert!(json.get("releaseDate").is_some());
        assert!(json.get("genre").is_none());
    }
}
