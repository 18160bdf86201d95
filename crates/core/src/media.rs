//! Downloadable audio file references attached to tracks and sounds.
//!
//! Paths are opaque strings; nothing here touches the filesystem.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{require_text, ValidationErrors};

/// Audio container formats a file entry may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
    Flac,
    Aiff,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 4] = [
        AudioFormat::Mp3,
        AudioFormat::Wav,
        AudioFormat::Flac,
        AudioFormat::Aiff,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
            AudioFormat::Flac => "flac",
            AudioFormat::Aiff => "aiff",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a format string is not one of [`AudioFormat::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported audio format '{0}', expected one of mp3, wav, flac, aiff")]
pub struct UnknownFormat(pub String);

impl FromStr for AudioFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AudioFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// A stored file entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub format: AudioFormat,
    pub file_path: String,
}

/// A file entry as submitted by a client, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFileInput {
    pub format: Option<String>,
    pub file_path: Option<String>,
}

/// Validate submitted file entries, recording violations as `files.{i}.{field}`.
///
/// Only fully valid entries are returned; callers must check `errors`.
pub fn validate_files(errors: &mut ValidationErrors, inputs: Vec<MediaFileInput>) -> Vec<MediaFile> {
    let mut files = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.into_iter().enumerate() {
        let format_field = format!("files.{i}.format");
        let format = match input.format.as_deref() {
            None | Some("") => {
                errors.push(format_field, "is required");
                None
            }
            Some(raw) => match raw.parse::<AudioFormat>() {
                Ok(format) => Some(format),
                Err(err) => {
                    errors.push(format_field, err.to_string());
                    None
                }
            },
        };
        let file_path = require_text(errors, &format!("files.{i}.filePath"), input.file_path);

        if let (Some(format), Some(file_path)) = (format, file_path) {
            files.push(MediaFile { format, file_path });
        }
    }
    files
}
