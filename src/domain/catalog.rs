//! Audio catalog domain types

use std::path::{Path, PathBuf};

use super::transcription::AudioMimeType;

/// A discovered audio file, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    path: PathBuf,
    mime_type: AudioMimeType,
}

impl AudioFile {
    /// Create an AudioFile from a path, if its extension is supported
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let mime_type = AudioMimeType::from_path(&path)?;
        Some(Self { path, mime_type })
    }

    /// Full path to the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension, for display and the output header
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without extension, used to derive the output file name
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// MIME type derived from the extension
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }
}
