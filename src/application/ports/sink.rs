//! Transcript output port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::AudioFile;

/// Transcript write errors
#[derive(Debug, Clone, Error)]
pub enum WriteError {
    #[error("Failed to create output directory: {0}")]
    CreateDirFailed(String),

    #[error("Failed to write transcription file: {0}")]
    WriteFailed(String),
}

/// Port for persisting transcriptions
#[async_trait]
pub trait TranscriptSink: Send + Sync {
    /// Write a transcription for the given source file.
    ///
    /// # Returns
    /// The path the transcription was written to
    async fn write(&self, text: &str, source: &AudioFile) -> Result<PathBuf, WriteError>;
}
