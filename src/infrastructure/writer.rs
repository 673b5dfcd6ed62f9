//! Filesystem transcript writer

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{TranscriptSink, WriteError};
use crate::domain::catalog::AudioFile;

/// Label written into every output header
const GENERATOR_LABEL: &str = "Google Gemini 2.5 Pro";

/// Suffix appended to the source file's stem
const OUTPUT_SUFFIX: &str = "_transcription.txt";

/// Writes transcriptions as text files with a metadata header
pub struct FsTranscriptWriter {
    output_dir: PathBuf,
}

impl FsTranscriptWriter {
    /// Create a writer targeting the given output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Output path for a given source file
    pub fn output_path(&self, source: &AudioFile) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", source.stem(), OUTPUT_SUFFIX))
    }

    /// Render the full file content: header, separator, blank line, body
    fn render(text: &str, source: &AudioFile) -> String {
        format!(
            "Transcription of: {}\nGenerated using: {}\n{}\n\n{}",
            source.file_name(),
            GENERATOR_LABEL,
            "=".repeat(50),
            text
        )
    }
}

#[async_trait]
impl TranscriptSink for FsTranscriptWriter {
    async fn write(&self, text: &str, source: &AudioFile) -> Result<PathBuf, WriteError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| WriteError::CreateDirFailed(e.to_string()))?;

        let path = self.output_path(source);
        tokio::fs::write(&path, Self::render(text, source))
            .await
            .map_err(|e| WriteError::WriteFailed(e.to_string()))?;

        Ok(path)
    }
}
