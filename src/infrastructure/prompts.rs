//! Prompt template library

use std::path::{Path, PathBuf};

use crate::domain::error::CatalogError;
use crate::domain::prompts::PromptCandidate;
use crate::domain::transcription::TranscriptionPrompt;

/// Scans and loads markdown prompt templates
pub struct PromptLibrary;

impl PromptLibrary {
    /// Scan a directory for `.md` templates.
    ///
    /// Candidates are ordered by their numeric key with filename as the
    /// tie-break, so the menu is deterministic regardless of directory
    /// enumeration order.
    pub async fn scan(dir: impl AsRef<Path>) -> Result<Vec<PromptCandidate>, CatalogError> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Err(CatalogError::DirNotFound(dir.display().to_string()));
        }

        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| CatalogError::ReadError(e.to_string()))?;

        let mut paths: Vec<PathBuf> = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CatalogError::ReadError(e.to_string()))?
        {
            let path = entry.path();
            let is_md = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("md"));
            if path.is_file() && is_md {
                paths.push(path);
            }
        }

        paths.sort();

        let mut candidates: Vec<PromptCandidate> =
            paths.into_iter().map(PromptCandidate::from_path).collect();
        candidates.sort_by(|a, b| {
            a.order()
                .cmp(&b.order())
                .then_with(|| a.path().cmp(b.path()))
        });

        Ok(candidates)
    }

    /// Load a candidate's prompt content from its markdown file
    pub async fn load(candidate: &PromptCandidate) -> Result<TranscriptionPrompt, CatalogError> {
        let content = tokio::fs::read_to_string(candidate.path())
            .await
            .map_err(|e| CatalogError::ReadError(e.to_string()))?;

        Ok(TranscriptionPrompt::from_markdown(&content))
    }
}
