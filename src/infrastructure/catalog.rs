//! Audio directory scanner

use std::path::{Path, PathBuf};

use crate::domain::catalog::AudioFile;
use crate::domain::error::CatalogError;

/// Scans a directory for supported audio files
pub struct AudioCatalog;

impl AudioCatalog {
    /// Scan a directory and return supported audio files sorted by path.
    ///
    /// Files whose lowercase extension is not in the supported set are
    /// skipped. A missing directory is reported as `DirNotFound` so the
    /// caller can warn and continue with an empty batch.
    pub async fn scan(dir: impl AsRef<Path>) -> Result<Vec<AudioFile>, CatalogError> {
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
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| CatalogError::ReadError(e.to_string()))?;
            if file_type.is_file() {
                paths.push(entry.path());
            }
        }

        paths.sort();

        Ok(paths.into_iter().filter_map(AudioFile::from_path).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"data").unwrap();
    }

    #[tokio::test]
    async fn scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.wav");
        touch(dir.path(), "a.mp3");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.FLAC");

        let files = AudioCatalog::scan(dir.path()).await.unwrap();
        let names: Vec<String> = files.iter().map(|f| f.file_name()).collect();
        assert_eq!(names, ["a.mp3", "b.wav", "c.FLAC"]);
    }

    #[tokio::test]
    async fn scan_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.mp3")).unwrap();
        touch(dir.path(), "real.mp3");

        let files = AudioCatalog::scan(dir.path()).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), "real.mp3");
    }

    #[tokio::test]
    async fn scan_missing_dir_is_dir_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = AudioCatalog::scan(&missing).await.unwrap_err();
        assert!(matches!(err, CatalogError::DirNotFound(_)));
    }

    #[tokio::test]
    async fn scan_empty_dir_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = AudioCatalog::scan(dir.path()).await.unwrap();
        assert!(files.is_empty());
    }
}
