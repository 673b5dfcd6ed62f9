//! Prompt template menu entries

use std::path::{Path, PathBuf};

/// A prompt template discovered in the prompts directory.
///
/// The filename stem encodes an optional menu position: a leading integer
/// before the first underscore becomes the order key, the rest becomes the
/// description. `3_speaker_notes.md` yields key 3 and "Speaker Notes";
/// a stem with no parseable prefix yields key 0 (shown unnumbered).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCandidate {
    order: u32,
    description: String,
    path: PathBuf,
}

impl PromptCandidate {
    /// Derive a candidate from a markdown file path
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (order, label) = match stem.split_once('_') {
            Some((prefix, rest)) => match prefix.parse::<u32>() {
                Ok(n) => (n, rest.to_string()),
                Err(_) => (0, stem.clone()),
            },
            None => (0, stem.clone()),
        };

        Self {
            order,
            description: title_case(&label),
            path,
        }
    }

    /// Menu order key; 0 means unnumbered
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Whether the candidate carries an explicit menu position
    pub fn is_numbered(&self) -> bool {
        self.order > 0
    }

    /// Human-readable description shown in the menu
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Path to the source markdown file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Title-case a filename label: underscores to spaces, each word capitalized
fn title_case(label: &str) -> String {
    label
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
