//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default directory scanned for audio files
pub const DEFAULT_AUDIO_DIR: &str = "Audio";

/// Default directory transcriptions are written to
pub const DEFAULT_OUTPUT_DIR: &str = "Transcriptions";

/// Default directory scanned for prompt templates
pub const DEFAULT_PROMPTS_DIR: &str = "prompts";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub audio_dir: Option<String>,
    pub output_dir: Option<String>,
    pub prompts_dir: Option<String>,
    pub model: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            audio_dir: Some(DEFAULT_AUDIO_DIR.to_string()),
            output_dir: Some(DEFAULT_OUTPUT_DIR.to_string()),
            prompts_dir: Some(DEFAULT_PROMPTS_DIR.to_string()),
            model: Some(DEFAULT_MODEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            audio_dir: other.audio_dir.or(self.audio_dir),
            output_dir: other.output_dir.or(self.output_dir),
            prompts_dir: other.prompts_dir.or(self.prompts_dir),
            model: other.model.or(self.model),
        }
    }

    /// Get the audio directory, or the default if not set
    pub fn audio_dir_or_default(&self) -> String {
        self.audio_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_AUDIO_DIR.to_string())
    }

    /// Get the output directory, or the default if not set
    pub fn output_dir_or_default(&self) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }

    /// Get the prompts directory, or the default if not set
    pub fn prompts_dir_or_default(&self) -> String {
        self.prompts_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPTS_DIR.to_string())
    }

    /// Get the model, or the default if not set
    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }
}
