//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod catalog;
pub mod config;
pub mod error;
pub mod prompts;
pub mod transcription;

// Re-export common types
pub use catalog::AudioFile;
pub use config::AppConfig;
pub use error::*;
pub use prompts::PromptCandidate;
pub use transcription::{AudioData, AudioMimeType, TranscriptionPrompt};
