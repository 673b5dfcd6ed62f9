//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the filesystem and the Gemini API.

pub mod catalog;
pub mod config;
pub mod prompts;
pub mod transcription;
pub mod writer;

// Re-export adapters
pub use catalog::AudioCatalog;
pub use config::XdgConfigStore;
pub use prompts::PromptLibrary;
pub use transcription::GeminiTranscriber;
pub use writer::FsTranscriptWriter;
