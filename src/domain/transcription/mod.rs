//! Transcription domain module

mod audio_data;
mod prompt;

pub use audio_data::{AudioData, AudioMimeType};
pub use prompt::TranscriptionPrompt;
